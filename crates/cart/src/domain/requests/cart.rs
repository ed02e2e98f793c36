use crate::model::cart::CartItem;
use serde::{Deserialize, Serialize};
use shared::{errors::RepositoryError, utils::format_validation_errors};
use utoipa::ToSchema;
use validator::Validate;

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CartItemRequest {
    #[serde(rename = "productId")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub product_id: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "must be at least 1"))]
    #[schema(example = 1)]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCartRequest {
    #[serde(default)]
    pub products: Vec<CartItemRequest>,
}

impl CreateCartRequest {
    /// Validates every line item, reporting each failure as
    /// `products[<index>].<field>: <message>`.
    pub fn check(&self) -> Result<(), RepositoryError> {
        let mut errors = Vec::new();

        for (index, item) in self.products.iter().enumerate() {
            if let Err(e) = item.validate() {
                errors.extend(
                    format_validation_errors(&e)
                        .into_iter()
                        .map(|m| format!("products[{index}].{m}")),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RepositoryError::Validation(errors))
        }
    }

    /// Collapses repeated product ids into one line item, summing quantities
    /// and keeping first-seen order.
    pub fn merged_items(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let mut items: Vec<CartItem> = Vec::with_capacity(self.products.len());

        for req in &self.products {
            match items.iter_mut().find(|i| i.product_id == req.product_id) {
                Some(existing) => {
                    existing.quantity = add_quantity(existing.quantity, req.quantity)?;
                }
                None => items.push(CartItem {
                    product_id: req.product_id.clone(),
                    quantity: req.quantity,
                }),
            }
        }

        Ok(items)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddProductToCartRequest {
    #[validate(range(min = 1, message = "must be at least 1"))]
    #[schema(example = 1)]
    pub quantity: Option<u32>,
}

impl AddProductToCartRequest {
    pub fn check(&self) -> Result<(), RepositoryError> {
        self.validate()
            .map_err(|e| RepositoryError::Validation(format_validation_errors(&e)))
    }

    pub fn amount(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}

pub fn add_quantity(current: u32, amount: u32) -> Result<u32, RepositoryError> {
    current
        .checked_add(amount)
        .ok_or_else(|| RepositoryError::validation("quantity: exceeds the maximum line quantity"))
}
