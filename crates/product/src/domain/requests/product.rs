use crate::model::product::Product;
use serde::{Deserialize, Serialize};
use shared::{errors::RepositoryError, utils::format_validation_errors};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    #[schema(example = "Keyboard")]
    pub title: Option<String>,

    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    #[schema(example = "Mechanical keyboard, brown switches")]
    pub description: Option<String>,

    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    #[schema(example = "KB-001")]
    pub code: Option<String>,

    #[validate(required(message = "is required"))]
    #[schema(example = 59.9)]
    pub price: Option<f64>,

    pub status: Option<bool>,

    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    #[schema(example = "peripherals")]
    pub category: Option<String>,

    #[validate(required(message = "is required"))]
    #[schema(example = 25)]
    pub stock: Option<i64>,

    pub thumbnails: Option<Vec<String>>,
}

impl CreateProductRequest {
    /// Checks every required field and builds the record under `id`.
    ///
    /// All failures are reported together. Numeric fields must be present and
    /// non-zero at creation.
    pub fn into_product(self, id: String) -> Result<Product, RepositoryError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => format_validation_errors(&e),
        };

        if self.price == Some(0.0) {
            errors.push("price: must not be zero".to_string());
        }
        if self.stock == Some(0) {
            errors.push("stock: must not be zero".to_string());
        }

        let (
            true,
            Some(title),
            Some(description),
            Some(code),
            Some(price),
            Some(category),
            Some(stock),
        ) = (
            errors.is_empty(),
            self.title,
            self.description,
            self.code,
            self.price,
            self.category,
            self.stock,
        )
        else {
            errors.sort();
            return Err(RepositoryError::Validation(errors));
        };

        Ok(Product {
            id,
            title,
            description,
            code,
            price,
            status: self.status.unwrap_or(true),
            category,
            stock,
            thumbnails: self.thumbnails.unwrap_or_default(),
        })
    }
}

/// Partial update. `None` leaves a field untouched; `Some` always applies,
/// including `0`, `false` and an empty thumbnail list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub code: Option<String>,

    pub price: Option<f64>,

    pub status: Option<bool>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,

    pub stock: Option<i64>,

    pub thumbnails: Option<Vec<String>>,
}

impl UpdateProductRequest {
    pub fn check(&self) -> Result<(), RepositoryError> {
        self.validate()
            .map_err(|e| RepositoryError::Validation(format_validation_errors(&e)))
    }

    pub fn apply_to(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(code) = &self.code {
            product.code = code.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(thumbnails) = &self.thumbnails {
            product.thumbnails = thumbnails.clone();
        }
    }
}
