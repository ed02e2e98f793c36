use super::CartRepository;
use crate::{
    abstract_trait::cart::repository::CartCommandRepositoryTrait,
    domain::requests::cart::{AddProductToCartRequest, CreateCartRequest, add_quantity},
    model::cart::{Cart as CartModel, CartItem},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound(format!("Cart {id} not found"))
}

#[async_trait]
impl CartCommandRepositoryTrait for CartRepository {
    async fn create_cart(&self, req: &CreateCartRequest) -> Result<CartModel, RepositoryError> {
        req.check()?;

        let mut carts = self.carts.write().await;

        for item in &req.products {
            self.ensure_product(&item.product_id).await?;
        }

        let cart = CartModel {
            id: self.id_generator.generate(),
            products: req.merged_items()?,
        };

        if carts.iter().any(|c| c.id == cart.id) {
            error!("❌ Generated cart id {} is already in use", cart.id);
            return Err(RepositoryError::IdCollision(cart.id));
        }

        carts.push(cart.clone());

        self.store.persist(&carts).await.map_err(|e| {
            error!("❌ Failed to persist new cart {}: {e}", cart.id);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created cart {} with {} line items",
            cart.id,
            cart.products.len()
        );
        Ok(cart)
    }

    async fn add_product_to_cart(
        &self,
        cart_id: &str,
        product_id: &str,
        req: &AddProductToCartRequest,
    ) -> Result<CartModel, RepositoryError> {
        let mut carts = self.carts.write().await;

        let index = carts
            .iter()
            .position(|c| c.id == cart_id)
            .ok_or_else(|| not_found(cart_id))?;

        self.ensure_product(product_id).await?;
        req.check()?;

        let amount = req.amount();
        let cart = &mut carts[index];

        match cart.products.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity = add_quantity(item.quantity, amount)?,
            None => cart.products.push(CartItem {
                product_id: product_id.to_string(),
                quantity: amount,
            }),
        }

        let updated = cart.clone();

        self.store.persist(&carts).await.map_err(|e| {
            error!("❌ Failed to persist cart {cart_id}: {e}");
            RepositoryError::from(e)
        })?;

        info!("➕ Added {amount} x {product_id} to cart {cart_id}");
        Ok(updated)
    }

    async fn delete_cart(&self, id: &str) -> Result<CartModel, RepositoryError> {
        let mut carts = self.carts.write().await;

        let index = carts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = carts.remove(index);

        self.store.persist(&carts).await.map_err(|e| {
            error!("❌ Failed to persist removal of cart {id}: {e}");
            RepositoryError::from(e)
        })?;

        info!("🗑️ Deleted cart {id}");
        Ok(removed)
    }
}
