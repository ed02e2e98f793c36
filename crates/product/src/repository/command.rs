use super::ProductRepository;
use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound(format!("Product {id} not found"))
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut products = self.products.write().await;

        let id = self.id_generator.generate();
        let product = req.clone().into_product(id)?;

        if products.iter().any(|p| p.id == product.id) {
            error!("❌ Generated product id {} is already in use", product.id);
            return Err(RepositoryError::IdCollision(product.id));
        }

        products.push(product.clone());

        self.store.persist(&products).await.map_err(|e| {
            error!("❌ Failed to persist new product {}: {e}", product.id);
            RepositoryError::from(e)
        })?;

        info!("✅ Created product {} ({})", product.id, product.title);
        Ok(product)
    }

    async fn update_product(
        &self,
        id: &str,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut products = self.products.write().await;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        req.check()?;
        req.apply_to(product);
        let updated = product.clone();

        self.store.persist(&products).await.map_err(|e| {
            error!("❌ Failed to persist update of product {id}: {e}");
            RepositoryError::from(e)
        })?;

        info!("🔄 Updated product {id}");
        Ok(updated)
    }

    async fn delete_product(&self, id: &str) -> Result<ProductModel, RepositoryError> {
        let mut products = self.products.write().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = products.remove(index);

        self.store.persist(&products).await.map_err(|e| {
            error!("❌ Failed to persist removal of product {id}: {e}");
            RepositoryError::from(e)
        })?;

        info!("🗑️ Deleted product {id}");
        Ok(removed)
    }
}
