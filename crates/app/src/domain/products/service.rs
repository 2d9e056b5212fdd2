//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductUpdate},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(name = %product.name),
        err
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        info!(product = %created.id, "created product");

        Ok(created)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_featured_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_featured_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: &str) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product_by_slug(&mut tx, slug).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        err
    )]
    async fn update_product(
        &self,
        product: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        info!(product = %updated.id, price = updated.price, "updated product");

        Ok(updated)
    }

    #[tracing::instrument(name = "products.service.delete_product", skip(self), err)]
    async fn delete_product(&self, product: &str) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Add a catalogue entry under its name-derived slug id. A product
    /// whose name collapses to an existing id fails with `AlreadyExists`.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError>;

    /// Retrieves all products for the storefront and the admin table.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the products highlighted on the landing page.
    async fn list_featured_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product by id. Callers render `NotFound` as an
    /// empty fallback state, not a hard failure.
    async fn get_product(&self, product: &str) -> Result<Product, ProductsServiceError>;

    /// Retrieve a single product by its URL slug.
    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, ProductsServiceError>;

    /// Merge the given fields into the stored product.
    async fn update_product(
        &self,
        product: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Remove a product. Existing order lines keep their frozen snapshot.
    async fn delete_product(&self, product: &str) -> Result<(), ProductsServiceError>;
}
