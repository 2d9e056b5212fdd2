//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    products::models::{NewProduct, Product, ProductUpdate},
    rows::{amount_to_i64, try_get_amount},
};

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_FEATURED_PRODUCTS_SQL: &str = include_str!("sql/list_featured_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_BY_SLUG_SQL: &str = include_str!("sql/get_product_by_slug.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a catalogue entry. Id and slug are both the derived slug;
    /// a duplicate surfaces as a unique violation.
    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        let id = product.storefront_id();
        let price = amount_to_i64(product.price, "price")?;
        let original_price = product
            .original_price
            .map(|price| amount_to_i64(price, "original_price"))
            .transpose()?;
        let stock = product
            .stock
            .map(|stock| {
                i32::try_from(stock).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "stock".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(&id)
            .bind(&id)
            .bind(product.name)
            .bind(product.category)
            .bind(price)
            .bind(original_price)
            .bind(product.short_description)
            .bind(product.net_qty)
            .bind(product.image)
            .bind(product.featured)
            .bind(stock)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_featured_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_FEATURED_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &str,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_product_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_BY_SLUG_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &str,
        update: ProductUpdate,
    ) -> Result<Product, sqlx::Error> {
        let price = update
            .price
            .map(|price| amount_to_i64(price, "price"))
            .transpose()?;
        let original_price = update
            .original_price
            .map(|price| amount_to_i64(price, "original_price"))
            .transpose()?;
        let stock = update
            .stock
            .map(|stock| {
                i32::try_from(stock).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "stock".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product)
            .bind(price)
            .bind(original_price)
            .bind(update.short_description)
            .bind(update.net_qty)
            .bind(stock)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price = try_get_amount(row, "price")?;

        let original_price = row
            .try_get::<Option<i64>, _>("original_price")?
            .map(|value| {
                u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "original_price".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        let stock = row
            .try_get::<Option<i32>, _>("stock")?
            .map(|value| {
                u32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "stock".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        Ok(Self {
            id: row.try_get("id")?,
            slug: row.try_get("slug")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            price,
            original_price,
            short_description: row.try_get("short_description")?,
            net_qty: row.try_get("net_qty")?,
            image: row.try_get("image")?,
            featured: row.try_get("featured")?,
            stock,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
