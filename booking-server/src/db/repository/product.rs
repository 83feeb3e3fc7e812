//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::Product;
use shared::models::{ProductCreate, ProductUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active products, storefront order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE is_active = true ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find every product including deactivated ones (admin)
    pub async fn find_all_admin(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find active products for one category
    pub async fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<Product>> {
        let cat_thing = make_thing("category", category_id);
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE category = $cat AND is_active = true ORDER BY sort_order")
            .bind(("cat", cat_thing))
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let product: Option<Product> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(product)
    }

    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if data.base_price < 0.0 {
            return Err(RepoError::Validation("base_price must not be negative".into()));
        }
        if data.extra_hour_percentage.is_some_and(|p| p < 0.0) {
            return Err(RepoError::Validation(
                "extra_hour_percentage must not be negative".into(),
            ));
        }

        let product = Product {
            id: None,
            name: data.name,
            description: data.description,
            category: make_thing("category", &data.category),
            base_price: data.base_price,
            extra_hour_percentage: data.extra_hour_percentage.unwrap_or(0.0),
            images: data.images.unwrap_or_default(),
            sort_order: data.sort_order.unwrap_or(0),
            is_active: true,
        };

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product. The category reference is bound as a record
    /// pointer, so the update goes through an explicit SET query.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let thing = make_thing(TABLE, id);

        if data.base_price.is_some_and(|p| p < 0.0) {
            return Err(RepoError::Validation("base_price must not be negative".into()));
        }
        if data.extra_hour_percentage.is_some_and(|p| p < 0.0) {
            return Err(RepoError::Validation(
                "extra_hour_percentage must not be negative".into(),
            ));
        }

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.category.is_some() {
            set_parts.push("category = $category");
        }
        if data.base_price.is_some() {
            set_parts.push("base_price = $base_price");
        }
        if data.extra_hour_percentage.is_some() {
            set_parts.push("extra_hour_percentage = $extra_hour_percentage");
        }
        if data.images.is_some() {
            set_parts.push("images = $images");
        }
        if data.sort_order.is_some() {
            set_parts.push("sort_order = $sort_order");
        }
        if data.is_active.is_some() {
            set_parts.push("is_active = $is_active");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(query_str).bind(("thing", thing));

        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.category {
            query = query.bind(("category", make_thing("category", &v)));
        }
        if let Some(v) = data.base_price {
            query = query.bind(("base_price", v));
        }
        if let Some(v) = data.extra_hour_percentage {
            query = query.bind(("extra_hour_percentage", v));
        }
        if let Some(v) = data.images {
            query = query.bind(("images", v));
        }
        if let Some(v) = data.sort_order {
            query = query.bind(("sort_order", v));
        }
        if let Some(v) = data.is_active {
            query = query.bind(("is_active", v));
        }

        let mut result = query.await?;
        let products: Vec<Product> = result.take(0)?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product. Existing reservations keep their frozen
    /// snapshots, so nothing dangles.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(TABLE, id);
        let result: Option<Product> = self.base.db().delete((TABLE, pure_id)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}
