//! Property repository - filtered search and listing creation

use sqlx::PgPool;
use tracing::debug;

use crate::db::search::PropertySearch;
use crate::error::DbError;
use crate::models::{NewProperty, Property, PropertyFilter, PropertyListing};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reviewed properties matching `filter`, cheapest first.
    pub async fn search(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, DbError> {
        let search = PropertySearch::new(filter, limit);
        let mut builder = search.build();
        debug!(sql = builder.sql(), binds = search.bind_count(), "property search");

        let listings = builder
            .build_query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await?;

        debug!(count = listings.len(), "property search returned");
        Ok(listings)
    }

    /// Insert all 14 listing columns, returning the stored row.
    pub async fn add(&self, property: &NewProperty) -> Result<Property, DbError> {
        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
