//! Property search statement builder
//!
//! A [`PropertyFilter`] is folded into a list of [`Predicate`]s, each owning
//! the values it binds. Rendering walks that list once: the first predicate
//! opens `WHERE`, every later one is joined with `AND`. The rating bound is
//! an aggregate and goes in `HAVING` after `GROUP BY`.
//!
//! Placeholders are allocated by `sqlx::QueryBuilder` in push order, so
//! `$1..$n` are contiguous and never reused. Option values only ever reach
//! the statement as bound parameters.

use sqlx::{Postgres, QueryBuilder};

use crate::models::PropertyFilter;

const BASE_SELECT: &str = "SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

/// A `WHERE` predicate together with its bound values
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `city ILIKE pattern`, pattern already wrapped in `%`.
    CityMatches(String),
    OwnedBy(i32),
    /// Inclusive nightly cost range.
    CostBetween { min: i32, max: i32 },
}

impl Predicate {
    /// Number of placeholders this predicate consumes.
    pub fn bind_count(&self) -> usize {
        match self {
            Self::CityMatches(_) | Self::OwnedBy(_) => 1,
            Self::CostBetween { .. } => 2,
        }
    }

    fn push_to(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::CityMatches(pattern) => {
                builder.push("properties.city ILIKE ");
                builder.push_bind(pattern.clone());
            }
            Self::OwnedBy(owner_id) => {
                builder.push("properties.owner_id = ");
                builder.push_bind(*owner_id);
            }
            Self::CostBetween { min, max } => {
                builder.push("properties.cost_per_night >= ");
                builder.push_bind(*min);
                builder.push(" AND properties.cost_per_night <= ");
                builder.push_bind(*max);
            }
        }
    }
}

/// A fully resolved property search
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearch {
    predicates: Vec<Predicate>,
    minimum_rating: Option<f64>,
    limit: i64,
}

impl PropertySearch {
    /// Resolve `filter` into predicates. A missing price bound is widened to
    /// `0` or `i32::MAX`; a negative `limit` is treated as `0`.
    pub fn new(filter: &PropertyFilter, limit: i64) -> Self {
        let city = filter.city_pattern().map(Predicate::CityMatches);
        let owner = filter.owner_filter().map(Predicate::OwnedBy);
        let cost = filter.has_price_range().then(|| Predicate::CostBetween {
            min: filter.minimum_price_per_night.unwrap_or(0),
            max: filter.maximum_price_per_night.unwrap_or(i32::MAX),
        });

        Self {
            predicates: [city, owner, cost].into_iter().flatten().collect(),
            minimum_rating: filter.minimum_rating,
            limit: limit.max(0),
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn minimum_rating(&self) -> Option<f64> {
        self.minimum_rating
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Total placeholders in the rendered statement, `LIMIT` included.
    pub fn bind_count(&self) -> usize {
        let predicates: usize = self.predicates.iter().map(Predicate::bind_count).sum();
        predicates + usize::from(self.minimum_rating.is_some()) + 1
    }

    /// Render into a query builder ready for `build_query_as`.
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(BASE_SELECT);

        let mut where_opened = false;
        for predicate in &self.predicates {
            builder.push(if where_opened { " AND " } else { " WHERE " });
            where_opened = true;
            predicate.push_to(&mut builder);
        }

        builder.push(" GROUP BY properties.id");

        if let Some(rating) = self.minimum_rating {
            builder.push(" HAVING AVG(property_reviews.rating)::float8 >= ");
            builder.push_bind(rating);
        }

        builder.push(" ORDER BY properties.cost_per_night ASC LIMIT ");
        builder.push_bind(self.limit);

        builder
    }

    /// Rendered statement text (placeholders only, no values).
    pub fn sql(&self) -> String {
        self.build().sql().to_owned()
    }
}
