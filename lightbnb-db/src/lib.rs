//! lightbnb-db: query gateway for the LightBnB rental listings store
//!
//! Parameterized PostgreSQL queries over `users`, `properties`,
//! `reservations` and `property_reviews`, shaped into plain records for an
//! HTTP layer.
//!
//! ```ignore
//! use lightbnb_db::{DbConfig, PropertyFilter, QueryGateway, DEFAULT_LIMIT};
//!
//! let gateway = QueryGateway::connect(&DbConfig::from_env()?).await?;
//! let filter = PropertyFilter::default().city("Vancouver").minimum_rating(4.0);
//! let listings = gateway.search_properties(&filter, DEFAULT_LIMIT).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod models;

pub use config::DbConfig;
pub use db::{create_lazy_pool, create_pool, Predicate, PropertySearch};
pub use error::{DbError, DbResult, ErrorClass, Violation};
pub use gateway::QueryGateway;
pub use models::{
    GuestReservation, NewProperty, NewUser, Property, PropertyFilter, PropertyListing, User,
    DEFAULT_LIMIT,
};
