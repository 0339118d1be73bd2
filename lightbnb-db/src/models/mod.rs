//! Plain records mapped from LightBnB rows
//!
//! All records serialize to JSON for the HTTP layer and map from rows via
//! `sqlx::FromRow`. Columns not listed on a record are ignored.

pub mod filter;
pub mod property;
pub mod reservation;
pub mod user;

pub use filter::PropertyFilter;
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::GuestReservation;
pub use user::{NewUser, User};

/// Row cap used by list queries when the caller has no preference.
pub const DEFAULT_LIMIT: i64 = 10;
