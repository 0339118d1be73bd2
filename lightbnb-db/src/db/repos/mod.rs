//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one query per call.

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
