//! Query gateway - the entry point the HTTP layer calls
//!
//! Wraps a caller-supplied pool. Each method runs one statement through the
//! matching repository and logs failures by class before returning them.

use sqlx::PgPool;

use crate::config::DbConfig;
use crate::db::{create_pool, PropertyRepo, ReservationRepo, UserRepo};
use crate::error::DbResult;
use crate::models::{
    GuestReservation, NewProperty, NewUser, Property, PropertyFilter, PropertyListing, User,
};

/// Shared handle to the LightBnB store
#[derive(Debug, Clone)]
pub struct QueryGateway {
    pool: PgPool,
}

impl QueryGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the pool from `config` and wrap it.
    pub async fn connect(config: &DbConfig) -> DbResult<Self> {
        Ok(Self::new(create_pool(config).await?))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    pub async fn get_user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        self.users()
            .get_by_email(email)
            .await
            .inspect_err(|e| e.trace("get_user_by_email"))
    }

    pub async fn get_user_by_id(&self, id: i32) -> DbResult<Option<User>> {
        self.users()
            .get_by_id(id)
            .await
            .inspect_err(|e| e.trace("get_user_by_id"))
    }

    pub async fn add_user(&self, user: &NewUser) -> DbResult<User> {
        self.users()
            .add(user)
            .await
            .inspect_err(|e| e.trace("add_user"))
    }

    /// Completed stays for `guest_id`, see [`ReservationRepo::for_guest`].
    pub async fn get_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> DbResult<Vec<GuestReservation>> {
        self.reservations()
            .for_guest(guest_id, limit)
            .await
            .inspect_err(|e| e.trace("get_reservations_for_guest"))
    }

    pub async fn search_properties(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> DbResult<Vec<PropertyListing>> {
        self.properties()
            .search(filter, limit)
            .await
            .inspect_err(|e| e.trace("search_properties"))
    }

    pub async fn add_property(&self, property: &NewProperty) -> DbResult<Property> {
        self.properties()
            .add(property)
            .await
            .inspect_err(|e| e.trace("add_property"))
    }
}
