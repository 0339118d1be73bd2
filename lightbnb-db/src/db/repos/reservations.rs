//! Reservation repository - completed stays per guest

use sqlx::PgPool;

use crate::error::DbError;
use crate::models::GuestReservation;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Past reservations for a guest, oldest stay first, with the reviewed
    /// property and its average rating.
    ///
    /// `end_date` is compared against `now()`, so a stay ending today is
    /// already completed; one ending tomorrow is not.
    ///
    /// Grouped per property and reservation so each row averages the
    /// property's reviews exactly once.
    pub async fn for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<GuestReservation>, DbError> {
        let rows = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                properties.*,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE reservations.guest_id = $1
              AND reservations.end_date < now()
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date ASC
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.max(0))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
