//! Shared helpers for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored
//!
//! Every test creates its own users and uses a unique city name, so tests
//! can share one database and run in parallel.

#![allow(dead_code)]

use chrono::NaiveDate;
use lightbnb_db::{DbConfig, NewProperty, NewUser, QueryGateway};
use sqlx::PgPool;
use uuid::Uuid;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Arbitrary key serializing fixture setup across test binaries.
const SCHEMA_LOCK_KEY: i64 = 0x1b_2b_0b;

pub async fn gateway() -> QueryGateway {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lightbnb_db=debug")
        .with_test_writer()
        .try_init();

    let config = DbConfig::from_env().expect("database config");
    let gateway = QueryGateway::connect(&config)
        .await
        .expect("DATABASE_URL must point at a reachable database");
    apply_schema(gateway.pool()).await;
    gateway
}

async fn apply_schema(pool: &PgPool) {
    let mut conn = pool.acquire().await.expect("acquire");
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await
        .expect("advisory lock");
    sqlx::raw_sql(SCHEMA)
        .execute(&mut *conn)
        .await
        .expect("schema fixture");
    sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await
        .expect("advisory unlock");
}

pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

pub fn new_user(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: format!("{}@example.com", unique("guest")),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
    }
}

pub fn new_property(owner_id: i32, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: "Habit mix".to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg?auto=compress&cs=tinysrgb&h=350".to_string(),
        cover_photo_url: "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg".to_string(),
        cost_per_night,
        parking_spaces: 2,
        number_of_bathrooms: 2,
        number_of_bedrooms: 3,
        country: "Canada".to_string(),
        street: "651 Nami Road".to_string(),
        city: city.to_string(),
        province: "Ontario".to_string(),
        post_code: "83680".to_string(),
    }
}

pub async fn add_reservation(
    pool: &PgPool,
    guest_id: i32,
    property_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> i32 {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO reservations (guest_id, property_id, start_date, end_date)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await
    .expect("insert reservation");
    id
}

pub async fn add_review(pool: &PgPool, guest_id: i32, property_id: i32, rating: i16) {
    sqlx::query(
        r#"
        INSERT INTO property_reviews (guest_id, property_id, rating, message)
        VALUES ($1, $2, $3, 'messages')
        "#,
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(rating)
    .execute(pool)
    .await
    .expect("insert review");
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
