//! Integration tests for the room catalog repository.
//!
//! - Create, find, update, delete by room number
//! - Unique room number constraint
//! - Listing with each supported ordering
//! - Cascade delete of reservations

use assert_matches::assert_matches;
use chrono::NaiveDate;
use hotelrooms_core::reservations::DateRange;
use hotelrooms_core::rooms::RoomOrdering;
use hotelrooms_db::models::room::{CreateRoom, UpdateRoom};
use hotelrooms_db::repositories::{ReservationRepo, RoomRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_room(room_number: &str, day_price: i32) -> CreateRoom {
    CreateRoom {
        room_number: room_number.to_string(),
        description: format!("Room {room_number}"),
        day_price,
    }
}

fn numbers(rooms: &[hotelrooms_db::models::room::Room]) -> Vec<&str> {
    rooms.iter().map(|r| r.room_number.as_str()).collect()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_room(pool: PgPool) {
    let created = RoomRepo::create(
        &pool,
        &CreateRoom {
            room_number: "101".to_string(),
            description: "Luxury Suite".to_string(),
            day_price: 250,
        },
    )
    .await
    .unwrap();

    assert_eq!(created.room_number, "101");
    assert_eq!(created.description, "Luxury Suite");
    assert_eq!(created.day_price, 250);

    let found = RoomRepo::find_by_room_number(&pool, "101")
        .await
        .unwrap()
        .expect("room should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.date_create, created.date_create);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_room_returns_none(pool: PgPool) {
    let found = RoomRepo::find_by_room_number(&pool, "999").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_room_number_violates_unique(pool: PgPool) {
    RoomRepo::create(&pool, &new_room("101", 100)).await.unwrap();
    let err = RoomRepo::create(&pool, &new_room("101", 200))
        .await
        .unwrap_err();

    assert_matches!(
        &err,
        sqlx::Error::Database(db_err)
            if db_err.constraint() == Some("uq_hotel_rooms_room_number")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_price_violates_check(pool: PgPool) {
    let result = RoomRepo::create(&pool, &new_room("101", -5)).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_room_keeps_number_and_creation_date(pool: PgPool) {
    let created = RoomRepo::create(&pool, &new_room("101", 100)).await.unwrap();

    let updated = RoomRepo::update(
        &pool,
        "101",
        &UpdateRoom {
            description: "Renovated".to_string(),
            day_price: 180,
        },
    )
    .await
    .unwrap()
    .expect("room should exist");

    assert_eq!(updated.room_number, "101");
    assert_eq!(updated.description, "Renovated");
    assert_eq!(updated.day_price, 180);
    assert_eq!(updated.date_create, created.date_create);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_room_returns_none(pool: PgPool) {
    let updated = RoomRepo::update(
        &pool,
        "404",
        &UpdateRoom {
            description: String::new(),
            day_price: 1,
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_room(pool: PgPool) {
    RoomRepo::create(&pool, &new_room("101", 100)).await.unwrap();

    assert!(RoomRepo::delete(&pool, "101").await.unwrap());
    assert!(!RoomRepo::delete(&pool, "101").await.unwrap());
    assert!(RoomRepo::find_by_room_number(&pool, "101")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_room_cascades_reservations(pool: PgPool) {
    let room = RoomRepo::create(&pool, &new_room("101", 100)).await.unwrap();
    let stay = DateRange::new(
        NaiveDate::from_ymd_opt(2100, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2100, 1, 3).unwrap(),
    )
    .unwrap();
    let reservation = ReservationRepo::create(&pool, room.id, &stay).await.unwrap();

    RoomRepo::delete(&pool, "101").await.unwrap();

    let found = ReservationRepo::find_by_id(&pool, reservation.id)
        .await
        .unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

async fn seed_three_rooms(pool: &PgPool) {
    RoomRepo::create(pool, &new_room("101", 150)).await.unwrap();
    RoomRepo::create(pool, &new_room("102", 100)).await.unwrap();
    RoomRepo::create(pool, &new_room("103", 200)).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_default_order_is_insertion(pool: PgPool) {
    seed_three_rooms(&pool).await;
    let rooms = RoomRepo::list(&pool, &RoomOrdering::default()).await.unwrap();
    assert_eq!(numbers(&rooms), vec!["101", "102", "103"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sorted_by_price_asc(pool: PgPool) {
    seed_three_rooms(&pool).await;
    let ordering = RoomOrdering::from_params(Some("day_price"), Some("asc"));
    let rooms = RoomRepo::list(&pool, &ordering).await.unwrap();
    assert_eq!(numbers(&rooms), vec!["102", "101", "103"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sorted_by_price_desc(pool: PgPool) {
    seed_three_rooms(&pool).await;
    let ordering = RoomOrdering::from_params(Some("day_price"), Some("desc"));
    let rooms = RoomRepo::list(&pool, &ordering).await.unwrap();
    assert_eq!(numbers(&rooms), vec!["103", "101", "102"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sorted_by_creation_date_breaks_ties_by_id(pool: PgPool) {
    seed_three_rooms(&pool).await;
    let ordering = RoomOrdering::from_params(Some("date_create"), Some("desc"));
    let rooms = RoomRepo::list(&pool, &ordering).await.unwrap();
    // All rooms were created today, so the id tie-breaker decides.
    assert_eq!(numbers(&rooms), vec!["101", "102", "103"]);
}
