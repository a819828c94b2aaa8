//! SeaORM repository integration tests against in-memory SQLite.
//!
//! Verifies that the SQL overlap filter matches the domain predicate and
//! that the CRUD surface behaves per the store contract.

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm_migration::MigratorTrait;

use hotel_reservations::domain::{
    NewReservation, Reservation, ReservationRepository, StayRange,
};
use hotel_reservations::infrastructure::database::migrator::Migrator;
use hotel_reservations::{init_database, DatabaseConfig, SeaOrmReservationRepository};

async fn repository() -> Arc<dyn ReservationRepository> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
    };
    let db = init_database(&config).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");
    Arc::new(SeaOrmReservationRepository::new(db))
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2031, 7, d).unwrap()
}

fn new_reservation(room: i32, start: u32, end: u32) -> NewReservation {
    NewReservation::new(
        "Jane Roe",
        room,
        StayRange::new(date(start), date(end)).unwrap(),
    )
}

async fn overlapping(
    repo: &Arc<dyn ReservationRepository>,
    room: i32,
    start: u32,
    end: u32,
) -> Vec<Reservation> {
    repo.find_overlapping(date(start), date(end), room)
        .await
        .expect("overlap query")
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let repo = repository().await;
    let first = repo.insert(new_reservation(101, 10, 15)).await.unwrap();
    let second = repo.insert(new_reservation(102, 10, 15)).await.unwrap();
    assert!(first.id > 0);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn overlap_query_matches_domain_predicate() {
    let repo = repository().await;
    let existing = repo.insert(new_reservation(101, 10, 15)).await.unwrap();

    // contained, containing, and partial overlaps all match
    for (start, end) in [(12, 13), (5, 20), (5, 11), (14, 20), (10, 15)] {
        let hits = overlapping(&repo, 101, start, end).await;
        assert_eq!(hits.len(), 1, "expected overlap for [{start}, {end}]");
        assert_eq!(hits[0].id, existing.id);
    }

    // disjoint and back-to-back ranges do not match
    for (start, end) in [(20, 25), (15, 18), (5, 10)] {
        let hits = overlapping(&repo, 101, start, end).await;
        assert!(hits.is_empty(), "expected no overlap for [{start}, {end}]");
    }

    // same dates in another room never conflict
    assert!(overlapping(&repo, 102, 10, 15).await.is_empty());
}

#[tokio::test]
async fn overlap_query_does_not_exclude_own_row() {
    let repo = repository().await;
    let existing = repo.insert(new_reservation(101, 10, 15)).await.unwrap();

    // the row itself matches a query for its own unchanged dates
    let hits = overlapping(&repo, 101, 10, 15).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, existing.id);
}

#[tokio::test]
async fn update_replaces_all_fields_and_keeps_id() {
    let repo = repository().await;
    let created = repo.insert(new_reservation(101, 10, 15)).await.unwrap();

    let replacement = Reservation {
        id: created.id,
        client_full_name: "John Doe".to_string(),
        room_number: 202,
        stay: StayRange::new(date(20), date(25)).unwrap(),
    };
    let updated = repo.update(replacement.clone()).await.unwrap();
    assert_eq!(updated, replacement);

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored, replacement);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let repo = repository().await;
    let ghost = Reservation {
        id: 999,
        client_full_name: "Nobody".to_string(),
        room_number: 1,
        stay: StayRange::new(date(10), date(15)).unwrap(),
    };
    let err = repo.update(ghost).await.unwrap_err();
    assert!(matches!(
        err,
        hotel_reservations::shared::types::DomainError::NotFound { .. }
    ));
}

#[tokio::test]
async fn delete_then_exists_is_false() {
    let repo = repository().await;
    let created = repo.insert(new_reservation(101, 10, 15)).await.unwrap();
    assert!(repo.exists_by_id(created.id).await.unwrap());

    repo.delete_by_id(created.id).await.unwrap();
    assert!(!repo.exists_by_id(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_returns_every_row() {
    let repo = repository().await;
    assert!(repo.find_all().await.unwrap().is_empty());

    repo.insert(new_reservation(101, 10, 15)).await.unwrap();
    repo.insert(new_reservation(102, 12, 14)).await.unwrap();
    repo.insert(new_reservation(103, 1, 2)).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].client_full_name, "Jane Roe");
    assert_eq!(all[1].room_number, 102);
    assert_eq!(all[2].reservation_dates(), [date(1), date(2)]);
}
