//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};
use tracing::debug;

use crate::domain::{NewReservation, Reservation, ReservationRepository, StayRange};
use crate::infrastructure::database::entities::reservation;
use crate::shared::types::{DomainError, DomainResult};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    Ok(Reservation {
        id: m.id,
        client_full_name: m.client_full_name,
        room_number: m.room_number,
        stay: StayRange::new(m.stay_start, m.stay_end)?,
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn insert(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!(room = r.room_number, "Inserting reservation");

        let model = reservation::ActiveModel {
            id: NotSet,
            client_full_name: Set(r.client_full_name),
            room_number: Set(r.room_number),
            stay_start: Set(r.stay.start()),
            stay_end: Set(r.stay.end()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(inserted)
    }

    async fn update(&self, r: Reservation) -> DomainResult<Reservation> {
        debug!(id = r.id, "Updating reservation");

        let existing = reservation::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: r.id.to_string(),
            });
        }

        let model = reservation::ActiveModel {
            id: Set(r.id),
            client_full_name: Set(r.client_full_name),
            room_number: Set(r.room_number),
            stay_start: Set(r.stay.start()),
            stay_end: Set(r.stay.end()),
        };
        let updated = model.update(&self.db).await.map_err(db_err)?;
        model_to_domain(updated)
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.is_some())
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        room_number: i32,
    ) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::RoomNumber.eq(room_number))
            .filter(reservation::Column::StayEnd.gt(start))
            .filter(reservation::Column::StayStart.lt(end))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
