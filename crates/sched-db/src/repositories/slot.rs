//! PostgreSQL implementation of SlotRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use sched_core::entities::{AvailabilitySlot, NewSlot};
use sched_core::error::DomainError;
use sched_core::timezone::SlotTimes;
use sched_core::traits::{RepoResult, SlotRepository};

use crate::models::AvailabilityModel;

use super::error::{map_db_error, slot_not_found};

const SLOT_COLUMNS: &str = "id, recruiter_id, date, start_time, end_time, booked";

/// PostgreSQL implementation of SlotRepository
#[derive(Clone)]
pub struct PgSlotRepository {
    pool: PgPool,
}

impl PgSlotRepository {
    /// Create a new PgSlotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PgSlotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<AvailabilitySlot>> {
        let result = sqlx::query_as::<_, AvailabilityModel>(&format!(
            "SELECT {SLOT_COLUMNS} FROM availabilities WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AvailabilitySlot::from))
    }

    #[instrument(skip(self))]
    async fn find_owned(
        &self,
        id: i64,
        recruiter_id: i64,
    ) -> RepoResult<Option<AvailabilitySlot>> {
        let result = sqlx::query_as::<_, AvailabilityModel>(&format!(
            "SELECT {SLOT_COLUMNS} FROM availabilities WHERE id = $1 AND recruiter_id = $2"
        ))
        .bind(id)
        .bind(recruiter_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AvailabilitySlot::from))
    }

    #[instrument(skip(self))]
    async fn find_by_recruiter(&self, recruiter_id: i64) -> RepoResult<Vec<AvailabilitySlot>> {
        let results = sqlx::query_as::<_, AvailabilityModel>(&format!(
            r#"
            SELECT {SLOT_COLUMNS} FROM availabilities
            WHERE recruiter_id = $1
            ORDER BY date, start_time
            "#
        ))
        .bind(recruiter_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AvailabilitySlot::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_recruiter_and_date(
        &self,
        recruiter_id: i64,
        date: NaiveDate,
    ) -> RepoResult<Vec<AvailabilitySlot>> {
        let results = sqlx::query_as::<_, AvailabilityModel>(&format!(
            r#"
            SELECT {SLOT_COLUMNS} FROM availabilities
            WHERE recruiter_id = $1 AND date = $2
            ORDER BY start_time
            "#
        ))
        .bind(recruiter_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AvailabilitySlot::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_unbooked(&self, recruiter_id: i64) -> RepoResult<Vec<AvailabilitySlot>> {
        let results = sqlx::query_as::<_, AvailabilityModel>(&format!(
            r#"
            SELECT {SLOT_COLUMNS} FROM availabilities
            WHERE recruiter_id = $1 AND booked = FALSE
            ORDER BY date, start_time
            "#
        ))
        .bind(recruiter_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AvailabilitySlot::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, slot: &NewSlot) -> RepoResult<AvailabilitySlot> {
        let result = sqlx::query_as::<_, AvailabilityModel>(&format!(
            r#"
            INSERT INTO availabilities (recruiter_id, date, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING {SLOT_COLUMNS}
            "#
        ))
        .bind(slot.recruiter_id)
        .bind(slot.date)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AvailabilitySlot::from(result))
    }

    #[instrument(skip(self, slots), fields(count = slots.len()))]
    async fn create_many(&self, slots: &[NewSlot]) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for slot in slots {
            sqlx::query(
                r#"
                INSERT INTO availabilities (recruiter_id, date, start_time, end_time)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(slot.recruiter_id)
            .bind(slot.date)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(slots.len() as u64)
    }

    #[instrument(skip(self))]
    async fn update_times(&self, id: i64, recruiter_id: i64, times: SlotTimes) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE availabilities
            SET date = $3, start_time = $4, end_time = $5
            WHERE id = $1 AND recruiter_id = $2
            "#,
        )
        .bind(id)
        .bind(recruiter_id)
        .bind(times.date)
        .bind(times.start_time)
        .bind(times.end_time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(slot_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_unbooked(&self, id: i64, recruiter_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM availabilities
            WHERE id = $1 AND recruiter_id = $2 AND booked = FALSE
            "#,
        )
        .bind(id)
        .bind(recruiter_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Distinguish "still booked" from "no such slot" for the caller.
            let exists: (bool,) = sqlx::query_as(
                "SELECT EXISTS(SELECT 1 FROM availabilities WHERE id = $1 AND recruiter_id = $2)",
            )
            .bind(id)
            .bind(recruiter_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return if exists.0 {
                Err(DomainError::SlotBooked)
            } else {
                Err(slot_not_found(id))
            };
        }

        Ok(())
    }
}
