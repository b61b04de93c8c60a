//! PostgreSQL implementation of BookingRepository
//!
//! The claim/release transitions span the availabilities, bookings, and
//! invitations tables. Each transition is a single transaction whose
//! mutating statements are guarded UPDATEs; a zero row count means another
//! caller won the race, and the transaction rolls back untouched.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use sched_core::entities::{Booking, NewBooking, MAX_CANCELLATIONS};
use sched_core::error::DomainError;
use sched_core::traits::{BookingRepository, RepoResult};

use crate::models::BookingModel;

use super::error::{booking_not_found, map_db_error};

const BOOKING_COLUMNS: &str = "id, candidate_name, candidate_email, candidate_position, \
     availability_id, recruiter_id, invitation_token, date, start_time, end_time, \
     meeting_link, reminder_sent_at";

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete a booking inside `tx` and flip its slot back to unbooked.
    async fn delete_and_release(
        tx: &mut Transaction<'_, Postgres>,
        booking_id: i64,
    ) -> RepoResult<()> {
        let released: Option<(i64,)> =
            sqlx::query_as("DELETE FROM bookings WHERE id = $1 RETURNING availability_id")
                .bind(booking_id)
                .fetch_optional(&mut **tx)
                .await
                .map_err(map_db_error)?;

        let Some((availability_id,)) = released else {
            return Err(booking_not_found(booking_id));
        };

        sqlx::query("UPDATE availabilities SET booked = FALSE WHERE id = $1")
            .bind(availability_id)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Booking::from))
    }

    #[instrument(skip(self))]
    async fn find_owned(&self, id: i64, recruiter_id: i64) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 AND recruiter_id = $2"
        ))
        .bind(id)
        .bind(recruiter_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Booking::from))
    }

    #[instrument(skip(self))]
    async fn find_by_availability(&self, availability_id: i64) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE availability_id = $1"
        ))
        .bind(availability_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Booking::from))
    }

    #[instrument(skip(self, invitation_token))]
    async fn find_by_token(&self, invitation_token: &str) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE invitation_token = $1"
        ))
        .bind(invitation_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Booking::from))
    }

    #[instrument(skip(self))]
    async fn count_for_recruiter(&self, recruiter_id: i64) -> RepoResult<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE recruiter_id = $1")
                .bind(recruiter_id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self))]
    async fn count_upcoming(&self, recruiter_id: i64, on_or_after: NaiveDate) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bookings WHERE recruiter_id = $1 AND date >= $2",
        )
        .bind(recruiter_id)
        .bind(on_or_after)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self))]
    async fn find_due_reminders(
        &self,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> RepoResult<Vec<Booking>> {
        let results = sqlx::query_as::<_, BookingModel>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS} FROM bookings
            WHERE reminder_sent_at IS NULL
              AND (date + start_time) BETWEEN $1 AND $2
            ORDER BY date, start_time
            "#
        ))
        .bind(window_start)
        .bind(window_end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Booking::from).collect())
    }

    #[instrument(skip(self))]
    async fn mark_reminder_sent(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query("UPDATE bookings SET reminder_sent_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, booking), fields(availability_id = booking.availability_id))]
    async fn create_with_claim(&self, booking: &NewBooking) -> RepoResult<Booking> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Claim the slot; losing the race leaves zero rows updated.
        let claimed = sqlx::query(
            "UPDATE availabilities SET booked = TRUE WHERE id = $1 AND booked = FALSE",
        )
        .bind(booking.availability_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if claimed.rows_affected() == 0 {
            return Err(DomainError::SlotUnavailable);
        }

        let stored = sqlx::query_as::<_, BookingModel>(&format!(
            r#"
            INSERT INTO bookings (candidate_name, candidate_email, candidate_position,
                                  availability_id, recruiter_id, invitation_token,
                                  date, start_time, end_time, meeting_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(&booking.candidate_name)
        .bind(&booking.candidate_email)
        .bind(&booking.candidate_position)
        .bind(booking.availability_id)
        .bind(booking.recruiter_id)
        .bind(&booking.invitation_token)
        .bind(booking.date)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(&booking.meeting_link)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Consume the token under the same guard discipline as the slot.
        let consumed = sqlx::query(
            "UPDATE invitations SET used = TRUE WHERE token = $1 AND used = FALSE",
        )
        .bind(&booking.invitation_token)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if consumed.rows_affected() == 0 {
            return Err(DomainError::TokenAlreadyUsed);
        }

        tx.commit().await.map_err(|e| {
            tracing::error!(error = %e, "booking transaction failed to commit");
            DomainError::BookingFailed
        })?;

        Ok(Booking::from(stored))
    }

    #[instrument(skip(self))]
    async fn delete_with_release(&self, booking_id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        Self::delete_and_release(&mut tx, booking_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, invitation_token))]
    async fn delete_with_cancellation(
        &self,
        booking_id: i64,
        invitation_token: &str,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Spend one cancellation and re-arm the token; at the cap nothing
        // mutates and the booking stays in place.
        let incremented = sqlx::query(
            r#"
            UPDATE invitations
            SET cancel_count = cancel_count + 1, used = FALSE
            WHERE token = $1 AND cancel_count < $2
            "#,
        )
        .bind(invitation_token)
        .bind(MAX_CANCELLATIONS)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if incremented.rows_affected() == 0 {
            return Err(DomainError::CancellationLimitReached);
        }

        Self::delete_and_release(&mut tx, booking_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
