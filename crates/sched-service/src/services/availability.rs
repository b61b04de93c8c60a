//! Availability service
//!
//! Handles slot creation (single, weekly recurring, daily sliced),
//! updates, deletion, and the recruiter/candidate slot listings.

use chrono::{Duration, NaiveDateTime};
use tracing::{info, instrument, warn};
use validator::Validate;

use sched_core::entities::{intervals_overlap, NewSlot};
use sched_core::timezone::{parse_zone, to_local, to_utc};
use sched_core::DomainError;

use crate::dto::{
    parse_date, parse_time, CreateDailySlicedRequest, CreateRecurringRequest, CreateSlotRequest,
    PublicSlotResponse, SlotResponse, UpdateSlotRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Availability service
pub struct AvailabilityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvailabilityService<'a> {
    /// Create a new AvailabilityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a single slot from recruiter-local wall-clock times.
    ///
    /// No overlap check is performed here; ad-hoc slots may collide with
    /// existing ones. Only the daily slicing path deduplicates.
    #[instrument(skip(self, request))]
    pub async fn create_slot(
        &self,
        recruiter_id: i64,
        request: CreateSlotRequest,
    ) -> ServiceResult<SlotResponse> {
        request.validate()?;

        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(recruiter_id))?;

        let tz = parse_zone(recruiter.timezone_name())?;
        let date = parse_date(&request.date)?;
        let start_time = parse_time(&request.start_time)?;
        let end_time = parse_time(&request.end_time)?;

        let times = to_utc(date, start_time, end_time, tz)?;
        let slot = self
            .ctx
            .slot_repo()
            .create(&NewSlot {
                recruiter_id,
                date: times.date,
                start_time: times.start_time,
                end_time: times.end_time,
            })
            .await?;

        info!(recruiter_id, slot_id = slot.id, "Availability slot created");

        let local = to_local(slot.date, slot.start_time, slot.end_time, tz)?;
        Ok(SlotResponse::new(&slot, local))
    }

    /// Create one slot per week from `start_date` through `end_date`.
    ///
    /// Each occurrence is normalized on its own date, so slots keep the
    /// same wall-clock time across DST transitions. Returns the number of
    /// slots created (zero when `start_date > end_date`).
    #[instrument(skip(self, request))]
    pub async fn create_recurring_weekly(
        &self,
        recruiter_id: i64,
        request: CreateRecurringRequest,
    ) -> ServiceResult<u64> {
        request.validate()?;

        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(recruiter_id))?;

        let tz = parse_zone(recruiter.timezone_name())?;
        let start_date = parse_date(&request.start_date)?;
        let end_date = parse_date(&request.end_date)?;
        let start_time = parse_time(&request.start_time)?;
        let end_time = parse_time(&request.end_time)?;

        let mut slots = Vec::new();
        let mut current_date = start_date;
        while current_date <= end_date {
            let times = to_utc(current_date, start_time, end_time, tz)?;
            slots.push(NewSlot {
                recruiter_id,
                date: times.date,
                start_time: times.start_time,
                end_time: times.end_time,
            });
            current_date += Duration::days(7);
        }

        let created = self.ctx.slot_repo().create_many(&slots).await?;
        info!(recruiter_id, created, "Recurring availability created");
        Ok(created)
    }

    /// Slice a local time window into consecutive fixed-duration slots.
    ///
    /// Candidates start at `start_time` and advance by `duration_minutes`;
    /// a candidate is dropped when its end would pass the window or when
    /// it overlaps any slot already on record for that recruiter and date.
    /// Accepted candidates join the comparison set immediately, so earlier
    /// candidates can crowd out later ones. Stored times are compared
    /// as-is against the local candidates. Returns the count created.
    #[instrument(skip(self, request))]
    pub async fn create_daily_sliced(
        &self,
        recruiter_id: i64,
        request: CreateDailySlicedRequest,
    ) -> ServiceResult<u64> {
        request.validate()?;

        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(recruiter_id))?;

        let tz = parse_zone(recruiter.timezone_name())?;
        let date = parse_date(&request.date)?;
        let window_start = parse_time(&request.start_time)?;
        let window_end = parse_time(&request.end_time)?;
        let duration = Duration::minutes(request.duration_minutes);

        let existing = self
            .ctx
            .slot_repo()
            .find_by_recruiter_and_date(recruiter_id, date)
            .await?;
        let mut occupied: Vec<_> = existing
            .iter()
            .map(|slot| (slot.start_time, slot.end_time))
            .collect();

        let window_end_dt: NaiveDateTime = date.and_time(window_end);
        let mut current_start: NaiveDateTime = date.and_time(window_start);
        let mut slots = Vec::new();

        while current_start + duration <= window_end_dt {
            let current_end = current_start + duration;
            let candidate = (current_start.time(), current_end.time());

            let collides = occupied
                .iter()
                .any(|&(start, end)| intervals_overlap(candidate.0, candidate.1, start, end));

            if !collides {
                let times = to_utc(date, candidate.0, candidate.1, tz)?;
                slots.push(NewSlot {
                    recruiter_id,
                    date: times.date,
                    start_time: times.start_time,
                    end_time: times.end_time,
                });
                // Subsequent candidates compare against the stored form.
                occupied.push((times.start_time, times.end_time));
            }

            current_start = current_end;
        }

        let created = self.ctx.slot_repo().create_many(&slots).await?;
        info!(recruiter_id, created, "Daily availability sliced");
        Ok(created)
    }

    /// Overwrite a slot's times, booked or not.
    ///
    /// When the slot is booked the candidate is notified of the new
    /// schedule after the update commits; a delivery failure is logged
    /// and never rolls the update back.
    #[instrument(skip(self, request))]
    pub async fn update_slot(
        &self,
        recruiter_id: i64,
        slot_id: i64,
        request: UpdateSlotRequest,
    ) -> ServiceResult<()> {
        request.validate()?;

        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(recruiter_id))?;

        let slot = self
            .ctx
            .slot_repo()
            .find_owned(slot_id, recruiter_id)
            .await?
            .ok_or(DomainError::SlotNotFound(slot_id))?;

        let tz = parse_zone(recruiter.timezone_name())?;
        let date = parse_date(&request.date)?;
        let start_time = parse_time(&request.start_time)?;
        let end_time = parse_time(&request.end_time)?;

        let times = to_utc(date, start_time, end_time, tz)?;
        self.ctx
            .slot_repo()
            .update_times(slot_id, recruiter_id, times)
            .await?;

        info!(recruiter_id, slot_id, "Availability slot updated");

        if slot.booked {
            if let Some(booking) = self.ctx.booking_repo().find_by_availability(slot_id).await? {
                let body = format!(
                    "Hello {},\n\n\
                     Your interview meeting time has been updated. The new schedule is:\n\n\
                     Date: {}\nStart Time: {}\nEnd Time: {}\n\n\
                     Please update your calendar accordingly.\n\n\
                     Best regards,\nYour Recruitment Team",
                    booking.candidate_name, times.date, times.start_time, times.end_time
                );
                if let Err(e) = self
                    .ctx
                    .notifier()
                    .send(&booking.candidate_email, "Meeting Time Updated", &body)
                    .await
                {
                    warn!(booking_id = booking.id, error = %e, "Failed to send reschedule notification");
                }
            }
        }

        Ok(())
    }

    /// Delete an unbooked slot. Fails with `SlotBooked` while claimed.
    #[instrument(skip(self))]
    pub async fn delete_slot(&self, recruiter_id: i64, slot_id: i64) -> ServiceResult<()> {
        self.ctx
            .slot_repo()
            .delete_unbooked(slot_id, recruiter_id)
            .await?;
        info!(recruiter_id, slot_id, "Availability slot deleted");
        Ok(())
    }

    /// All of a recruiter's slots in their local zone, with candidate
    /// details attached to booked ones.
    #[instrument(skip(self))]
    pub async fn list_for_recruiter(&self, recruiter_id: i64) -> ServiceResult<Vec<SlotResponse>> {
        let recruiter = self
            .ctx
            .recruiter_repo()
            .find_by_id(recruiter_id)
            .await?
            .ok_or(DomainError::RecruiterNotFound(recruiter_id))?;

        let tz = parse_zone(recruiter.timezone_name())?;
        let slots = self.ctx.slot_repo().find_by_recruiter(recruiter_id).await?;

        let mut responses = Vec::with_capacity(slots.len());
        for slot in slots {
            let local = to_local(slot.date, slot.start_time, slot.end_time, tz)?;
            let mut response = SlotResponse::new(&slot, local);
            if slot.booked {
                if let Some(booking) = self.ctx.booking_repo().find_by_availability(slot.id).await?
                {
                    response = response.with_booking(&booking);
                }
            }
            responses.push(response);
        }

        Ok(responses)
    }

    /// Unbooked slots for the candidate-facing view.
    ///
    /// Times are reported exactly as stored (UTC); candidates do not get
    /// a zone conversion.
    #[instrument(skip(self))]
    pub async fn list_public(&self, recruiter_id: i64) -> ServiceResult<Vec<PublicSlotResponse>> {
        let slots = self.ctx.slot_repo().find_unbooked(recruiter_id).await?;
        Ok(slots.into_iter().map(PublicSlotResponse::from).collect())
    }
}
