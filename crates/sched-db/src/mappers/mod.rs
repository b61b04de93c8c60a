//! Entity to model mappers
//!
//! Conversions between domain entities (sched-core) and database models.
//! Insertion data arrives as the core `New*` structs, so only the
//! row-to-entity direction lives here.

mod booking;
mod invitation;
mod recruiter;
mod slot;
