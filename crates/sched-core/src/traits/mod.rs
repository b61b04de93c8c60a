//! Ports - repository and collaborator traits

pub mod collaborators;
pub mod repositories;

pub use collaborators::{
    Clock, MeetingProvisioner, Notifier, NotifyError, ProvisionOutcome, SystemClock,
};
pub use repositories::{
    BookingRepository, InvitationRepository, RecruiterRepository, RepoResult, SlotRepository,
};
