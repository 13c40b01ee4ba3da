//! Partial-update payload types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are serialized into the PATCH body, giving partial-merge semantics
//! at the store.

pub mod company;
pub mod employee;
pub mod evaluation;
pub mod follow_up;
pub mod parent_interview;
pub mod participant;
pub mod work_placement;

pub use company::{CompanyUpdate, CompanyUpdateBuilder};
pub use employee::{EmployeeUpdate, EmployeeUpdateBuilder};
pub use evaluation::{EvaluationUpdate, EvaluationUpdateBuilder};
pub use follow_up::{FollowUpVisitUpdate, FollowUpVisitUpdateBuilder};
pub use parent_interview::{ParentInterviewUpdate, ParentInterviewUpdateBuilder};
pub use participant::{ParticipantUpdate, ParticipantUpdateBuilder};
pub use work_placement::{WorkPlacementUpdate, WorkPlacementUpdateBuilder};
