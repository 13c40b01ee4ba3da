//! Entity structs for all Amparo collection records.
//!
//! Each entity maps to one remote collection. Persisted records carry the
//! store-assigned `id`; the `New*` draft types are the pre-persist shape with
//! no id field. Field names serialize to the collection's document keys
//! (camelCase, Portuguese terms where the collections use them). All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! payload schema generation.

mod company;
mod employee;
mod evaluation;
mod follow_up;
mod parent_interview;
mod participant;
mod work_placement;

pub use company::{Company, HrContact, NewCompany};
pub use employee::{Employee, NewEmployee};
pub use evaluation::{Evaluation, NewEvaluation};
pub use follow_up::{FollowUpVisit, NewFollowUpVisit};
pub use parent_interview::{NewParentInterview, ParentInterview};
pub use participant::{NewParticipant, Participant};
pub use work_placement::{NewWorkPlacement, WorkPlacement};
