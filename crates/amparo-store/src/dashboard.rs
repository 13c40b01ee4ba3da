//! Dashboard counters derived from loaded container snapshots.

use serde::Serialize;

use amparo_core::entities::{Company, Employee, Participant, WorkPlacement};
use amparo_core::enums::{ActivityStatus, PlacementStatus};

/// The overview numbers shown on the dashboard. Pure function over loaded
/// state; no network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_participants: usize,
    pub partner_companies: usize,
    pub in_trial: usize,
    pub placed: usize,
    pub active_staff: usize,
}

impl DashboardStats {
    /// Count over the given snapshots. Staff without a status are counted as
    /// active, matching how the store only ever stamps `Ativo`.
    #[must_use]
    pub fn collect(
        participants: &[Participant],
        companies: &[Company],
        staff: &[Employee],
        placements: &[WorkPlacement],
    ) -> Self {
        Self {
            total_participants: participants.len(),
            partner_companies: companies.len(),
            in_trial: placements
                .iter()
                .filter(|placement| placement.status == PlacementStatus::EmExperiencia)
                .count(),
            placed: placements.len(),
            active_staff: staff
                .iter()
                .filter(|member| member.status != Some(ActivityStatus::Inativo))
                .count(),
        }
    }
}
