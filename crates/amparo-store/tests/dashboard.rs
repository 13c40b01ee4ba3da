//! Dashboard counter tests.

mod support;

use pretty_assertions::assert_eq;

use amparo_core::enums::{ActivityStatus, PlacementStatus};
use amparo_store::DashboardStats;

use support::{company, employee, participant, placement};

#[test]
fn counters_match_the_loaded_snapshots() {
    let participants = vec![
        participant("u1", "Maria Silva Santos"),
        participant("u2", "João Pedro Lima"),
        participant("u3", "Ana Costa Ferreira"),
    ];
    let companies = vec![company("e1", "Supermercado Central")];
    let mut staff = vec![
        employee("f1", "sandra@x.com", "right"),
        employee("f2", "carlos@x.com", "other"),
    ];
    staff[1].status = Some(ActivityStatus::Inativo);
    let placements = vec![
        placement("p1", "u1", PlacementStatus::EmExperiencia),
        placement("p2", "u2", PlacementStatus::Ativo),
        placement("p3", "u3", PlacementStatus::Desligado),
    ];

    let stats = DashboardStats::collect(&participants, &companies, &staff, &placements);

    assert_eq!(
        stats,
        DashboardStats {
            total_participants: 3,
            partner_companies: 1,
            in_trial: 1,
            placed: 3,
            active_staff: 1,
        }
    );
}

#[test]
fn staff_without_a_status_count_as_active() {
    let mut staff = vec![employee("f1", "sandra@x.com", "right")];
    staff[0].status = None;

    let stats = DashboardStats::collect(&[], &[], &staff, &[]);
    assert_eq!(stats.active_staff, 1);
}
