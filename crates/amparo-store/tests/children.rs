//! Denormalization and reference checks for the child containers.

mod support;

use pretty_assertions::assert_eq;

use amparo_client::RecordStore;
use amparo_client::stub::StubStore;
use amparo_store::ChildStore;

use support::{evaluation_draft, participant, placement_draft};

#[tokio::test]
async fn create_denormalizes_the_participant_name() {
    let stub = StubStore::spawn().expect("stub");
    let store_client = RecordStore::new(stub.url());
    let mut evaluations = ChildStore::new(store_client.evaluations());
    let participants = vec![participant("u1", "Maria Silva Santos")];

    let created = evaluations
        .create(&participants, evaluation_draft("u1"))
        .await
        .expect("created");

    assert_eq!(created.usuario_nome, "Maria Silva Santos");
    assert_eq!(evaluations.items().len(), 1);

    let raw = stub.records("avaliacoes");
    assert_eq!(raw[0]["usuarioNome"], "Maria Silva Santos");
}

#[tokio::test]
async fn create_with_unknown_reference_fails_locally() {
    let stub = StubStore::spawn().expect("stub");
    let store_client = RecordStore::new(stub.url());
    let mut placements = ChildStore::new(store_client.placements());
    let participants = vec![participant("u1", "Maria Silva Santos")];

    let created = placements
        .create(&participants, placement_draft("u9"))
        .await;

    assert!(created.is_none());
    assert!(placements.items().is_empty());
    assert!(!placements.is_loading());
    let message = placements.error().expect("error recorded");
    assert!(message.contains("participant u9 is not loaded"), "{message}");
    assert_eq!(stub.hits(), 0, "no network call may be issued");
}

#[tokio::test]
async fn fetch_for_participant_filters_by_reference() {
    let stub = StubStore::spawn().expect("stub");
    let store_client = RecordStore::new(stub.url());
    let mut evaluations = ChildStore::new(store_client.evaluations());
    let participants = vec![
        participant("u1", "Maria Silva Santos"),
        participant("u2", "João Pedro Lima"),
    ];

    evaluations
        .create(&participants, evaluation_draft("u1"))
        .await
        .expect("create u1");
    evaluations
        .create(&participants, evaluation_draft("u2"))
        .await
        .expect("create u2");

    evaluations.fetch_for_participant("u2").await;

    assert_eq!(evaluations.items().len(), 1);
    assert_eq!(evaluations.items()[0].usuario_id, "u2");
    assert_eq!(evaluations.items()[0].usuario_nome, "João Pedro Lima");
}
