//! Collection client tests against the in-memory stub store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

use amparo_client::stub::StubStore;
use amparo_client::updates::ParticipantUpdateBuilder;
use amparo_client::{RecordStore, TransportError};
use amparo_core::entities::{HrContact, NewCompany, NewEmployee, NewEvaluation, NewParticipant};
use amparo_core::enums::{
    ActivityStatus, Department, EvaluationKind, Permission, ResponseLevel, Sector, StaffRole,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn participant_draft(full_name: &str) -> NewParticipant {
    NewParticipant {
        full_name: full_name.to_owned(),
        birth_date: date(2001, 3, 14),
        rg: "12.345.678-9".to_owned(),
        cpf: "123.456.789-00".to_owned(),
        address: "Rua das Acácias, 100".to_owned(),
        phone: "(11) 98765-4321".to_owned(),
        parent_name: "Marta Santos".to_owned(),
        parent_phone: "(11) 91234-5678".to_owned(),
        emergency_contact: "(11) 99999-0000".to_owned(),
        admission_date: date(2024, 2, 1),
        observations: String::new(),
    }
}

fn evaluation_draft(usuario_id: &str) -> NewEvaluation {
    NewEvaluation {
        usuario_id: usuario_id.to_owned(),
        usuario_nome: "Maria Silva Santos".to_owned(),
        tipo_avaliacao: EvaluationKind::First,
        data_avaliacao: date(2024, 3, 10),
        respostas: BTreeMap::from([
            (0, ResponseLevel::Sim),
            (1, ResponseLevel::Maioria),
            (9, ResponseLevel::Raras),
        ]),
        observacoes: "Boa adaptação ao grupo".to_owned(),
        avaliador: "Carlos Mendes".to_owned(),
    }
}

#[tokio::test]
async fn create_participant_stamps_defaults() {
    let stub = StubStore::spawn().expect("stub");
    let store = RecordStore::new(stub.url());

    let created = store
        .participants()
        .create(&participant_draft("Maria Silva Santos"))
        .await
        .expect("create");

    assert!(!created.id.is_empty());
    assert_eq!(created.status, Some(ActivityStatus::Ativo));
    assert!(created.created_at.is_some());
    assert_eq!(created.full_name, "Maria Silva Santos");

    let raw = stub.records("usuarios");
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0]["status"], json!("Ativo"));
    assert_eq!(raw[0]["birthDate"], json!("2001-03-14"));
}

#[tokio::test]
async fn company_empty_positions_store_an_empty_list() {
    let stub = StubStore::spawn().expect("stub");
    let store = RecordStore::new(stub.url());

    let draft = NewCompany {
        name: "Supermercado Central".to_owned(),
        cnpj: "12.345.678/0001-90".to_owned(),
        sector: Sector::Varejo,
        address: "Av. Brasil, 500".to_owned(),
        phone: "(11) 3333-4444".to_owned(),
        email: "contato@central.com".to_owned(),
        hr_contact: HrContact {
            name: "Sandra Oliveira".to_owned(),
            phone: "(11) 3333-4445".to_owned(),
            email: "rh@central.com".to_owned(),
        },
        available_positions: Vec::new(),
        observations: String::new(),
    };
    let created = store.companies().create(&draft).await.expect("create");

    assert!(created.available_positions.is_empty());
    assert_eq!(created.active_users, Some(0));
    assert_eq!(created.total_hired, Some(0));
    assert!(created.last_contact.is_some());

    let raw = stub.records("empresas");
    assert_eq!(raw[0]["availablePositions"], json!([]));
    assert_eq!(raw[0]["hrContact"]["name"], json!("Sandra Oliveira"));
}

#[tokio::test]
async fn staff_creation_gets_starter_permissions() {
    let stub = StubStore::spawn().expect("stub");
    let store = RecordStore::new(stub.url());

    let draft = NewEmployee {
        full_name: "Sandra Lima".to_owned(),
        email: "sandra@x.com".to_owned(),
        phone: "(11) 97777-8888".to_owned(),
        cpf: "987.654.321-00".to_owned(),
        rg: "98.765.432-1".to_owned(),
        birth_date: date(1985, 7, 22),
        address: "Rua do Sol, 42".to_owned(),
        role: StaffRole::ConsultoraDeRh,
        department: Department::RecursosHumanos,
        admission_date: date(2020, 1, 15),
        salary: "R$ 4.500,00".to_owned(),
        work_schedule: "Seg-Sex 8h-17h".to_owned(),
        observations: String::new(),
        password: "segredo".to_owned(),
    };
    let created = store.staff().create(&draft).await.expect("create");

    assert_eq!(
        created.permissions,
        Some(vec![Permission::Users, Permission::Basic])
    );
    assert_eq!(created.status, Some(ActivityStatus::Ativo));
    assert_eq!(created.last_login.as_deref(), Some(""));
    assert_eq!(created.evaluations_count, Some(0));
    assert_eq!(created.visits_count, Some(0));

    let raw = stub.records("funcionarios");
    assert_eq!(raw[0]["permissions"], json!(["users", "basic"]));
    assert_eq!(raw[0]["password"], json!("segredo"));
}

#[tokio::test]
async fn list_for_parent_filters_by_equality() {
    let stub = StubStore::spawn().expect("stub");
    let store = RecordStore::new(stub.url());
    let evaluations = store.evaluations();

    evaluations
        .create(&evaluation_draft("u1"))
        .await
        .expect("create for u1");
    evaluations
        .create(&evaluation_draft("u2"))
        .await
        .expect("create for u2");

    let for_u1 = evaluations.list_for_parent("u1").await.expect("filter");
    assert_eq!(for_u1.len(), 1);
    assert_eq!(for_u1[0].usuario_id, "u1");
    assert_eq!(for_u1[0].respostas[&9], ResponseLevel::Raras);

    let all = evaluations.list_all().await.expect("list");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let stub = StubStore::spawn().expect("stub");
    let store = RecordStore::new(stub.url());
    let participants = store.participants();

    let created = participants
        .create(&participant_draft("João Pedro Lima"))
        .await
        .expect("create");

    let update = ParticipantUpdateBuilder::new()
        .observations("Prefere o turno da manhã")
        .build();
    let updated = participants
        .update(&created.id, &update)
        .await
        .expect("update");

    assert_eq!(updated.observations, "Prefere o turno da manhã");
    assert_eq!(updated.full_name, created.full_name);
    assert_eq!(updated.admission_date, created.admission_date);
    assert_eq!(updated.status, created.status);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let stub = StubStore::spawn().expect("stub");
    let store = RecordStore::new(stub.url());
    let participants = store.participants();

    let created = participants
        .create(&participant_draft("Ana Costa Ferreira"))
        .await
        .expect("create");

    participants.delete(&created.id).await.expect("delete");
    assert!(stub.records("usuarios").is_empty());

    let missing = participants.get(&created.id).await;
    assert!(matches!(missing, Err(TransportError::Status { .. })));
}

#[tokio::test]
async fn unknown_id_surfaces_as_undiscriminated_status() {
    let stub = StubStore::spawn().expect("stub");
    let store = RecordStore::new(stub.url());

    let result = store.participants().get("nope").await;
    match result {
        Err(TransportError::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}
