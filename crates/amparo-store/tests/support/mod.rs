//! Shared fixtures for the container tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use amparo_core::entities::{
    Company, Employee, HrContact, NewEvaluation, NewParticipant, NewWorkPlacement, Participant,
    WorkPlacement,
};
use amparo_core::enums::{
    ActivityStatus, Department, EvaluationKind, Permission, PlacementStatus, ResponseLevel, Sector,
    StaffRole,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn participant_draft(full_name: &str) -> NewParticipant {
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

pub fn participant(id: &str, full_name: &str) -> Participant {
    Participant {
        id: id.to_owned(),
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
        status: Some(ActivityStatus::Ativo),
        created_at: None,
    }
}

pub fn participant_json(id: &str, full_name: &str) -> Value {
    serde_json::to_value(participant(id, full_name)).expect("participant json")
}

pub fn employee(id: &str, email: &str, password: &str) -> Employee {
    Employee {
        id: id.to_owned(),
        full_name: "Sandra Lima".to_owned(),
        email: email.to_owned(),
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
        password: password.to_owned(),
        status: Some(ActivityStatus::Ativo),
        permissions: Some(vec![Permission::Users, Permission::Basic]),
        last_login: Some(String::new()),
        evaluations_count: Some(0),
        visits_count: Some(0),
    }
}

pub fn employee_json(id: &str, email: &str, password: &str) -> Value {
    serde_json::to_value(employee(id, email, password)).expect("employee json")
}

pub fn company(id: &str, name: &str) -> Company {
    Company {
        id: id.to_owned(),
        name: name.to_owned(),
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
        available_positions: vec!["Repositor".to_owned()],
        observations: String::new(),
        active_users: Some(0),
        total_hired: Some(0),
        last_contact: Some(date(2024, 1, 15)),
        status: Some(ActivityStatus::Ativo),
    }
}

pub fn placement(id: &str, usuario_id: &str, status: PlacementStatus) -> WorkPlacement {
    WorkPlacement {
        id: id.to_owned(),
        usuario_id: usuario_id.to_owned(),
        usuario_nome: "Ana Costa Ferreira".to_owned(),
        empresa: "Supermercado Central".to_owned(),
        cargo: "Repositor".to_owned(),
        data_admissao: date(2024, 3, 1),
        contato_rh: "Sandra Oliveira".to_owned(),
        telefone_rh: "(11) 3333-4445".to_owned(),
        data_provavel_desligamento: date(2024, 6, 1),
        status,
        created_at: None,
    }
}

pub fn evaluation_draft(usuario_id: &str) -> NewEvaluation {
    NewEvaluation {
        usuario_id: usuario_id.to_owned(),
        usuario_nome: String::new(),
        tipo_avaliacao: EvaluationKind::First,
        data_avaliacao: date(2024, 3, 10),
        respostas: BTreeMap::from([(0, ResponseLevel::Sim), (1, ResponseLevel::Maioria)]),
        observacoes: "Boa adaptação ao grupo".to_owned(),
        avaliador: "Carlos Mendes".to_owned(),
    }
}

pub fn placement_draft(usuario_id: &str) -> NewWorkPlacement {
    NewWorkPlacement {
        usuario_id: usuario_id.to_owned(),
        usuario_nome: String::new(),
        empresa: "Supermercado Central".to_owned(),
        cargo: "Repositor".to_owned(),
        data_admissao: date(2024, 3, 1),
        contato_rh: "Sandra Oliveira".to_owned(),
        telefone_rh: "(11) 3333-4445".to_owned(),
        data_provavel_desligamento: date(2024, 6, 1),
        status: PlacementStatus::EmExperiencia,
    }
}
