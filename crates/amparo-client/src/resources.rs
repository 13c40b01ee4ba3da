//! `Resource` implementations tying each entity to its collection.
//!
//! Creation defaults mirror what the original registry stamps per entity:
//! participants get a status and timestamp, companies get zeroed statistics,
//! staff get the starter permission set, child records get a timestamp only.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use amparo_core::catalog::TRIAL_QUESTIONS;
use amparo_core::entities::{
    Company, Employee, Evaluation, FollowUpVisit, NewCompany, NewEmployee, NewEvaluation,
    NewFollowUpVisit, NewParentInterview, NewParticipant, NewWorkPlacement, ParentInterview,
    Participant, WorkPlacement,
};
use amparo_core::enums::{ActivityStatus, Permission};
use amparo_core::validate;

use crate::resource::{ChildResource, Resource};
use crate::updates::{
    CompanyUpdate, EmployeeUpdate, EvaluationUpdate, FollowUpVisitUpdate, ParentInterviewUpdate,
    ParticipantUpdate, WorkPlacementUpdate,
};

impl Resource for Participant {
    const COLLECTION: &'static str = "usuarios";
    const LABEL: &'static str = "participant";
    type Draft = NewParticipant;
    type Update = ParticipantUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn creation_defaults(now: DateTime<Utc>) -> Vec<(&'static str, Value)> {
        vec![
            ("status", json!(ActivityStatus::Ativo)),
            ("createdAt", json!(now)),
        ]
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), String> {
        if draft.full_name.trim().is_empty() {
            return Err("full name is required".into());
        }
        Ok(())
    }
}

impl Resource for Company {
    const COLLECTION: &'static str = "empresas";
    const LABEL: &'static str = "company";
    type Draft = NewCompany;
    type Update = CompanyUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn creation_defaults(now: DateTime<Utc>) -> Vec<(&'static str, Value)> {
        vec![
            ("activeUsers", json!(0)),
            ("totalHired", json!(0)),
            ("lastContact", json!(now.date_naive())),
            ("status", json!(ActivityStatus::Ativo)),
        ]
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), String> {
        if draft.name.trim().is_empty() {
            return Err("company name is required".into());
        }
        Ok(())
    }
}

impl Resource for Employee {
    const COLLECTION: &'static str = "funcionarios";
    const LABEL: &'static str = "staff member";
    type Draft = NewEmployee;
    type Update = EmployeeUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn creation_defaults(_now: DateTime<Utc>) -> Vec<(&'static str, Value)> {
        vec![
            ("status", json!(ActivityStatus::Ativo)),
            ("permissions", json!(Permission::default_set())),
            ("lastLogin", json!("")),
            ("evaluationsCount", json!(0)),
            ("visitsCount", json!(0)),
        ]
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), String> {
        if draft.email.trim().is_empty() {
            return Err("email is required".into());
        }
        if draft.password.chars().count() < validate::STAFF_PASSWORD_MIN {
            return Err(format!(
                "password must be at least {} characters",
                validate::STAFF_PASSWORD_MIN
            ));
        }
        Ok(())
    }
}

impl Resource for Evaluation {
    const COLLECTION: &'static str = "avaliacoes";
    const LABEL: &'static str = "evaluation";
    type Draft = NewEvaluation;
    type Update = EvaluationUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn creation_defaults(now: DateTime<Utc>) -> Vec<(&'static str, Value)> {
        vec![("createdAt", json!(now))]
    }

    fn validate_draft(draft: &Self::Draft) -> Result<(), String> {
        if let Some(index) = draft
            .respostas
            .keys()
            .find(|index| usize::from(**index) >= TRIAL_QUESTIONS.len())
        {
            return Err(format!("question index {index} is out of range"));
        }
        Ok(())
    }
}

impl ChildResource for Evaluation {
    fn parent_id(&self) -> &str {
        &self.usuario_id
    }

    fn draft_parent_id(draft: &Self::Draft) -> &str {
        &draft.usuario_id
    }

    fn set_parent_name(draft: &mut Self::Draft, name: &str) {
        draft.usuario_nome = name.to_owned();
    }
}

impl Resource for ParentInterview {
    const COLLECTION: &'static str = "entrevistas-pais";
    const LABEL: &'static str = "parent interview";
    type Draft = NewParentInterview;
    type Update = ParentInterviewUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn creation_defaults(now: DateTime<Utc>) -> Vec<(&'static str, Value)> {
        vec![("createdAt", json!(now))]
    }
}

impl ChildResource for ParentInterview {
    fn parent_id(&self) -> &str {
        &self.usuario_id
    }

    fn draft_parent_id(draft: &Self::Draft) -> &str {
        &draft.usuario_id
    }

    fn set_parent_name(draft: &mut Self::Draft, name: &str) {
        draft.usuario_nome = name.to_owned();
    }
}

impl Resource for WorkPlacement {
    const COLLECTION: &'static str = "encaminhamentos";
    const LABEL: &'static str = "work placement";
    type Draft = NewWorkPlacement;
    type Update = WorkPlacementUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn creation_defaults(now: DateTime<Utc>) -> Vec<(&'static str, Value)> {
        vec![("createdAt", json!(now))]
    }
}

impl ChildResource for WorkPlacement {
    fn parent_id(&self) -> &str {
        &self.usuario_id
    }

    fn draft_parent_id(draft: &Self::Draft) -> &str {
        &draft.usuario_id
    }

    fn set_parent_name(draft: &mut Self::Draft, name: &str) {
        draft.usuario_nome = name.to_owned();
    }
}

impl Resource for FollowUpVisit {
    const COLLECTION: &'static str = "acompanhamentos";
    const LABEL: &'static str = "follow-up visit";
    type Draft = NewFollowUpVisit;
    type Update = FollowUpVisitUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn creation_defaults(now: DateTime<Utc>) -> Vec<(&'static str, Value)> {
        vec![("createdAt", json!(now))]
    }
}

impl ChildResource for FollowUpVisit {
    fn parent_id(&self) -> &str {
        &self.usuario_id
    }

    fn draft_parent_id(draft: &Self::Draft) -> &str {
        &draft.usuario_id
    }

    fn set_parent_name(draft: &mut Self::Draft, name: &str) {
        draft.usuario_nome = name.to_owned();
    }
}
