//! Fixed value sets for Amparo collection records.
//!
//! Every enum serializes to the exact label string stored in the collection
//! documents (Portuguese display labels for statuses and org structure,
//! lowercase tokens for evaluation responses and permissions). `as_str()`
//! returns the stored string; `Display` matches it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ActivityStatus
// ---------------------------------------------------------------------------

/// Record status shared by participants, companies, and staff.
///
/// The store stamps `Ativo` at creation; `Inativo` only ever appears through
/// an explicit update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ActivityStatus {
    Ativo,
    Inativo,
}

impl ActivityStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ativo => "Ativo",
            Self::Inativo => "Inativo",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

/// Business sector of a partner company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Sector {
    Varejo,
    #[serde(rename = "Alimentação")]
    Alimentacao,
    Moda,
    #[serde(rename = "Serviços")]
    Servicos,
    #[serde(rename = "Indústria")]
    Industria,
    #[serde(rename = "Saúde")]
    Saude,
    #[serde(rename = "Educação")]
    Educacao,
}

impl Sector {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Varejo => "Varejo",
            Self::Alimentacao => "Alimentação",
            Self::Moda => "Moda",
            Self::Servicos => "Serviços",
            Self::Industria => "Indústria",
            Self::Saude => "Saúde",
            Self::Educacao => "Educação",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Internal staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StaffRole {
    #[serde(rename = "Coordenador Geral")]
    CoordenadorGeral,
    #[serde(rename = "Professor Avaliador")]
    ProfessorAvaliador,
    #[serde(rename = "Consultora de RH")]
    ConsultoraDeRh,
    #[serde(rename = "Assistente Administrativo")]
    AssistenteAdministrativo,
    #[serde(rename = "Psicólogo")]
    Psicologo,
    #[serde(rename = "Assistente Social")]
    AssistenteSocial,
}

impl StaffRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoordenadorGeral => "Coordenador Geral",
            Self::ProfessorAvaliador => "Professor Avaliador",
            Self::ConsultoraDeRh => "Consultora de RH",
            Self::AssistenteAdministrativo => "Assistente Administrativo",
            Self::Psicologo => "Psicólogo",
            Self::AssistenteSocial => "Assistente Social",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// Internal staff department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Department {
    #[serde(rename = "Coordenação")]
    Coordenacao,
    #[serde(rename = "Avaliação")]
    Avaliacao,
    #[serde(rename = "Recursos Humanos")]
    RecursosHumanos,
    Administrativo,
    Psicologia,
    #[serde(rename = "Serviço Social")]
    ServicoSocial,
}

impl Department {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coordenacao => "Coordenação",
            Self::Avaliacao => "Avaliação",
            Self::RecursosHumanos => "Recursos Humanos",
            Self::Administrativo => "Administrativo",
            Self::Psicologia => "Psicologia",
            Self::ServicoSocial => "Serviço Social",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Permission
// ---------------------------------------------------------------------------

/// Access permission granted to a staff member.
///
/// New staff records are stamped with `[users, basic]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Admin,
    Users,
    Companies,
    Evaluations,
    Interviews,
    Placements,
    Followup,
    Reports,
    Basic,
}

impl Permission {
    /// All permissions, in the order the staff form presents them.
    pub const ALL: [Self; 9] = [
        Self::Admin,
        Self::Users,
        Self::Companies,
        Self::Evaluations,
        Self::Interviews,
        Self::Placements,
        Self::Followup,
        Self::Reports,
        Self::Basic,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Users => "users",
            Self::Companies => "companies",
            Self::Evaluations => "evaluations",
            Self::Interviews => "interviews",
            Self::Placements => "placements",
            Self::Followup => "followup",
            Self::Reports => "reports",
            Self::Basic => "basic",
        }
    }

    /// Display label shown on the staff form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Users => "Gestão de Usuários",
            Self::Companies => "Gestão de Empresas",
            Self::Evaluations => "Avaliações",
            Self::Interviews => "Entrevistas",
            Self::Placements => "Encaminhamentos",
            Self::Followup => "Acompanhamento",
            Self::Reports => "Relatórios",
            Self::Basic => "Acesso Básico",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Admin => "Acesso total ao sistema",
            Self::Users => "Cadastrar e gerenciar usuários",
            Self::Companies => "Cadastrar e gerenciar empresas",
            Self::Evaluations => "Realizar avaliações de experiência",
            Self::Interviews => "Conduzir entrevistas com pais",
            Self::Placements => "Gerenciar encaminhamentos",
            Self::Followup => "Realizar visitas de acompanhamento",
            Self::Reports => "Gerar e visualizar relatórios",
            Self::Basic => "Visualização limitada",
        }
    }

    /// Permissions stamped onto a newly created staff record.
    #[must_use]
    pub fn default_set() -> Vec<Self> {
        vec![Self::Users, Self::Basic]
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EvaluationKind
// ---------------------------------------------------------------------------

/// Which of the two trial-period evaluations a record captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationKind {
    First,
    Second,
}

impl EvaluationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for EvaluationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResponseLevel
// ---------------------------------------------------------------------------

/// Answer to one trial-evaluation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLevel {
    /// "Sim"
    Sim,
    /// "Maioria das vezes"
    Maioria,
    /// "Raras vezes"
    Raras,
    /// "Não"
    Nao,
}

impl ResponseLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sim => "sim",
            Self::Maioria => "maioria",
            Self::Raras => "raras",
            Self::Nao => "nao",
        }
    }
}

impl fmt::Display for ResponseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ParticipationLevel
// ---------------------------------------------------------------------------

/// Family participation level recorded at a parent interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ParticipationLevel {
    Alto,
    #[serde(rename = "Médio")]
    Medio,
    Baixo,
}

impl ParticipationLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alto => "Alto",
            Self::Medio => "Médio",
            Self::Baixo => "Baixo",
        }
    }
}

impl fmt::Display for ParticipationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AutonomyLevel
// ---------------------------------------------------------------------------

/// How strongly the family encourages the participant's autonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AutonomyLevel {
    #[serde(rename = "Muito Bom")]
    MuitoBom,
    Bom,
    Regular,
    Insuficiente,
}

impl AutonomyLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MuitoBom => "Muito Bom",
            Self::Bom => "Bom",
            Self::Regular => "Regular",
            Self::Insuficiente => "Insuficiente",
        }
    }
}

impl fmt::Display for AutonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PerformanceLevel
// ---------------------------------------------------------------------------

/// Workplace performance rating used on follow-up visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PerformanceLevel {
    Excelente,
    #[serde(rename = "Muito Bom")]
    MuitoBom,
    Bom,
    Regular,
    Insuficiente,
}

impl PerformanceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excelente => "Excelente",
            Self::MuitoBom => "Muito Bom",
            Self::Bom => "Bom",
            Self::Regular => "Regular",
            Self::Insuficiente => "Insuficiente",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlacementStatus
// ---------------------------------------------------------------------------

/// Status of a work placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PlacementStatus {
    #[serde(rename = "Em Experiência")]
    EmExperiencia,
    Ativo,
    Desligado,
}

impl PlacementStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmExperiencia => "Em Experiência",
            Self::Ativo => "Ativo",
            Self::Desligado => "Desligado",
        }
    }
}

impl fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accented_labels_round_trip() {
        let json = serde_json::to_string(&Sector::Industria).unwrap();
        assert_eq!(json, "\"Indústria\"");
        let back: Sector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sector::Industria);

        let json = serde_json::to_string(&PlacementStatus::EmExperiencia).unwrap();
        assert_eq!(json, "\"Em Experiência\"");
    }

    #[test]
    fn response_levels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ResponseLevel::Nao).unwrap(),
            "\"nao\""
        );
        assert_eq!(
            serde_json::from_str::<ResponseLevel>("\"maioria\"").unwrap(),
            ResponseLevel::Maioria
        );
    }

    #[test]
    fn display_matches_stored_string() {
        assert_eq!(StaffRole::ConsultoraDeRh.to_string(), "Consultora de RH");
        assert_eq!(Department::ServicoSocial.to_string(), "Serviço Social");
        assert_eq!(Permission::Followup.to_string(), "followup");
    }

    #[test]
    fn default_permission_set_is_users_basic() {
        assert_eq!(
            Permission::default_set(),
            vec![Permission::Users, Permission::Basic]
        );
    }
}
