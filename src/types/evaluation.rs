use crate::workflow::{DecisionAction, EvaluationStatus, RespondentType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Create payload. Ids arrive as strings so malformed ones surface as a
/// validation error instead of a framework-level deserialize failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RCreateEvaluation {
    pub funcionario_id: String,
    pub avaliador_id: String,
    pub ciclo_id: Option<Uuid>,
    pub periodo: String,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

/// Validated create payload handed to the db layer.
#[derive(Debug, Clone)]
pub struct DBEvaluationCreate {
    pub funcionario_id: Uuid,
    pub avaliador_id: Uuid,
    pub ciclo_id: Option<Uuid>,
    pub periodo: String,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerInput {
    pub pergunta_id: i32,
    pub nota: Option<f64>,
    pub comentario: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RSubmitQuestionnaire {
    pub respondente_tipo: RespondentType,
    pub respostas: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RManagerDecision {
    pub acao: DecisionAction,
    pub comentario_avaliador: Option<String>,
    pub motivo_devolucao: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EvaluationFilters {
    pub status: Option<Vec<EvaluationStatus>>,
    pub funcionario_id: Option<Uuid>,
    pub avaliador_id: Option<Uuid>,
    pub ciclo_id: Option<Uuid>,
    pub periodo: Option<String>,
    pub criado_de: Option<DateTime<Utc>>,
    pub criado_ate: Option<DateTime<Utc>>,
}

/// Raw query-string shape for list/metrics routes; `status` is a comma list.
#[derive(Debug, Clone, Deserialize)]
pub struct QEvaluationFilters {
    pub status: Option<String>,
    pub funcionario_id: Option<Uuid>,
    pub avaliador_id: Option<Uuid>,
    pub ciclo_id: Option<Uuid>,
    pub periodo: Option<String>,
    pub criado_de: Option<DateTime<Utc>>,
    pub criado_ate: Option<DateTime<Utc>>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: 1,
            per_page: 20,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaginatedList<T: Serialize> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// Full read model for a single evaluation: the record, its answers and the
/// coarse legacy status some consumers still expect.
#[derive(Debug, Serialize)]
pub struct EvaluationDetail {
    #[serde(flatten)]
    pub avaliacao: entity::evaluation::Model,
    pub status_legado: crate::workflow::CoarseStatus,
    pub respostas: Vec<entity::answer::Model>,
}

#[derive(Debug, Serialize)]
pub struct EvaluationMetrics {
    pub total: u64,
    pub por_status: HashMap<String, u64>,
    /// approved / total, 0 when the filtered set is empty.
    pub taxa_conclusao: f64,
}

#[derive(Debug, Serialize)]
pub struct ReminderReport {
    pub lembretes_enviados: u64,
}
