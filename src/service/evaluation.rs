use crate::db::postgres_service::PostgresService;
use crate::notify::{self, NotifyEvent};
use crate::scoring::{self, ScoreInput};
use crate::types::error::AppError;
use crate::types::evaluation::{
    DBEvaluationCreate, EvaluationDetail, EvaluationFilters, EvaluationMetrics, PaginatedList,
    Pagination, QEvaluationFilters, RCreateEvaluation, RManagerDecision, RSubmitQuestionnaire,
    ReminderReport,
};
use crate::workflow::{
    next_status_for_decision, next_status_for_submit, DecisionAction, EvaluationStatus,
    RespondentType,
};
use entity::evaluation::Model as EvaluationModel;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// State changes must not be undone by a failing side channel; a dispatch
/// error is logged and the operation still counts.
async fn dispatch_logged(db: &PostgresService, event: NotifyEvent, evaluation: &EvaluationModel) {
    if let Err(e) = notify::dispatch(db, event, evaluation).await {
        warn!("notification dispatch for {} failed: {e}", evaluation.id);
    }
}

fn parse_uuid(value: &str, field: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::Validation(format!("{field} is not a valid UUID")))
}

fn parse_status(raw: &str) -> Result<EvaluationStatus, AppError> {
    raw.parse()
        .map_err(|_| AppError::Precondition(format!("evaluation has unknown status {raw:?}")))
}

/// Translate the raw query-string shape into typed filters and pagination.
/// Unknown status tokens are a caller mistake, not something to skip silently.
pub fn parse_filters(
    query: &QEvaluationFilters,
) -> Result<(EvaluationFilters, Pagination), AppError> {
    let status = match &query.status {
        Some(csv) => {
            let mut parsed = Vec::new();
            for token in csv.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                parsed.push(token.parse::<EvaluationStatus>().map_err(|_| {
                    AppError::Validation(format!("unknown status filter {token:?}"))
                })?);
            }
            if parsed.is_empty() {
                None
            } else {
                Some(parsed)
            }
        }
        None => None,
    };

    let defaults = Pagination::default();
    Ok((
        EvaluationFilters {
            status,
            funcionario_id: query.funcionario_id,
            avaliador_id: query.avaliador_id,
            ciclo_id: query.ciclo_id,
            periodo: query.periodo.clone(),
            criado_de: query.criado_de,
            criado_ate: query.criado_ate,
        },
        Pagination {
            page: query.page.unwrap_or(defaults.page).max(1),
            per_page: query.per_page.unwrap_or(defaults.per_page).clamp(1, 100),
        },
    ))
}

pub async fn create_evaluation(
    db: &PostgresService,
    payload: RCreateEvaluation,
) -> Result<EvaluationModel, AppError> {
    let funcionario_id = parse_uuid(&payload.funcionario_id, "funcionario_id")?;
    let avaliador_id = parse_uuid(&payload.avaliador_id, "avaliador_id")?;

    if payload.periodo.trim().is_empty() {
        return Err(AppError::Validation("periodo must not be empty".into()));
    }
    if !db.is_authorized_evaluator(avaliador_id).await? {
        return Err(AppError::Validation(
            "avaliador_id must reference an active manager or admin".into(),
        ));
    }
    // Ensures the FK and the notification recipient both exist.
    db.get_user(funcionario_id).await?;

    let evaluation = db
        .create_evaluation(DBEvaluationCreate {
            funcionario_id,
            avaliador_id,
            ciclo_id: payload.ciclo_id,
            periodo: payload.periodo,
            data_inicio: payload.data_inicio,
            data_fim: payload.data_fim,
        })
        .await?;

    dispatch_logged(db, NotifyEvent::Created, &evaluation).await;
    info!("evaluation {} created for period {}", evaluation.id, evaluation.periodo);
    Ok(evaluation)
}

/// Store a questionnaire, recompute the scores and advance the status.
/// The status write is conditional on the state observed here, so two
/// concurrent submissions cannot both go through.
pub async fn submit_questionnaire(
    db: &PostgresService,
    id: Uuid,
    payload: RSubmitQuestionnaire,
) -> Result<EvaluationModel, AppError> {
    if payload.respostas.is_empty() {
        return Err(AppError::Validation("respostas must not be empty".into()));
    }

    let evaluation = db.get_active_evaluation(id).await?;
    let current = parse_status(&evaluation.status)?;
    let respondent = payload.respondente_tipo;

    let next = next_status_for_submit(respondent, current).ok_or_else(|| {
        AppError::Precondition(format!(
            "{} cannot submit while the evaluation is {current}",
            respondent.as_str()
        ))
    })?;

    db.upsert_answers(id, respondent, &payload.respostas).await?;
    db.store_respondent_payload(id, respondent, json!({ "respostas": payload.respostas }))
        .await?;

    let answers = db.answers_for_evaluation(id).await?;
    let inputs: Vec<ScoreInput> = answers
        .iter()
        .filter_map(|a| {
            a.nota.map(|value| ScoreInput {
                value,
                weight: None,
                criterion_id: Some(a.pergunta_id.to_string()),
            })
        })
        .collect();
    let settings = db.resolve_settings(Some(&evaluation.periodo)).await?;
    db.store_scores(
        id,
        scoring::total(&inputs),
        scoring::aggregate(&inputs, settings.as_ref()),
    )
    .await?;

    db.update_status_checked(id, current, next).await?;

    let refreshed = db.get_evaluation(id).await?;
    let event = if next == EvaluationStatus::Approved {
        NotifyEvent::Approved
    } else if current == EvaluationStatus::UnderReview {
        NotifyEvent::Resubmitted
    } else {
        NotifyEvent::Submitted
    };
    dispatch_logged(db, event, &refreshed).await;

    Ok(refreshed)
}

pub async fn manager_decision(
    db: &PostgresService,
    id: Uuid,
    payload: RManagerDecision,
) -> Result<EvaluationModel, AppError> {
    let reason = payload
        .motivo_devolucao
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    if payload.acao == DecisionAction::Return && reason.is_none() {
        return Err(AppError::Validation(
            "motivo_devolucao is required when returning an evaluation".into(),
        ));
    }

    let evaluation = db.get_active_evaluation(id).await?;
    let current = parse_status(&evaluation.status)?;
    let next = next_status_for_decision(payload.acao, current).ok_or_else(|| {
        AppError::Precondition(format!(
            "decision {:?} is not allowed while the evaluation is {current}",
            payload.acao
        ))
    })?;

    if let Some(comment) = payload
        .comentario_avaliador
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        db.upsert_manager_comment(id, comment).await?;
    }

    db.update_status_checked(id, current, next).await?;

    let refreshed = db.get_evaluation(id).await?;
    let event = match payload.acao {
        DecisionAction::Approve => NotifyEvent::Approved,
        DecisionAction::Reject => NotifyEvent::Rejected,
        DecisionAction::Return => NotifyEvent::Returned {
            reason: reason.unwrap_or_default().to_string(),
        },
    };
    dispatch_logged(db, event, &refreshed).await;

    Ok(refreshed)
}

pub async fn trash_evaluation(
    db: &PostgresService,
    id: Uuid,
) -> Result<EvaluationModel, AppError> {
    let trashed = db.soft_delete_evaluation(id).await?;
    dispatch_logged(db, NotifyEvent::Trashed, &trashed).await;
    Ok(trashed)
}

pub async fn restore_evaluation(
    db: &PostgresService,
    id: Uuid,
) -> Result<EvaluationModel, AppError> {
    let restored = db.restore_evaluation(id).await?;
    info!("evaluation {} restored from the trash", restored.id);
    Ok(restored)
}

pub async fn get_evaluation(db: &PostgresService, id: Uuid) -> Result<EvaluationDetail, AppError> {
    let evaluation = db.get_active_evaluation(id).await?;
    let status_legado = parse_status(&evaluation.status)?.coarse();
    let respostas = db.answers_for_evaluation(id).await?;
    Ok(EvaluationDetail {
        avaliacao: evaluation,
        status_legado,
        respostas,
    })
}

pub async fn list_evaluations(
    db: &PostgresService,
    query: &QEvaluationFilters,
) -> Result<PaginatedList<EvaluationModel>, AppError> {
    let (filters, pagination) = parse_filters(query)?;
    let (items, total) = db.list_evaluations(&filters, pagination).await?;
    Ok(PaginatedList {
        items,
        page: pagination.page,
        per_page: pagination.per_page,
        total,
    })
}

pub async fn get_metrics(
    db: &PostgresService,
    query: &QEvaluationFilters,
) -> Result<EvaluationMetrics, AppError> {
    let (filters, _) = parse_filters(query)?;
    let statuses = db.list_statuses(&filters).await?;

    let total = statuses.len() as u64;
    let mut por_status = std::collections::HashMap::new();
    let mut approved = 0u64;
    for status in &statuses {
        *por_status.entry(status.clone()).or_insert(0u64) += 1;
        if status == EvaluationStatus::Approved.as_str() {
            approved += 1;
        }
    }

    let taxa_conclusao = if total == 0 {
        0.0
    } else {
        (approved as f64 / total as f64 * 100.0).round() / 100.0
    };

    Ok(EvaluationMetrics {
        total,
        por_status,
        taxa_conclusao,
    })
}

pub async fn send_reminders(db: &PostgresService) -> Result<ReminderReport, AppError> {
    let sent = notify::send_deadline_reminders(db).await?;
    Ok(ReminderReport {
        lembretes_enviados: sent,
    })
}
