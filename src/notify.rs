use crate::db::notification::DBNotificationCreate;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::mail::SendEmail;
use crate::utils::{mail, push};
use crate::workflow::EvaluationStatus;
use chrono::{Duration, Utc};
use entity::evaluation::Model as EvaluationModel;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

/// Days before the deadline at which the reminder batch starts firing.
pub const REMINDER_WINDOW_DAYS: i64 = 3;

/// Lifecycle moments that produce a notification.
#[derive(Debug, Clone)]
pub enum NotifyEvent {
    Created,
    Submitted,
    /// Submission after a return cycle.
    Resubmitted,
    Approved,
    Rejected,
    Returned { reason: String },
    Trashed,
    DeadlineReminder { days_left: i64 },
}

struct Message {
    tipo: &'static str,
    titulo: String,
    mensagem: String,
}

fn render(event: &NotifyEvent, evaluation: &EvaluationModel, recipient: Uuid) -> Message {
    let periodo = &evaluation.periodo;
    // On a self-review both ids match and the reviewee wording wins.
    let as_reviewer =
        recipient == evaluation.avaliador_id && recipient != evaluation.funcionario_id;
    match event {
        NotifyEvent::Created if as_reviewer => Message {
            tipo: "ciclo_abertura",
            titulo: "Nova avaliação atribuída".into(),
            mensagem: format!(
                "Você é o avaliador da avaliação de desempenho do período {periodo}."
            ),
        },
        NotifyEvent::Created => Message {
            tipo: "ciclo_abertura",
            titulo: "Nova avaliação disponível".into(),
            mensagem: format!(
                "Sua avaliação de desempenho do período {periodo} está disponível para preenchimento."
            ),
        },
        NotifyEvent::Submitted => Message {
            tipo: "submissao",
            titulo: "Avaliação respondida".into(),
            mensagem: format!(
                "O colaborador concluiu o questionário do período {periodo} e a avaliação aguarda sua análise."
            ),
        },
        NotifyEvent::Resubmitted => Message {
            tipo: "reenvio",
            titulo: "Avaliação reenviada".into(),
            mensagem: format!(
                "O colaborador reenviou o questionário do período {periodo} após a devolução."
            ),
        },
        NotifyEvent::Approved => Message {
            tipo: "aprovacao",
            titulo: "Avaliação aprovada".into(),
            mensagem: format!("Sua avaliação do período {periodo} foi aprovada."),
        },
        NotifyEvent::Rejected => Message {
            tipo: "rejeicao",
            titulo: "Avaliação rejeitada".into(),
            mensagem: format!("Sua avaliação do período {periodo} foi rejeitada pelo avaliador."),
        },
        // The stated reason is relayed verbatim so the reviewee sees exactly
        // what the manager wrote.
        NotifyEvent::Returned { reason } => Message {
            tipo: "devolucao",
            titulo: "Avaliação devolvida para ajustes".into(),
            mensagem: reason.clone(),
        },
        NotifyEvent::Trashed => Message {
            tipo: "lixeira",
            titulo: "Avaliação movida para a lixeira".into(),
            mensagem: format!(
                "A avaliação do período {periodo} foi movida para a lixeira e será removida permanentemente em 30 dias."
            ),
        },
        NotifyEvent::DeadlineReminder { days_left } => Message {
            tipo: "lembrete",
            titulo: "Prazo da avaliação se aproximando".into(),
            mensagem: format!(
                "A avaliação do período {periodo} vence em {days_left} dia(s). Conclua as etapas pendentes."
            ),
        },
    }
}

fn recipients(event: &NotifyEvent, evaluation: &EvaluationModel) -> Vec<Uuid> {
    let mut out = match event {
        NotifyEvent::Approved | NotifyEvent::Rejected | NotifyEvent::Returned { .. } => {
            vec![evaluation.funcionario_id]
        }
        NotifyEvent::Submitted | NotifyEvent::Resubmitted => vec![evaluation.avaliador_id],
        // Opening a cycle concerns both sides: the reviewee fills it in, the
        // reviewer has it assigned.
        NotifyEvent::Created | NotifyEvent::Trashed => {
            vec![evaluation.funcionario_id, evaluation.avaliador_id]
        }
        NotifyEvent::DeadlineReminder { .. } => {
            let mut ids = vec![evaluation.funcionario_id];
            if evaluation.status == EvaluationStatus::AwaitingManager.as_str() {
                ids.push(evaluation.avaliador_id);
            }
            ids
        }
    };
    out.dedup();
    out
}

/// Persist one notification per recipient and fan out to the side channels.
/// The database row is mandatory; email and push are best-effort and only
/// logged on failure. Returns the number of records persisted.
pub async fn dispatch(
    db: &PostgresService,
    event: NotifyEvent,
    evaluation: &EvaluationModel,
) -> Result<u64, AppError> {
    let mut persisted = 0u64;

    for user_id in recipients(&event, evaluation) {
        let message = render(&event, evaluation, user_id);
        let record = db
            .insert_notification(DBNotificationCreate {
                usuario_id: user_id,
                tipo: message.tipo.to_string(),
                titulo: message.titulo.clone(),
                mensagem: message.mensagem.clone(),
                dados: json!({
                    "avaliacao_id": evaluation.id,
                    "periodo": evaluation.periodo,
                    "status": evaluation.status,
                }),
            })
            .await?;
        persisted += 1;

        let user = match db.get_user(user_id).await {
            Ok(user) => user,
            Err(e) => {
                warn!("notification {} persisted but recipient lookup failed: {e}", record.id);
                continue;
            }
        };

        match mail::send_email(SendEmail::plain(
            &user.email,
            &message.titulo,
            &message.mensagem,
        ))
        .await
        {
            Ok(()) => {
                if let Err(e) = db.mark_notification_emailed(record.id).await {
                    warn!("could not flag notification {} as emailed: {e}", record.id);
                }
            }
            Err(e) => warn!("email to {} failed: {e}", user.email),
        }

        if user.push_enabled {
            match push::send_push(user.id, &message.titulo, &message.mensagem).await {
                Ok(()) => {
                    if let Err(e) = db.mark_notification_pushed(record.id).await {
                        warn!("could not flag notification {} as pushed: {e}", record.id);
                    }
                }
                Err(e) => warn!("push to {} failed: {e}", user.id),
            }
        }
    }

    Ok(persisted)
}

/// Reminder batch: every open evaluation whose deadline falls within the next
/// [`REMINDER_WINDOW_DAYS`] days gets a nudge. Returns how many notifications
/// were persisted across the batch.
pub async fn send_deadline_reminders(db: &PostgresService) -> Result<u64, AppError> {
    let today = Utc::now().date_naive();
    let horizon = today + Duration::days(REMINDER_WINDOW_DAYS);
    let due = db.list_due_evaluations(today, horizon).await?;

    let mut sent = 0u64;
    for evaluation in due {
        let days_left = evaluation
            .data_fim
            .map(|fim| (fim - today).num_days())
            .unwrap_or(0);
        sent += dispatch(db, NotifyEvent::DeadlineReminder { days_left }, &evaluation).await?;
    }
    Ok(sent)
}
