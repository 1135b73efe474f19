use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::evaluation::AnswerInput;
use crate::workflow::RespondentType;
use chrono::Utc;
use entity::answer::{ActiveModel as AnswerActive, Column, Entity as Answer, Model as AnswerModel};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

/// Designated slot for the manager's free-text rationale.
pub const MANAGER_COMMENT_QUESTION: i32 = 15;

impl PostgresService {
    /// Insert-or-replace on (avaliacao, pergunta, respondente): the same
    /// question answered again overwrites the previous value, never duplicates.
    pub async fn upsert_answers(
        &self,
        avaliacao_id: Uuid,
        respondent: RespondentType,
        answers: &[AnswerInput],
    ) -> Result<(), AppError> {
        if answers.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models: Vec<AnswerActive> = answers
            .iter()
            .map(|answer| AnswerActive {
                id: Set(Uuid::new_v4()),
                avaliacao_id: Set(avaliacao_id),
                pergunta_id: Set(answer.pergunta_id),
                respondente_tipo: Set(respondent.as_str().to_string()),
                nota: Set(answer.nota),
                comentario: Set(answer.comentario.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .collect();

        Answer::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    Column::AvaliacaoId,
                    Column::PerguntaId,
                    Column::RespondenteTipo,
                ])
                .update_columns([Column::Nota, Column::Comentario, Column::UpdatedAt])
                .to_owned(),
            )
            .exec(&self.database_connection)
            .await?;

        Ok(())
    }

    pub async fn upsert_manager_comment(
        &self,
        avaliacao_id: Uuid,
        comentario: &str,
    ) -> Result<(), AppError> {
        self.upsert_answers(
            avaliacao_id,
            RespondentType::Manager,
            &[AnswerInput {
                pergunta_id: MANAGER_COMMENT_QUESTION,
                nota: None,
                comentario: Some(comentario.to_string()),
            }],
        )
        .await
    }

    pub async fn answers_for_evaluation(
        &self,
        avaliacao_id: Uuid,
    ) -> Result<Vec<AnswerModel>, AppError> {
        Ok(Answer::find()
            .filter(Column::AvaliacaoId.eq(avaliacao_id))
            .order_by_asc(Column::PerguntaId)
            .all(&self.database_connection)
            .await?)
    }
}
