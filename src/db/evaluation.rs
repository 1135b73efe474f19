use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::evaluation::{DBEvaluationCreate, EvaluationFilters, Pagination};
use crate::workflow::{EvaluationStatus, RespondentType, ALL_STATUSES};
use chrono::{NaiveDate, Utc};
use entity::evaluation::{
    ActiveModel as EvaluationActive, Column, Entity as Evaluation, Model as EvaluationModel,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use uuid::Uuid;

fn apply_filters(
    mut finder: Select<Evaluation>,
    filters: &EvaluationFilters,
) -> Select<Evaluation> {
    if let Some(statuses) = &filters.status {
        let values: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
        finder = finder.filter(Column::Status.is_in(values));
    }
    if let Some(funcionario) = filters.funcionario_id {
        finder = finder.filter(Column::FuncionarioId.eq(funcionario));
    }
    if let Some(avaliador) = filters.avaliador_id {
        finder = finder.filter(Column::AvaliadorId.eq(avaliador));
    }
    if let Some(ciclo) = filters.ciclo_id {
        finder = finder.filter(Column::CicloId.eq(ciclo));
    }
    if let Some(periodo) = &filters.periodo {
        finder = finder.filter(Column::Periodo.eq(periodo.clone()));
    }
    if let Some(de) = filters.criado_de {
        finder = finder.filter(Column::CreatedAt.gte(de));
    }
    if let Some(ate) = filters.criado_ate {
        finder = finder.filter(Column::CreatedAt.lte(ate));
    }
    finder
}

impl PostgresService {
    /// The one-active-evaluation-per-(reviewee, period) pre-check.
    pub async fn active_evaluation_exists(
        &self,
        funcionario_id: Uuid,
        periodo: &str,
    ) -> Result<bool, AppError> {
        Ok(Evaluation::find()
            .filter(Column::FuncionarioId.eq(funcionario_id))
            .filter(Column::Periodo.eq(periodo))
            .filter(Column::DeletedAt.is_null())
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn create_evaluation(
        &self,
        payload: DBEvaluationCreate,
    ) -> Result<EvaluationModel, AppError> {
        if self
            .active_evaluation_exists(payload.funcionario_id, &payload.periodo)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "active evaluation already exists for reviewee in period {}",
                payload.periodo
            )));
        }

        let now = Utc::now();
        let model = EvaluationActive {
            id: Set(Uuid::new_v4()),
            funcionario_id: Set(payload.funcionario_id),
            avaliador_id: Set(payload.avaliador_id),
            ciclo_id: Set(payload.ciclo_id),
            periodo: Set(payload.periodo),
            status: Set(EvaluationStatus::PendingResponse.as_str().to_string()),
            data_inicio: Set(payload.data_inicio.unwrap_or_else(|| now.date_naive())),
            data_fim: Set(payload.data_fim),
            pontuacao_total: Set(None),
            media_geral: Set(None),
            dados_colaborador: Set(None),
            dados_gerente: Set(None),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        Ok(model)
    }

    /// Direct lookup, trashed records included (audit/undo path).
    pub async fn get_evaluation(&self, id: Uuid) -> Result<EvaluationModel, AppError> {
        Ok(Evaluation::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Evaluation does not exist".into()))?)
    }

    pub async fn get_active_evaluation(&self, id: Uuid) -> Result<EvaluationModel, AppError> {
        Ok(Evaluation::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Evaluation does not exist".into()))?)
    }

    /// Conditional status flip: `WHERE status = expected`. Zero rows affected
    /// means another writer got there first (or the record was trashed), which
    /// the caller must treat as a stale-state precondition failure.
    pub async fn update_status_checked(
        &self,
        id: Uuid,
        expected: EvaluationStatus,
        next: EvaluationStatus,
    ) -> Result<(), AppError> {
        let result = Evaluation::update_many()
            .col_expr(Column::Status, Expr::value(next.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(expected.as_str()))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.database_connection)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::Precondition(
                "evaluation status changed concurrently".into(),
            ));
        }
        Ok(())
    }

    pub async fn store_scores(
        &self,
        id: Uuid,
        pontuacao_total: f64,
        media_geral: f64,
    ) -> Result<(), AppError> {
        let mut am: EvaluationActive = self.get_evaluation(id).await?.into();
        am.pontuacao_total = Set(Some(pontuacao_total));
        am.media_geral = Set(Some(media_geral));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    pub async fn store_respondent_payload(
        &self,
        id: Uuid,
        respondent: RespondentType,
        payload: serde_json::Value,
    ) -> Result<(), AppError> {
        let mut am: EvaluationActive = self.get_evaluation(id).await?.into();
        match respondent {
            RespondentType::Collaborator => am.dados_colaborador = Set(Some(payload)),
            RespondentType::Manager => am.dados_gerente = Set(Some(payload)),
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    /// Trash, never a hard delete. Re-trashing is a precondition failure.
    pub async fn soft_delete_evaluation(&self, id: Uuid) -> Result<EvaluationModel, AppError> {
        let evaluation = self.get_evaluation(id).await?;
        if evaluation.deleted_at.is_some() {
            return Err(AppError::Precondition(
                "evaluation is already in the trash".into(),
            ));
        }

        let now = Utc::now();
        let mut am: EvaluationActive = evaluation.into();
        am.deleted_at = Set(Some(now));
        am.updated_at = Set(now);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn restore_evaluation(&self, id: Uuid) -> Result<EvaluationModel, AppError> {
        let evaluation = self.get_evaluation(id).await?;
        if evaluation.deleted_at.is_none() {
            return Err(AppError::Precondition(
                "evaluation is not in the trash".into(),
            ));
        }

        let mut am: EvaluationActive = evaluation.into();
        am.deleted_at = Set(None);
        am.status = Set(EvaluationStatus::PendingResponse.as_str().to_string());
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn list_evaluations(
        &self,
        filters: &EvaluationFilters,
        pagination: Pagination,
    ) -> Result<(Vec<EvaluationModel>, u64), AppError> {
        let finder = apply_filters(
            Evaluation::find().filter(Column::DeletedAt.is_null()),
            filters,
        );
        let total = finder.clone().count(&self.database_connection).await?;
        let items = finder
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.database_connection, pagination.per_page.max(1))
            .fetch_page(pagination.page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    /// Status column of the filtered active set, for metrics aggregation.
    pub async fn list_statuses(&self, filters: &EvaluationFilters) -> Result<Vec<String>, AppError> {
        let rows: Vec<String> = apply_filters(
            Evaluation::find().filter(Column::DeletedAt.is_null()),
            filters,
        )
        .select_only()
        .column(Column::Status)
        .into_tuple()
        .all(&self.database_connection)
        .await?;
        Ok(rows)
    }

    /// Active evaluations in a non-terminal status whose deadline falls inside
    /// the given window. Feeds the reminder batch.
    pub async fn list_due_evaluations(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<EvaluationModel>, AppError> {
        let open: Vec<&str> = ALL_STATUSES
            .iter()
            .filter(|s| !s.is_terminal() && !matches!(s, EvaluationStatus::Approved))
            .map(|s| s.as_str())
            .collect();

        Ok(Evaluation::find()
            .filter(Column::DeletedAt.is_null())
            .filter(Column::Status.is_in(open))
            .filter(Column::DataFim.gte(from))
            .filter(Column::DataFim.lte(to))
            .all(&self.database_connection)
            .await?)
    }
}
