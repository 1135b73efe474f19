use crate::db::postgres_service::PostgresService;
use crate::service;
use crate::types::evaluation::RSubmitQuestionnaire;
use crate::types::response::{ApiReply, ApiResult};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::evaluation::Model as EvaluationModel;
use std::sync::Arc;
use uuid::Uuid;

#[post("/{id}/questionario")]
async fn questionario(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RSubmitQuestionnaire>,
) -> ApiResult<EvaluationModel> {
    let evaluation =
        service::evaluation::submit_questionnaire(&db, path.into_inner(), body.into_inner())
            .await?;
    Ok(ApiReply::Ok(evaluation))
}
