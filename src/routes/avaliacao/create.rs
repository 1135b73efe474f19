use crate::db::postgres_service::PostgresService;
use crate::service;
use crate::types::evaluation::RCreateEvaluation;
use crate::types::response::{ApiReply, ApiResult};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::evaluation::Model as EvaluationModel;
use std::sync::Arc;

#[post("")]
async fn create(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCreateEvaluation>,
) -> ApiResult<EvaluationModel> {
    let evaluation = service::evaluation::create_evaluation(&db, body.into_inner()).await?;
    Ok(ApiReply::Created(evaluation))
}
