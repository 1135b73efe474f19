use crate::db::postgres_service::PostgresService;
use crate::service;
use crate::types::evaluation::EvaluationDetail;
use crate::types::response::{ApiReply, ApiResult};
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[get("/{id}")]
async fn get(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<EvaluationDetail> {
    let detail = service::evaluation::get_evaluation(&db, path.into_inner()).await?;
    Ok(ApiReply::Ok(detail))
}
