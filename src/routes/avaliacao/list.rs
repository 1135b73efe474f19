use crate::db::postgres_service::PostgresService;
use crate::service;
use crate::types::evaluation::{PaginatedList, QEvaluationFilters};
use crate::types::response::{ApiReply, ApiResult};
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::evaluation::Model as EvaluationModel;
use std::sync::Arc;

#[get("")]
async fn list(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<QEvaluationFilters>,
) -> ApiResult<PaginatedList<EvaluationModel>> {
    let page = service::evaluation::list_evaluations(&db, &query).await?;
    Ok(ApiReply::Ok(page))
}
