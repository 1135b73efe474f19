use crate::db::postgres_service::PostgresService;
use crate::service;
use crate::types::evaluation::{EvaluationMetrics, QEvaluationFilters};
use crate::types::response::{ApiReply, ApiResult};
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[get("/metricas")]
async fn metricas(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<QEvaluationFilters>,
) -> ApiResult<EvaluationMetrics> {
    let metrics = service::evaluation::get_metrics(&db, &query).await?;
    Ok(ApiReply::Ok(metrics))
}
