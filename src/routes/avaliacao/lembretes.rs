use crate::db::postgres_service::PostgresService;
use crate::service;
use crate::types::evaluation::ReminderReport;
use crate::types::response::{ApiReply, ApiResult};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("/lembretes")]
async fn lembretes(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<ReminderReport> {
    let report = service::evaluation::send_reminders(&db).await?;
    Ok(ApiReply::Ok(report))
}
