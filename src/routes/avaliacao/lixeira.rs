use crate::db::postgres_service::PostgresService;
use crate::service;
use crate::types::response::{ApiReply, ApiResult};
use actix_web::{post, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::evaluation::Model as EvaluationModel;
use std::sync::Arc;
use uuid::Uuid;

#[post("/{id}/lixeira")]
async fn lixeira(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<EvaluationModel> {
    let evaluation = service::evaluation::trash_evaluation(&db, path.into_inner()).await?;
    Ok(ApiReply::OkWithMessage(
        evaluation,
        "Avaliação movida para a lixeira. Será removida permanentemente em 30 dias.".into(),
    ))
}

#[put("/{id}/lixeira")]
async fn restaurar(
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<EvaluationModel> {
    let evaluation = service::evaluation::restore_evaluation(&db, path.into_inner()).await?;
    Ok(ApiReply::OkWithMessage(
        evaluation,
        "Avaliação restaurada da lixeira.".into(),
    ))
}
