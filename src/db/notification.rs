use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::notification::{
    ActiveModel as NotificationActive, Column, Entity as Notification, Model as NotificationModel,
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

pub struct DBNotificationCreate {
    pub usuario_id: Uuid,
    pub tipo: String,
    pub titulo: String,
    pub mensagem: String,
    pub dados: serde_json::Value,
}

impl PostgresService {
    /// The persisted record is the one channel that must succeed; email and
    /// push flags are flipped afterwards as deliveries go through.
    pub async fn insert_notification(
        &self,
        payload: DBNotificationCreate,
    ) -> Result<NotificationModel, AppError> {
        Ok(NotificationActive {
            id: Set(Uuid::new_v4()),
            usuario_id: Set(payload.usuario_id),
            tipo: Set(payload.tipo),
            titulo: Set(payload.titulo),
            mensagem: Set(payload.mensagem),
            dados: Set(payload.dados),
            lida: Set(false),
            enviada_email: Set(false),
            enviada_push: Set(false),
            created_at: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn mark_notification_emailed(&self, id: Uuid) -> Result<(), AppError> {
        Notification::update_many()
            .col_expr(Column::EnviadaEmail, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }

    pub async fn mark_notification_pushed(&self, id: Uuid) -> Result<(), AppError> {
        Notification::update_many()
            .col_expr(Column::EnviadaPush, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }

    pub async fn notifications_for_user(
        &self,
        usuario_id: Uuid,
    ) -> Result<Vec<NotificationModel>, AppError> {
        Ok(Notification::find()
            .filter(Column::UsuarioId.eq(usuario_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }
}
