use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::Conflict("email already registered".into()));
        }
        let uid = Uuid::new_v4();
        let now = Utc::now();

        UserActive {
            id: Set(uid),
            nome: Set(payload.nome),
            email: Set(payload.email),
            role: Set(payload.role),
            ativo: Set(true),
            push_enabled: Set(payload.push_enabled),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        Ok(uid)
    }

    pub async fn set_push_enabled(&self, user_id: Uuid, enabled: bool) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user(user_id).await?.into();
        am.push_enabled = Set(enabled);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    /// Reviewer gate: active user holding a manager or admin role.
    pub async fn is_authorized_evaluator(&self, user_id: Uuid) -> Result<bool, AppError> {
        match User::find_by_id(user_id)
            .one(&self.database_connection)
            .await?
        {
            Some(user) => Ok(user.ativo && (user.role == "manager" || user.role == "admin")),
            None => Ok(false),
        }
    }
}
