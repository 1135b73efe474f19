use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notificacao")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub tipo: String,
    pub titulo: String,
    pub mensagem: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub dados: Json,
    pub lida: bool,
    pub enviada_email: bool,
    pub enviada_push: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UsuarioId",
        to = "super::user::Column::Id"
    )]
    Usuario,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
