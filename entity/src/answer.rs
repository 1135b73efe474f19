use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One answer per (avaliacao, pergunta, respondente), upserted rather than duplicated.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "avaliacao_resposta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub avaliacao_id: Uuid,
    pub pergunta_id: i32,
    /// "collaborator" | "manager"
    pub respondente_tipo: String,
    pub nota: Option<f64>,
    pub comentario: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluation::Entity",
        from = "Column::AvaliacaoId",
        to = "super::evaluation::Column::Id",
        on_delete = "Cascade"
    )]
    Evaluation,
}

impl Related<super::evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
