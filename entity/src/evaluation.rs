use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "avaliacao")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub funcionario_id: Uuid,
    pub avaliador_id: Uuid,
    pub ciclo_id: Option<Uuid>,
    pub periodo: String,
    /// Canonical fine-grained status, see `workflow::EvaluationStatus`.
    pub status: String,
    pub data_inicio: Date,
    pub data_fim: Option<Date>,
    pub pontuacao_total: Option<f64>,
    pub media_geral: Option<f64>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub dados_colaborador: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub dados_gerente: Option<Json>,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FuncionarioId",
        to = "super::user::Column::Id"
    )]
    Funcionario,
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
