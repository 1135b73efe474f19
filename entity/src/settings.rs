use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Calculation settings. Period-scoped active rows take precedence over the
/// global active row; the most recently updated one wins within a scope.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "avaliacao_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    /// "global" | "period"
    pub escopo: String,
    /// Period label the override applies to; null for global scope.
    pub periodo: Option<String>,
    pub ativo: bool,
    /// "simple_average" | "weighted"
    pub metodo: String,
    /// Map of criterion/question id -> weight. Missing entries default to 1.
    #[sea_orm(column_type = "JsonBinary")]
    pub pesos: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
