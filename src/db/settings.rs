use crate::db::postgres_service::PostgresService;
use crate::scoring::{CalcMethod, SettingsSnapshot};
use crate::types::error::AppError;
use chrono::Utc;
use entity::settings::{
    ActiveModel as SettingsActive, Column, Entity as Settings, Model as SettingsModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

pub struct DBSettingsCreate {
    pub escopo: String,
    pub periodo: Option<String>,
    pub ativo: bool,
    pub metodo: String,
    pub pesos: serde_json::Value,
}

fn snapshot_from(model: SettingsModel) -> SettingsSnapshot {
    let method = CalcMethod::parse(&model.metodo).unwrap_or_else(|| {
        warn!("unknown calculation method {:?}, using simple average", model.metodo);
        CalcMethod::SimpleAverage
    });

    let weights: HashMap<String, f64> = model
        .pesos
        .as_object()
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_f64().map(|w| (k.clone(), w)))
                .collect()
        })
        .unwrap_or_default();

    SettingsSnapshot { method, weights }
}

impl PostgresService {
    /// Effective settings for a period: the most recently updated active
    /// period-scoped record wins, else the active global one, else `None`.
    /// Absence is a valid outcome; callers fall back to a simple average.
    pub async fn resolve_settings(
        &self,
        periodo: Option<&str>,
    ) -> Result<Option<SettingsSnapshot>, AppError> {
        if let Some(periodo) = periodo {
            let scoped = Settings::find()
                .filter(Column::Escopo.eq("period"))
                .filter(Column::Periodo.eq(periodo))
                .filter(Column::Ativo.eq(true))
                .order_by_desc(Column::UpdatedAt)
                .one(&self.database_connection)
                .await?;
            if let Some(model) = scoped {
                return Ok(Some(snapshot_from(model)));
            }
        }

        let global = Settings::find()
            .filter(Column::Escopo.eq("global"))
            .filter(Column::Ativo.eq(true))
            .order_by_desc(Column::UpdatedAt)
            .one(&self.database_connection)
            .await?;

        Ok(global.map(snapshot_from))
    }

    pub async fn create_settings(&self, payload: DBSettingsCreate) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        SettingsActive {
            id: Set(id),
            escopo: Set(payload.escopo),
            periodo: Set(payload.periodo),
            ativo: Set(payload.ativo),
            metodo: Set(payload.metodo),
            pesos: Set(payload.pesos),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;
        Ok(id)
    }
}
