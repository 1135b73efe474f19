pub use sea_orm_migration::prelude::*;

mod m20250410_000001_create_usuario_table;
mod m20250410_000002_create_avaliacao_tables;
mod m20250410_000003_create_notificacao_table;
mod m20250410_000004_create_avaliacao_config_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250410_000001_create_usuario_table::Migration),
            Box::new(m20250410_000002_create_avaliacao_tables::Migration),
            Box::new(m20250410_000003_create_notificacao_table::Migration),
            Box::new(m20250410_000004_create_avaliacao_config_table::Migration),
        ]
    }
}
