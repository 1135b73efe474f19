use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(AvaliacaoConfig::Table)
                .col(
                    ColumnDef::new(AvaliacaoConfig::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(AvaliacaoConfig::Escopo).string().not_null())
                .col(ColumnDef::new(AvaliacaoConfig::Periodo).string().null())
                .col(
                    ColumnDef::new(AvaliacaoConfig::Ativo)
                        .boolean()
                        .not_null()
                        .default(true),
                )
                .col(
                    ColumnDef::new(AvaliacaoConfig::Metodo)
                        .string()
                        .not_null()
                        .default("simple_average"),
                )
                .col(
                    ColumnDef::new(AvaliacaoConfig::Pesos)
                        .json_binary()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(AvaliacaoConfig::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(AvaliacaoConfig::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(AvaliacaoConfig::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AvaliacaoConfig {
    Table,
    Id,
    Escopo,
    Periodo,
    Ativo,
    Metodo,
    Pesos,
    CreatedAt,
    UpdatedAt,
}
