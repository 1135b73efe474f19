use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Notificacao::Table)
                .col(
                    ColumnDef::new(Notificacao::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Notificacao::UsuarioId).uuid().not_null())
                .col(ColumnDef::new(Notificacao::Tipo).string().not_null())
                .col(ColumnDef::new(Notificacao::Titulo).string().not_null())
                .col(ColumnDef::new(Notificacao::Mensagem).text().not_null())
                .col(
                    ColumnDef::new(Notificacao::Dados)
                        .json_binary()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Notificacao::Lida)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(
                    ColumnDef::new(Notificacao::EnviadaEmail)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(
                    ColumnDef::new(Notificacao::EnviadaPush)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(
                    ColumnDef::new(Notificacao::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_notificacao_usuario")
                .table(Notificacao::Table)
                .col(Notificacao::UsuarioId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(Notificacao::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Notificacao {
    Table,
    Id,
    UsuarioId,
    Tipo,
    Titulo,
    Mensagem,
    Dados,
    Lida,
    EnviadaEmail,
    EnviadaPush,
    CreatedAt,
}
