use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Avaliacao::Table)
                .col(
                    ColumnDef::new(Avaliacao::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Avaliacao::FuncionarioId).uuid().not_null())
                .col(ColumnDef::new(Avaliacao::AvaliadorId).uuid().not_null())
                .col(ColumnDef::new(Avaliacao::CicloId).uuid().null())
                .col(ColumnDef::new(Avaliacao::Periodo).string().not_null())
                .col(ColumnDef::new(Avaliacao::Status).string().not_null())
                .col(ColumnDef::new(Avaliacao::DataInicio).date().not_null())
                .col(ColumnDef::new(Avaliacao::DataFim).date().null())
                .col(ColumnDef::new(Avaliacao::PontuacaoTotal).double().null())
                .col(ColumnDef::new(Avaliacao::MediaGeral).double().null())
                .col(ColumnDef::new(Avaliacao::DadosColaborador).json_binary().null())
                .col(ColumnDef::new(Avaliacao::DadosGerente).json_binary().null())
                .col(
                    ColumnDef::new(Avaliacao::DeletedAt)
                        .timestamp_with_time_zone()
                        .null(),
                )
                .col(
                    ColumnDef::new(Avaliacao::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Avaliacao::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_avaliacao_funcionario")
                .table(Avaliacao::Table)
                .col(Avaliacao::FuncionarioId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_avaliacao_avaliador")
                .table(Avaliacao::Table)
                .col(Avaliacao::AvaliadorId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(AvaliacaoResposta::Table)
                .col(
                    ColumnDef::new(AvaliacaoResposta::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(AvaliacaoResposta::AvaliacaoId)
                        .uuid()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(AvaliacaoResposta::PerguntaId)
                        .integer()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(AvaliacaoResposta::RespondenteTipo)
                        .string()
                        .not_null(),
                )
                .col(ColumnDef::new(AvaliacaoResposta::Nota).double().null())
                .col(ColumnDef::new(AvaliacaoResposta::Comentario).text().null())
                .col(
                    ColumnDef::new(AvaliacaoResposta::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(AvaliacaoResposta::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(AvaliacaoResposta::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_resposta_avaliacao")
                        .from_tbl(AvaliacaoResposta::Table)
                        .from_col(AvaliacaoResposta::AvaliacaoId)
                        .to_tbl(Avaliacao::Table)
                        .to_col(Avaliacao::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // Upsert target: one answer per (avaliacao, pergunta, respondente)
        m.create_index(
            Index::create()
                .name("uq_resposta_avaliacao_pergunta_respondente")
                .table(AvaliacaoResposta::Table)
                .col(AvaliacaoResposta::AvaliacaoId)
                .col(AvaliacaoResposta::PerguntaId)
                .col(AvaliacaoResposta::RespondenteTipo)
                .unique()
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(AvaliacaoResposta::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(Table::drop().table(Avaliacao::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Avaliacao {
    Table,
    Id,
    FuncionarioId,
    AvaliadorId,
    CicloId,
    Periodo,
    Status,
    DataInicio,
    DataFim,
    PontuacaoTotal,
    MediaGeral,
    DadosColaborador,
    DadosGerente,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AvaliacaoResposta {
    Table,
    Id,
    AvaliacaoId,
    PerguntaId,
    RespondenteTipo,
    Nota,
    Comentario,
    CreatedAt,
    UpdatedAt,
}
