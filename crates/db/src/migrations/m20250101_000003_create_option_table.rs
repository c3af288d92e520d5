//! Create options table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Options::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Options::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Options::Text).string().not_null())
                    .col(ColumnDef::new(Options::QuestionId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_options_question")
                            .from(Options::Table, Options::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: question_id (batched option loading, vote validation join)
        manager
            .create_index(
                Index::create()
                    .name("idx_options_question_id")
                    .table(Options::Table)
                    .col(Options::QuestionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Options::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Options {
    Table,
    Id,
    Text,
    QuestionId,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
}
