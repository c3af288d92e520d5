//! Create questions table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Text).string().not_null())
                    .col(ColumnDef::new(Questions::PollId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_poll")
                            .from(Questions::Table, Questions::PollId)
                            .to(Polls::Table, Polls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: poll_id (for loading a poll's questions)
        manager
            .create_index(
                Index::create()
                    .name("idx_questions_poll_id")
                    .table(Questions::Table)
                    .col(Questions::PollId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Text,
    PollId,
}

#[derive(Iden)]
enum Polls {
    Table,
    Id,
}
