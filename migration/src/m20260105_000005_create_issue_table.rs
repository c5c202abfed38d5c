use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(pk_auto(Issue::Id))
                    .col(string(Issue::Title))
                    .col(text_null(Issue::Description))
                    .col(text_null(Issue::Notes))
                    .col(date(Issue::DueDate))
                    .col(string(Issue::Status).default("new"))
                    .col(string(Issue::Priority).default("medium"))
                    .col(integer(Issue::ProjectId))
                    .col(integer_null(Issue::AssignedToId))
                    .col(
                        timestamp_with_time_zone(Issue::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Issue::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_project_id")
                            .from(Issue::Table, Issue::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_assigned_to_id")
                            .from(Issue::Table, Issue::AssignedToId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Issue {
    Table,
    Id,
    Title,
    Description,
    Notes,
    DueDate,
    Status,
    Priority,
    ProjectId,
    AssignedToId,
    CreatedAt,
    UpdatedAt,
}
