use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoursePhaseType::Table)
                    .if_not_exists()
                    .col(pk_uuid(CoursePhaseType::Id))
                    .col(string_uniq(CoursePhaseType::Name))
                    .col(string(CoursePhaseType::BaseUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoursePhaseType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CoursePhaseType {
    Table,
    Id,
    Name,
    BaseUrl,
}
