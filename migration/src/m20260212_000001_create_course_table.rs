use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_uuid(Course::Id))
                    .col(string(Course::Name))
                    .col(date(Course::StartDate))
                    .col(date(Course::EndDate))
                    .col(string(Course::SemesterTag))
                    .col(string(Course::CourseType))
                    .col(integer(Course::Ects))
                    .col(json(Course::RestrictedData))
                    .col(json(Course::StudentReadableData))
                    .col(boolean(Course::Template))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    SemesterTag,
    CourseType,
    Ects,
    RestrictedData,
    StudentReadableData,
    Template,
}
