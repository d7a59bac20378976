pub use sea_orm_migration::prelude::*;

mod m20260212_000001_create_course_table;
mod m20260212_000002_create_course_phase_type_table;
mod m20260212_000003_create_phase_type_dto_table;
mod m20260212_000004_create_course_phase_table;
mod m20260213_000005_create_course_phase_graph_table;
mod m20260213_000006_create_phase_data_graph_table;
mod m20260213_000007_create_participation_data_graph_table;
mod m20260220_000008_create_application_question_text_table;
mod m20260220_000009_create_application_question_multi_select_table;
mod m20260220_000010_create_application_question_file_upload_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260212_000001_create_course_table::Migration),
            Box::new(m20260212_000002_create_course_phase_type_table::Migration),
            Box::new(m20260212_000003_create_phase_type_dto_table::Migration),
            Box::new(m20260212_000004_create_course_phase_table::Migration),
            Box::new(m20260213_000005_create_course_phase_graph_table::Migration),
            Box::new(m20260213_000006_create_phase_data_graph_table::Migration),
            Box::new(m20260213_000007_create_participation_data_graph_table::Migration),
            Box::new(m20260220_000008_create_application_question_text_table::Migration),
            Box::new(m20260220_000009_create_application_question_multi_select_table::Migration),
            Box::new(m20260220_000010_create_application_question_file_upload_table::Migration),
        ]
    }
}
