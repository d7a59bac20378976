pub use super::application_question_file_upload::Entity as ApplicationQuestionFileUpload;
pub use super::application_question_multi_select::Entity as ApplicationQuestionMultiSelect;
pub use super::application_question_text::Entity as ApplicationQuestionText;
pub use super::course::Entity as Course;
pub use super::course_phase::Entity as CoursePhase;
pub use super::course_phase_graph::Entity as CoursePhaseGraph;
pub use super::course_phase_type::Entity as CoursePhaseType;
pub use super::participation_data_graph::Entity as ParticipationDataGraph;
pub use super::phase_data_graph::Entity as PhaseDataGraph;
pub use super::phase_type_dto::Entity as PhaseTypeDto;
