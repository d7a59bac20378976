mod application_question;
mod course;
mod course_phase;
mod graph;
