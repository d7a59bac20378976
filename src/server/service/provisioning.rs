//! Course group and role provisioning against the identity service.

use serde::Serialize;

use crate::server::error::AppError;

#[derive(Serialize)]
struct CreateCourseGroupsRequest<'a> {
    course_name: &'a str,
    semester_tag: &'a str,
}

pub struct ProvisioningService<'a> {
    http_client: &'a reqwest::Client,
    identity_base_url: &'a str,
}

impl<'a> ProvisioningService<'a> {
    pub fn new(http_client: &'a reqwest::Client, identity_base_url: &'a str) -> Self {
        Self {
            http_client,
            identity_base_url,
        }
    }

    /// Asks the identity service to create the groups and roles of a course.
    ///
    /// Called once per course copy, inside the copy transaction: a failure
    /// here aborts the copy so no course exists without its groups.
    ///
    /// # Arguments
    /// - `course_name` - Name of the newly created course
    /// - `semester_tag` - Semester tag of the newly created course
    ///
    /// # Returns
    /// - `Ok(())` - Groups and roles created
    /// - `Err(AppError)` - The identity service was unreachable or rejected the request
    pub async fn create_course_groups_and_roles(
        &self,
        course_name: &str,
        semester_tag: &str,
    ) -> Result<(), AppError> {
        let url = format!(
            "{}/course-groups",
            self.identity_base_url.trim_end_matches('/')
        );

        let request = CreateCourseGroupsRequest {
            course_name,
            semester_tag,
        };

        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(AppError::InternalError(format!(
                "Identity service returned status {} while creating groups for course '{}'",
                response.status(),
                course_name
            )));
        }

        Ok(())
    }
}
