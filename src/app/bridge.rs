//! The three page handlers
//!
//! Every handler runs the same linear sequence: read its fields, post them,
//! decode the reply, write one output element. Nothing is cached between calls,
//! and a failure anywhere before the write leaves the output untouched.

use crate::config::{BridgeConfig, ResponsePolicy};
use crate::error::Result;
use crate::form::{fields, outputs};
use crate::interface::{FormFields, HttpClient, SchedulingApi};
use crate::model::dtos::{ClassAvailabilityQuery, ScheduleRequest, TeacherAvailabilityQuery};
use crate::model::structs::{AvailabilityResponse, ScheduleResponse, Subject};

pub struct FormBridge<F, C> {
    form: F,
    api: C,
    policy: ResponsePolicy,
}

impl<F: FormFields, C: SchedulingApi> FormBridge<F, C> {
    pub fn new(form: F, api: C, policy: ResponsePolicy) -> Self {
        Self { form, api, policy }
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    pub async fn check_teacher_availability(&self) -> Result<String> {
        let teacher = self.form.value(fields::TEACHER_NAME)?;
        let day = self.form.value(fields::DAY)?;
        let start_time = self.form.value(fields::START_TIME)?;
        let end_time = self.form.value(fields::END_TIME)?;

        let body = self
            .api
            .check_teacher_availability(TeacherAvailabilityQuery {
                teacher: &teacher,
                day: &day,
                start_time: &start_time,
                end_time: &end_time,
            })
            .await?;

        let response = AvailabilityResponse::from_value(&body, self.policy)?;
        self.render(
            outputs::TEACHER_AVAILABILITY,
            Subject::Teacher.message(response.available),
        )
    }

    pub async fn check_class_availability(&self) -> Result<String> {
        let class_name = self.form.value(fields::CLASS_NAME)?;
        let day = self.form.value(fields::CLASS_DAY)?;
        let start_time = self.form.value(fields::CLASS_START_TIME)?;
        let end_time = self.form.value(fields::CLASS_END_TIME)?;

        let body = self
            .api
            .check_class_availability(ClassAvailabilityQuery {
                class_name: &class_name,
                day: &day,
                start_time: &start_time,
                end_time: &end_time,
            })
            .await?;

        let response = AvailabilityResponse::from_value(&body, self.policy)?;
        self.render(
            outputs::CLASS_AVAILABILITY,
            Subject::Classroom.message(response.available),
        )
    }

    /// Posts the booking and shows the server's message as-is.
    pub async fn schedule_class(&self) -> Result<String> {
        let class_name = self.form.value(fields::SCHEDULE_CLASS_NAME)?;
        let teacher = self.form.value(fields::SCHEDULE_TEACHER_NAME)?;
        let day = self.form.value(fields::SCHEDULE_DAY)?;
        let start_time = self.form.value(fields::SCHEDULE_START_TIME)?;
        let end_time = self.form.value(fields::SCHEDULE_END_TIME)?;

        let body = self
            .api
            .schedule_class(ScheduleRequest {
                class_name: &class_name,
                teacher: &teacher,
                day: &day,
                start_time: &start_time,
                end_time: &end_time,
            })
            .await?;

        let response = ScheduleResponse::from_value(&body, self.policy)?;
        self.render(outputs::SCHEDULE_RESULT, &response.result)
    }

    fn render(&self, output_id: &str, text: &str) -> Result<String> {
        log::debug!("#{} <- {:?}", output_id, text);
        self.form.set_text(output_id, text)?;
        Ok(text.to_string())
    }
}

impl<F: FormFields, C: SchedulingApi + HttpClient> FormBridge<F, C> {
    /// Builds the client from `config` and decodes with the same config's policy.
    pub async fn connect(form: F, config: BridgeConfig) -> Result<Self> {
        let policy = config.policy;
        let api = C::new(config).await?;
        Ok(Self::new(form, api, policy))
    }
}
