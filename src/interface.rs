#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::model::dtos::{ClassAvailabilityQuery, ScheduleRequest, TeacherAvailabilityQuery};
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new(config: BridgeConfig) -> Result<Self>
    where
        Self: Sized;
}

/// The three scheduling endpoints. Each call is one POST; the parsed JSON body
/// is returned whatever the status code.
pub trait SchedulingApi {
    async fn check_teacher_availability(&self, query: TeacherAvailabilityQuery<'_>) -> Result<Value>;

    async fn check_class_availability(&self, query: ClassAvailabilityQuery<'_>) -> Result<Value>;

    async fn schedule_class(&self, request: ScheduleRequest<'_>) -> Result<Value>;
}

/// Named inputs and outputs of the host page.
pub trait FormFields {
    /// Current value of the input with this id.
    fn value(&self, id: &str) -> Result<String>;

    /// Overwrite the text of the output element with this id.
    fn set_text(&self, id: &str, text: &str) -> Result<()>;
}
