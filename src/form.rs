//! Element ids of the scheduling page and an in-memory form

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{ErrorKind, Result};
use crate::interface::FormFields;

/// Input element ids, grouped by the handler that reads them.
pub mod fields {
    pub const TEACHER_NAME: &str = "teacher-name";
    pub const DAY: &str = "day";
    pub const START_TIME: &str = "start-time";
    pub const END_TIME: &str = "end-time";

    pub const CLASS_NAME: &str = "class-name";
    pub const CLASS_DAY: &str = "class-day";
    pub const CLASS_START_TIME: &str = "class-start-time";
    pub const CLASS_END_TIME: &str = "class-end-time";

    pub const SCHEDULE_CLASS_NAME: &str = "schedule-class-name";
    pub const SCHEDULE_TEACHER_NAME: &str = "schedule-teacher-name";
    pub const SCHEDULE_DAY: &str = "schedule-day";
    pub const SCHEDULE_START_TIME: &str = "schedule-start-time";
    pub const SCHEDULE_END_TIME: &str = "schedule-end-time";
}

/// Output element ids.
pub mod outputs {
    pub const TEACHER_AVAILABILITY: &str = "teacher-availability";
    pub const CLASS_AVAILABILITY: &str = "class-availability";
    pub const SCHEDULE_RESULT: &str = "schedule-result";
}

#[derive(Debug, Default)]
struct Elements {
    values: HashMap<String, String>,
    texts: HashMap<String, String>,
}

/// A page held in memory. Inputs and outputs only exist once declared.
#[derive(Debug, Default)]
pub struct MemoryForm {
    elements: Mutex<Elements>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form with every input and output of the scheduling page, all empty.
    pub fn scheduling_page() -> Self {
        let form = Self::new();
        for id in [
            fields::TEACHER_NAME,
            fields::DAY,
            fields::START_TIME,
            fields::END_TIME,
            fields::CLASS_NAME,
            fields::CLASS_DAY,
            fields::CLASS_START_TIME,
            fields::CLASS_END_TIME,
            fields::SCHEDULE_CLASS_NAME,
            fields::SCHEDULE_TEACHER_NAME,
            fields::SCHEDULE_DAY,
            fields::SCHEDULE_START_TIME,
            fields::SCHEDULE_END_TIME,
        ] {
            form.set_value(id, "");
        }
        for id in [
            outputs::TEACHER_AVAILABILITY,
            outputs::CLASS_AVAILABILITY,
            outputs::SCHEDULE_RESULT,
        ] {
            form.lock().texts.insert(id.to_string(), String::new());
        }
        form
    }

    /// Declares the input if needed and sets its value.
    pub fn set_value(&self, id: &str, value: &str) {
        self.lock().values.insert(id.to_string(), value.to_string());
    }

    pub fn with_value(self, id: &str, value: &str) -> Self {
        self.set_value(id, value);
        self
    }

    /// Current text of an output element, if it exists.
    pub fn text(&self, id: &str) -> Option<String> {
        self.lock().texts.get(id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Elements> {
        self.elements.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FormFields for MemoryForm {
    fn value(&self, id: &str) -> Result<String> {
        self.lock()
            .values
            .get(id)
            .cloned()
            .ok_or_else(|| ErrorKind::MissingElement(id.to_string()).into())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<()> {
        match self.lock().texts.get_mut(id) {
            Some(slot) => {
                *slot = text.to_string();
                Ok(())
            }
            None => Err(ErrorKind::MissingElement(id.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_page_declares_every_element_empty() {
        let form = MemoryForm::scheduling_page();
        assert_eq!(form.value(fields::SCHEDULE_END_TIME).unwrap(), "");
        assert_eq!(form.text(outputs::SCHEDULE_RESULT).as_deref(), Some(""));
    }

    #[test]
    fn undeclared_elements_are_missing() {
        let form = MemoryForm::new().with_value(fields::DAY, "Monday");
        assert_eq!(form.value(fields::DAY).unwrap(), "Monday");
        assert!(matches!(
            form.value(fields::TEACHER_NAME).unwrap_err().kind(),
            ErrorKind::MissingElement(id) if id == "teacher-name"
        ));
        assert!(form.set_text(outputs::TEACHER_AVAILABILITY, "x").is_err());
        assert_eq!(form.text(outputs::TEACHER_AVAILABILITY), None);
    }

    #[test]
    fn set_text_overwrites() {
        let form = MemoryForm::scheduling_page();
        form.set_text(outputs::CLASS_AVAILABILITY, "first").unwrap();
        form.set_text(outputs::CLASS_AVAILABILITY, "second").unwrap();
        assert_eq!(form.text(outputs::CLASS_AVAILABILITY).as_deref(), Some("second"));
    }
}
