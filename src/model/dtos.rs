use serde::Serialize;

/// Body of `POST /check_teacher_availability`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherAvailabilityQuery<'a> {
    pub teacher: &'a str,
    pub day: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
}

/// Body of `POST /check_class_availability`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassAvailabilityQuery<'a> {
    pub class_name: &'a str,
    pub day: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
}

/// Body of `POST /schedule_class`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRequest<'a> {
    pub class_name: &'a str,
    pub teacher: &'a str,
    pub day: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_query_serializes_in_wire_order() {
        let query = TeacherAvailabilityQuery {
            teacher: "Ms. Lee",
            day: "Monday",
            start_time: "09:00",
            end_time: "10:00",
        };
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"teacher":"Ms. Lee","day":"Monday","start_time":"09:00","end_time":"10:00"}"#
        );
    }

    #[test]
    fn class_query_uses_class_name_key() {
        let query = ClassAvailabilityQuery {
            class_name: "Room 12",
            day: "Tuesday",
            start_time: "",
            end_time: "",
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({"class_name": "Room 12", "day": "Tuesday", "start_time": "", "end_time": ""})
        );
    }

    #[test]
    fn schedule_request_carries_all_five_keys() {
        let request = ScheduleRequest {
            class_name: "Algebra",
            teacher: "Mr. Okafor",
            day: "Friday",
            start_time: "2:00",
            end_time: "3:00",
        };
        let value = serde_json::to_value(&request).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        for key in ["class_name", "teacher", "day", "start_time", "end_time"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
