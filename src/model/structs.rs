use serde_json::Value;

use crate::config::ResponsePolicy;
use crate::error::{ErrorKind, Result};

/// Server routes the bridge posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CheckTeacherAvailability,
    CheckClassAvailability,
    ScheduleClass,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::CheckTeacherAvailability => "/check_teacher_availability",
            Endpoint::CheckClassAvailability => "/check_class_availability",
            Endpoint::ScheduleClass => "/schedule_class",
        }
    }
}

/// What an availability check is about; owns the rendered sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Teacher,
    Classroom,
}

impl Subject {
    pub fn message(self, available: bool) -> &'static str {
        match (self, available) {
            (Subject::Teacher, true) => "Teacher is available",
            (Subject::Teacher, false) => "Teacher is not available",
            (Subject::Classroom, true) => "Classroom is available",
            (Subject::Classroom, false) => "Classroom is not available",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub available: bool,
}

impl AvailabilityResponse {
    pub fn from_value(body: &Value, policy: ResponsePolicy) -> Result<Self> {
        reject_null(body, "available")?;
        let field = body.get("available");
        let available = match policy {
            ResponsePolicy::Permissive => field.is_some_and(is_truthy),
            ResponsePolicy::Strict => field.and_then(Value::as_bool).ok_or_else(|| {
                ErrorKind::UnexpectedShape(format!("expected boolean `available`, got {body}"))
            })?,
        };
        Ok(Self { available })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResponse {
    pub result: String,
}

impl ScheduleResponse {
    pub fn from_value(body: &Value, policy: ResponsePolicy) -> Result<Self> {
        reject_null(body, "result")?;
        let field = body.get("result");
        let result = match policy {
            ResponsePolicy::Permissive => field.map_or_else(|| "undefined".to_string(), js_string),
            ResponsePolicy::Strict => field
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    ErrorKind::UnexpectedShape(format!("expected string `result`, got {body}"))
                })?,
        };
        Ok(Self { result })
    }
}

/// A `null` body has no properties to read under either policy.
fn reject_null(body: &Value, field: &str) -> Result<()> {
    if body.is_null() {
        return Err(ErrorKind::UnexpectedShape(format!(
            "cannot read properties of null (reading '{field}')"
        ))
        .into());
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text a browser shows after assigning `value` to `innerText`.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => js_number(f),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `Number.prototype.toString`: plain digits inside [1e-6, 1e21), otherwise
/// exponent form with an explicit sign.
fn js_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return format!("{f}");
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentences_match_the_page() {
        assert_eq!(Subject::Teacher.message(true), "Teacher is available");
        assert_eq!(Subject::Teacher.message(false), "Teacher is not available");
        assert_eq!(Subject::Classroom.message(true), "Classroom is available");
        assert_eq!(Subject::Classroom.message(false), "Classroom is not available");
    }

    #[test]
    fn permissive_availability_follows_truthiness() {
        let p = ResponsePolicy::Permissive;
        assert!(AvailabilityResponse::from_value(&json!({"available": true}), p).unwrap().available);
        assert!(AvailabilityResponse::from_value(&json!({"available": 1}), p).unwrap().available);
        assert!(AvailabilityResponse::from_value(&json!({"available": "yes"}), p).unwrap().available);
        assert!(!AvailabilityResponse::from_value(&json!({"available": false}), p).unwrap().available);
        assert!(!AvailabilityResponse::from_value(&json!({"available": 0}), p).unwrap().available);
        assert!(!AvailabilityResponse::from_value(&json!({"available": ""}), p).unwrap().available);
        assert!(!AvailabilityResponse::from_value(&json!({"available": null}), p).unwrap().available);
        assert!(!AvailabilityResponse::from_value(&json!({}), p).unwrap().available);
        assert!(!AvailabilityResponse::from_value(&json!([true]), p).unwrap().available);
    }

    #[test]
    fn strict_availability_requires_a_boolean() {
        let s = ResponsePolicy::Strict;
        assert!(!AvailabilityResponse::from_value(&json!({"available": false}), s).unwrap().available);
        for body in [json!({}), json!({"available": 1}), json!({"available": null}), json!("ok")] {
            let err = AvailabilityResponse::from_value(&body, s).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::UnexpectedShape(_)), "{body}");
        }
    }

    #[test]
    fn permissive_result_renders_like_inner_text() {
        let render = |body: Value| {
            ScheduleResponse::from_value(&body, ResponsePolicy::Permissive)
                .unwrap()
                .result
        };
        assert_eq!(render(json!({"result": "Class scheduled successfully"})), "Class scheduled successfully");
        assert_eq!(render(json!({})), "undefined");
        assert_eq!(render(json!({"result": null})), "");
        assert_eq!(render(json!({"result": 42})), "42");
        assert_eq!(render(json!({"result": 2.0})), "2");
        assert_eq!(render(json!({"result": false})), "false");
        assert_eq!(render(json!({"result": {"ok": true}})), "[object Object]");
        assert_eq!(render(json!({"result": ["a", null, 3]})), "a,,3");
    }

    #[test]
    fn null_body_fails_under_both_policies() {
        for policy in [ResponsePolicy::Permissive, ResponsePolicy::Strict] {
            let err = AvailabilityResponse::from_value(&Value::Null, policy).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::UnexpectedShape(_)));
            let err = ScheduleResponse::from_value(&Value::Null, policy).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::UnexpectedShape(_)));
        }
    }

    #[test]
    fn numbers_render_like_javascript() {
        let render = |body: Value| {
            ScheduleResponse::from_value(&body, ResponsePolicy::Permissive)
                .unwrap()
                .result
        };
        assert_eq!(render(json!({"result": 1.5e300})), "1.5e+300");
        assert_eq!(render(json!({"result": -2.5e21})), "-2.5e+21");
        assert_eq!(render(json!({"result": 1e21})), "1e+21");
        assert_eq!(render(json!({"result": 1e-7})), "1e-7");
        assert_eq!(render(json!({"result": 0.5})), "0.5");
        assert_eq!(render(json!({"result": 0.000001})), "0.000001");
        assert_eq!(render(json!({"result": 1e20})), "100000000000000000000");
        assert_eq!(render(json!({"result": -0.0})), "0");
    }

    #[test]
    fn strict_result_requires_a_string() {
        let s = ResponsePolicy::Strict;
        assert_eq!(
            ScheduleResponse::from_value(&json!({"result": "Conflict"}), s).unwrap().result,
            "Conflict"
        );
        assert!(ScheduleResponse::from_value(&json!({"result": 1}), s).is_err());
        assert!(ScheduleResponse::from_value(&json!({}), s).is_err());
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::CheckTeacherAvailability.path(), "/check_teacher_availability");
        assert_eq!(Endpoint::CheckClassAvailability.path(), "/check_class_availability");
        assert_eq!(Endpoint::ScheduleClass.path(), "/schedule_class");
    }
}
