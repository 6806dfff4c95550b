use serde_json::Value;

use crate::domain::{HomeworkRecord, HomeworkStatus, NotificationMessage, PollError};

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// Checks the top-level shape of an API payload and returns its homework list.
///
/// Records are not inspected here: an empty list is a valid "nothing new" answer.
pub fn validate_response(raw: &Value) -> Result<&[Value], PollError> {
    let Some(payload) = raw.as_object() else {
        return Err(PollError::Shape("response is not a JSON object"));
    };

    report_api_code(payload.get("code").and_then(Value::as_str));

    let homeworks = payload
        .get(HOMEWORKS_KEY)
        .ok_or(PollError::MissingKey(HOMEWORKS_KEY))?;
    if !payload.contains_key(CURRENT_DATE_KEY) {
        return Err(PollError::MissingKey(CURRENT_DATE_KEY));
    }

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(PollError::Shape("`homeworks` is not a list"))
}

fn report_api_code(code: Option<&str>) {
    match code {
        Some("UnknownError") => tracing::error!(
            target: "practicum",
            "API rejected the `from_date` parameter (code UnknownError)"
        ),
        Some("not_authenticated") => tracing::error!(
            target: "practicum",
            "request was made with an invalid or expired token (code not_authenticated)"
        ),
        _ => {}
    }
}

/// Builds the notification text for a single homework record.
pub fn extract_status(record: &Value) -> Result<NotificationMessage, PollError> {
    let name = record
        .get("homework_name")
        .or_else(|| record.get("name"))
        .and_then(Value::as_str)
        .ok_or(PollError::MissingField("homework_name"))?;
    let raw_status = record
        .get("status")
        .filter(|status| status.is_string())
        .ok_or(PollError::MissingField("status"))?;

    let status = match serde_json::from_value::<HomeworkStatus>(raw_status.clone()) {
        Ok(status) => status,
        Err(err) => {
            let raw_status = raw_status.as_str().unwrap_or_default();
            tracing::error!(
                target: "practicum",
                status = raw_status,
                homework = name,
                error = %err,
                "unexpected homework status in API response"
            );
            return Err(PollError::UnknownStatus(raw_status.to_string()));
        }
    };

    let record = HomeworkRecord {
        name: name.to_string(),
        status,
    };
    Ok(record.notification())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_homework_list_is_valid() {
        let raw = json!({"homeworks": [], "current_date": 100});
        let homeworks = validate_response(&raw).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn homework_list_is_returned_in_api_order() {
        let raw = json!({
            "homeworks": [
                {"homework_name": "proj2", "status": "reviewing"},
                {"homework_name": "proj1", "status": "approved"}
            ],
            "current_date": 100
        });
        let homeworks = validate_response(&raw).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "proj2");
    }

    #[test]
    fn homework_list_is_borrowed_from_payload() {
        let raw = json!({"homeworks": [{"homework_name": "proj1"}], "current_date": 100});
        let homeworks = validate_response(&raw).unwrap();
        let source = raw["homeworks"].as_array().unwrap();
        assert!(std::ptr::eq(homeworks.as_ptr(), source.as_ptr()));
    }

    #[test]
    fn non_object_payload_is_a_shape_error() {
        for raw in [json!([]), json!("homeworks"), json!(null), json!(42)] {
            assert!(matches!(validate_response(&raw), Err(PollError::Shape(_))));
        }
    }

    #[test]
    fn missing_keys_are_reported_by_name() {
        assert!(matches!(
            validate_response(&json!({"current_date": 100})),
            Err(PollError::MissingKey("homeworks"))
        ));
        assert!(matches!(
            validate_response(&json!({"homeworks": []})),
            Err(PollError::MissingKey("current_date"))
        ));
        assert!(matches!(
            validate_response(&json!({"code": "not_authenticated", "message": "denied"})),
            Err(PollError::MissingKey("homeworks"))
        ));
    }

    #[test]
    fn homeworks_must_be_a_list() {
        let raw = json!({"homeworks": {"homework_name": "proj1"}, "current_date": 100});
        assert!(matches!(validate_response(&raw), Err(PollError::Shape(_))));
    }

    #[test]
    fn known_statuses_produce_name_and_verdict() {
        for status in [
            HomeworkStatus::Approved,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
        ] {
            let record = json!({"homework_name": "proj1", "status": status.as_str()});
            let message = extract_status(&record).unwrap();
            assert!(message.to_string().contains("\"proj1\""));
            assert!(message.to_string().ends_with(status.verdict()));
        }
    }

    #[test]
    fn short_name_field_is_accepted() {
        let message = extract_status(&json!({"name": "proj1", "status": "approved"})).unwrap();
        assert_eq!(
            message.to_string(),
            format!("Status changed for \"proj1\". {}", HomeworkStatus::Approved.verdict())
        );
    }

    #[test]
    fn extraction_is_deterministic() {
        let record = json!({"homework_name": "proj1", "status": "reviewing"});
        assert_eq!(
            extract_status(&record).unwrap(),
            extract_status(&record).unwrap()
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let record = json!({"homework_name": "proj1", "status": "archived"});
        match extract_status(&record) {
            Err(PollError::UnknownStatus(status)) => assert_eq!(status, "archived"),
            other => panic!("expected unknown status, got {other:?}"),
        }
    }

    #[test]
    fn status_match_is_case_sensitive() {
        let record = json!({"homework_name": "proj1", "status": "Approved"});
        assert!(matches!(
            extract_status(&record),
            Err(PollError::UnknownStatus(status)) if status == "Approved"
        ));
    }

    #[test]
    fn missing_fields_are_reported() {
        assert!(matches!(
            extract_status(&json!({"status": "approved"})),
            Err(PollError::MissingField("homework_name"))
        ));
        assert!(matches!(
            extract_status(&json!({"homework_name": "proj1"})),
            Err(PollError::MissingField("status"))
        ));
        assert!(matches!(
            extract_status(&json!({"homework_name": "proj1", "status": 3})),
            Err(PollError::MissingField("status"))
        ));
        assert!(matches!(
            extract_status(&json!("proj1")),
            Err(PollError::MissingField("homework_name"))
        ));
    }
}
