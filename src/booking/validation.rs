use super::types::Space;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use strum_macros::Display;

static LOCAL_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static LOCAL_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

/// Earliest allowed start of a slot, minutes since midnight (09:00).
const OPENING_MINUTES: i32 = 9 * 60;
/// Latest allowed end of a slot, minutes since midnight (23:00).
const CLOSING_MINUTES: i32 = 23 * 60;
/// Slots snap to this granularity.
const SLOT_GRANULARITY_MIN: i32 = 10;

/// Field paths used by the frontend to highlight invalid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Participants,
    Date,
    StartTime,
    EndTime,
    Reason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self { Self { field, message } }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A candidate reservation, exactly as the reserve form submits it. Doubles
/// as the POST body once `validate` has accepted it.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRequest {
    pub participants: Vec<String>,
    pub space: Space,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
}

impl TimeSlotRequest {
    /// Checks every domain rule and reports all violations at once so the
    /// form can highlight each offending field. Availability conflicts are
    /// the server's concern, not checked here.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.participants.is_empty() {
            errors.push(FieldError::new(Field::Participants, "한 명 이상 선택해야 합니다."));
        } else if self.participants.iter().any(|id| id.trim().is_empty()) {
            errors.push(FieldError::new(Field::Participants, "한 글자 이상 입력해주세요."));
        }

        if !LOCAL_DATE_PATTERN.is_match(&self.date)
            || NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err()
        {
            errors.push(FieldError::new(Field::Date, "올바른 날짜 형태가 아닙니다."));
        }

        let start = check_time(&self.start_time, Field::StartTime, &mut errors);
        let end = check_time(&self.end_time, Field::EndTime, &mut errors);

        if let Some(start) = start {
            if start < OPENING_MINUTES {
                errors.push(FieldError::new(
                    Field::StartTime,
                    "시작 시간은 09:00 이상이어야 합니다.",
                ));
            }
        }
        if let Some(end) = end {
            if end > CLOSING_MINUTES {
                errors.push(FieldError::new(
                    Field::EndTime,
                    "종료 시간은 23:00 이하여야 합니다.",
                ));
            }
        }
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.push(FieldError::new(
                    Field::EndTime,
                    "종료 시간은 시작 시간보다 늦어야 합니다.",
                ));
            }
        }

        if self.reason.trim().is_empty() {
            errors.push(FieldError::new(Field::Reason, "사유를 입력해주세요."));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Parses `HH:MM` and enforces the 10-minute grid. Returns minutes since
/// midnight when the value is at least well-formed, so range checks can
/// still run on off-grid times.
fn check_time(raw: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<i32> {
    if !LOCAL_TIME_PATTERN.is_match(raw) {
        errors.push(FieldError::new(field, "올바른 시간 형태가 아닙니다."));
        return None;
    }
    let (hour, minute) = raw.split_once(':').unwrap();
    let hour: i32 = hour.parse().unwrap();
    let minute: i32 = minute.parse().unwrap();
    if minute % SLOT_GRANULARITY_MIN != 0 {
        errors.push(FieldError::new(field, "10분 단위로 입력해주세요."));
    }
    Some(hour * 60 + minute)
}
