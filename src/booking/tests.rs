use super::types::{Club, Reservation, ReservationStatus, Space};
use super::validation::{Field, TimeSlotRequest};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn valid_request() -> TimeSlotRequest {
    TimeSlotRequest {
        participants: vec![String::from("user-1")],
        space: Space::Table1,
        date: String::from("2025-06-02"),
        start_time: String::from("10:00"),
        end_time: String::from("12:00"),
        reason: String::from("팀 회의"),
    }
}

fn rejected_fields(request: &TimeSlotRequest) -> Vec<Field> {
    request.validate().unwrap_err().iter().map(|e| e.field).collect()
}

#[test]
fn test_valid_request_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_opening_hours_boundaries_accepted() {
    let mut request = valid_request();
    request.start_time = String::from("09:00");
    request.end_time = String::from("23:00");
    assert!(request.validate().is_ok());
}

#[test]
fn test_start_before_opening_rejected() {
    let mut request = valid_request();
    request.start_time = String::from("08:50");
    assert_eq!(rejected_fields(&request), vec![Field::StartTime]);
}

#[test]
fn test_end_after_closing_rejected() {
    let mut request = valid_request();
    request.end_time = String::from("23:10");
    assert_eq!(rejected_fields(&request), vec![Field::EndTime]);
}

#[test]
fn test_off_grid_minutes_rejected_per_field() {
    let mut request = valid_request();
    request.start_time = String::from("10:05");
    assert_eq!(rejected_fields(&request), vec![Field::StartTime]);

    let mut request = valid_request();
    request.end_time = String::from("11:15");
    assert_eq!(rejected_fields(&request), vec![Field::EndTime]);
}

#[test]
fn test_end_not_after_start_attaches_to_end_time() {
    // Both times individually satisfy grid and bounds.
    let mut request = valid_request();
    request.start_time = String::from("12:00");
    request.end_time = String::from("12:00");
    assert_eq!(rejected_fields(&request), vec![Field::EndTime]);

    request.start_time = String::from("13:00");
    request.end_time = String::from("12:00");
    assert_eq!(rejected_fields(&request), vec![Field::EndTime]);
}

#[test]
fn test_participants_required() {
    let mut request = valid_request();
    request.participants = vec![];
    assert_eq!(rejected_fields(&request), vec![Field::Participants]);

    request.participants = vec![String::from("  ")];
    assert_eq!(rejected_fields(&request), vec![Field::Participants]);

    request.participants = vec![String::from("user-1"), String::from("user-2")];
    assert!(request.validate().is_ok());
}

#[test]
fn test_malformed_dates_rejected() {
    for raw in ["2025-6-2", "02-06-2025", "2025-02-30", "yesterday"] {
        let mut request = valid_request();
        request.date = String::from(raw);
        assert_eq!(rejected_fields(&request), vec![Field::Date], "date {raw:?}");
    }
}

#[test]
fn test_malformed_times_rejected() {
    let mut request = valid_request();
    request.start_time = String::from("25:00");
    assert_eq!(rejected_fields(&request), vec![Field::StartTime]);

    let mut request = valid_request();
    request.end_time = String::from("9:00");
    assert_eq!(rejected_fields(&request), vec![Field::EndTime]);
}

#[test]
fn test_blank_reason_rejected() {
    let mut request = valid_request();
    request.reason = String::from("   ");
    assert_eq!(rejected_fields(&request), vec![Field::Reason]);
}

#[test]
fn test_all_violations_reported_at_once() {
    let request = TimeSlotRequest {
        participants: vec![],
        space: Space::RobotField,
        date: String::from("not-a-date"),
        start_time: String::from("10:05"),
        end_time: String::from("12:00"),
        reason: String::from(""),
    };
    let fields = rejected_fields(&request);
    assert_eq!(
        fields,
        vec![Field::Participants, Field::Date, Field::StartTime, Field::Reason]
    );
}

#[test]
fn test_field_paths_are_camel_case() {
    assert_eq!(Field::StartTime.to_string(), "startTime");
    assert_eq!(Field::EndTime.to_string(), "endTime");
    assert_eq!(Field::Participants.to_string(), "participants");
}

#[test]
fn test_early_return_shortens_occupancy() {
    let reservation = Reservation::test(
        "r-1",
        Club::Wink,
        Space::Table2,
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        ReservationStatus::Returned,
        Some("pictures/r-1.jpg"),
        Some(NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveTime::from_hms_opt(14, 45, 30).unwrap(),
        )),
    );
    // Seconds are truncated, 14:45:30 counts as 14:45.
    assert_eq!(reservation.effective_end_minutes(), 14 * 60 + 45);

    let pending = Reservation::test(
        "r-2",
        Club::Koss,
        Space::Table2,
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        ReservationStatus::Pending,
        None,
        None,
    );
    assert_eq!(pending.effective_end_minutes(), 15 * 60);
}
