use super::layout::{self, BlockStyle, VisibleWindow, WeekDays};
use crate::booking::types::{Club, Reservation, ReservationStatus, Space};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fixed::types::I32F32;
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;

const WIDE_CONTAINER: i32 = 1000;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn pending(id: &str, space: Space, day: u32, start: NaiveTime, end: NaiveTime) -> Reservation {
    Reservation::test(
        id,
        Club::Wink,
        space,
        date(day),
        start,
        end,
        ReservationStatus::Pending,
        None,
        None,
    )
}

#[test]
fn test_block_vertical_geometry() {
    let reservations = vec![pending("r-1", Space::Table1, 2, time(10, 30), time(12, 0))];
    let blocks = layout::daily_layout(
        &reservations,
        date(2),
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].geometry.top, I32F32::from_num(90));
    assert_eq!(blocks[0].geometry.height, I32F32::from_num(90));
}

#[test]
fn test_early_return_shortens_block() {
    let reservations = vec![Reservation::test(
        "r-1",
        Club::Koss,
        Space::Table1,
        date(2),
        time(13, 0),
        time(15, 0),
        ReservationStatus::Returned,
        Some("pictures/r-1.jpg"),
        Some(NaiveDateTime::new(date(2), NaiveTime::from_hms_opt(14, 45, 30).unwrap())),
    )];
    let blocks = layout::daily_layout(
        &reservations,
        date(2),
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    // 13:00-14:45, not 13:00-15:00.
    assert_eq!(blocks[0].geometry.top, I32F32::from_num(240));
    assert_eq!(blocks[0].geometry.height, I32F32::from_num(105));
}

#[test]
fn test_status_styles() {
    let day = date(2);
    let mk = |id: &str, status, picture: Option<&str>| {
        Reservation::test(
            id,
            Club::Aim,
            Space::Table3,
            day,
            time(10, 0),
            time(11, 0),
            status,
            picture,
            None,
        )
    };
    let reservations = vec![
        mk("r-1", ReservationStatus::Pending, None),
        mk("r-2", ReservationStatus::InUse, None),
        mk("r-3", ReservationStatus::Returned, Some("pictures/r-3.png")),
        mk("r-4", ReservationStatus::Returned, None),
    ];
    let blocks = layout::daily_layout(
        &reservations,
        day,
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    let styles = blocks.iter().map(|b| b.style).collect_vec();
    assert_eq!(
        styles,
        vec![BlockStyle::Active, BlockStyle::Active, BlockStyle::Returned, BlockStyle::AutoReturned]
    );
}

#[test]
fn test_column_width_grows_to_fill() {
    // (1000 - 40) / 5 = 192, above the 80px floor.
    assert_eq!(
        layout::column_width(I32F32::from_num(1000), 5),
        I32F32::from_num(192)
    );
}

#[test]
fn test_column_width_floors_at_minimum() {
    // (300 - 40) / 5 = 52 would fall below the floor.
    assert_eq!(
        layout::column_width(I32F32::from_num(300), 5),
        I32F32::from_num(80)
    );
    // Unmeasured container degrades the same way.
    assert_eq!(
        layout::column_width(I32F32::from_num(0), 5),
        I32F32::from_num(80)
    );
    assert_eq!(
        layout::column_width(I32F32::from_num(1000), 0),
        I32F32::from_num(80)
    );
}

#[test]
fn test_daily_columns_and_insets() {
    let day = date(2);
    let reservations = vec![
        pending("r-1", Space::Table1, 2, time(10, 0), time(11, 0)),
        pending("r-2", Space::RobotField, 2, time(10, 0), time(11, 0)),
        pending("r-other-day", Space::Table1, 3, time(10, 0), time(11, 0)),
    ];
    let blocks = layout::daily_layout(
        &reservations,
        day,
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].geometry.column, 0);
    assert_eq!(blocks[0].geometry.left, I32F32::from_num(2));
    assert_eq!(blocks[0].geometry.width, I32F32::from_num(188));
    assert_eq!(blocks[1].geometry.column, 4);
    assert_eq!(blocks[1].geometry.left, I32F32::from_num(4 * 192 + 2));
}

#[test]
fn test_weekly_columns_follow_days() {
    let week = WeekDays::starting(date(2));
    assert_eq!(week.days()[6], date(8));
    let reservations = vec![
        pending("r-wed", Space::Table2, 4, time(9, 0), time(10, 0)),
        pending("r-other-space", Space::Table3, 4, time(9, 0), time(10, 0)),
        pending("r-next-week", Space::Table2, 9, time(9, 0), time(10, 0)),
    ];
    let blocks = layout::weekly_layout(
        &reservations,
        Space::Table2,
        &week,
        VisibleWindow::WEEKLY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    // Other spaces and out-of-week dates are not rendered.
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].id, "r-wed");
    assert_eq!(blocks[0].geometry.column, 2);
}

#[test]
fn test_window_dimensions() {
    assert_eq!(VisibleWindow::DAILY.height_px(), 840);
    assert_eq!(VisibleWindow::WEEKLY.height_px(), 900);
    assert_eq!(VisibleWindow::GUIDED.height_px(), 420);
    assert_eq!(VisibleWindow::DAILY.hour_marks().count(), 15);
}

#[test]
fn test_placeholder_blocks_stay_in_window() {
    let mut rng = rand::rng();
    let window = VisibleWindow::DAILY;
    let blocks = layout::placeholder_layout(5, window, I32F32::from_num(WIDE_CONTAINER), &mut rng);
    assert_eq!(blocks.len(), 5);
    for (column, block) in blocks.iter().enumerate() {
        assert_eq!(block.column, column);
        assert_eq!(block.height, I32F32::from_num(120));
        assert!(block.top >= I32F32::from_num(0));
        assert!(block.top + block.height <= I32F32::from_num(window.height_px()));
    }
}

#[test]
fn test_placeholder_randomness_comes_from_the_rng() {
    let window = VisibleWindow::DAILY;
    let from_seed = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        layout::placeholder_layout(5, window, I32F32::from_num(WIDE_CONTAINER), &mut rng)
    };
    // No hidden state: identical rngs give identical placeholders.
    assert_eq!(from_seed(7), from_seed(7));
}

#[test]
fn test_layout_is_idempotent() {
    let day = date(2);
    let reservations = vec![
        pending("r-1", Space::Table1, 2, time(10, 0), time(12, 30)),
        pending("r-2", Space::Table4, 2, time(18, 40), time(21, 0)),
    ];
    let first = layout::daily_layout(
        &reservations,
        day,
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    let second = layout::daily_layout(
        &reservations,
        day,
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    assert_eq!(first, second);

    // A refreshed list with identical contents keeps identical geometry.
    let refreshed = reservations.clone();
    let third = layout::daily_layout(
        &refreshed,
        day,
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    assert_eq!(first, third);
}

#[test]
fn test_overlapping_blocks_stack_in_place() {
    let day = date(2);
    let reservations = vec![
        pending("r-1", Space::Table1, 2, time(10, 0), time(12, 0)),
        pending("r-2", Space::Table1, 2, time(11, 0), time(13, 0)),
    ];
    let blocks = layout::daily_layout(
        &reservations,
        day,
        VisibleWindow::DAILY,
        I32F32::from_num(WIDE_CONTAINER),
    );
    // No lane assignment: overlapping blocks share the column offset.
    assert_eq!(blocks[0].geometry.left, blocks[1].geometry.left);
    assert_eq!(blocks[0].geometry.width, blocks[1].geometry.width);
}
