use crate::booking::types::{Reservation, ReservationStatus, Space};
use chrono::{Days, NaiveDate};
use fixed::types::I32F32;
use rand::Rng;
use strum::EnumCount;

/// Width of the clock-label column on the left of the grid.
pub const TIME_AXIS_WIDTH_PX: i32 = 40;
/// Columns never shrink below this, they only grow to fill extra width.
pub const MIN_COLUMN_WIDTH_PX: i32 = 80;
/// Total horizontal inset per block so neighbouring columns don't touch.
const BLOCK_INSET_PX: i32 = 4;
/// Fixed duration of a loading placeholder block.
const PLACEHOLDER_MINUTES: i32 = 120;

/// The clock-time range rendered by the grid. One minute maps to one pixel,
/// so gridlines sit 60px apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    start_hour: i32,
    end_hour: i32,
}

impl VisibleWindow {
    /// Daily view over all spaces, 09:00-23:00.
    pub const DAILY: VisibleWindow = VisibleWindow { start_hour: 9, end_hour: 23 };
    /// Weekly per-space view, 09:00-24:00.
    pub const WEEKLY: VisibleWindow = VisibleWindow { start_hour: 9, end_hour: 24 };
    /// Shortened daily view while the onboarding guide is showing, 09:00-16:00.
    pub const GUIDED: VisibleWindow = VisibleWindow { start_hour: 9, end_hour: 16 };

    pub fn start_minutes(self) -> i32 { self.start_hour * 60 }
    pub fn end_minutes(self) -> i32 { self.end_hour * 60 }
    pub fn height_px(self) -> i32 { self.end_minutes() - self.start_minutes() }

    /// Full hours labelled on the time axis, window bounds included.
    pub fn hour_marks(self) -> impl Iterator<Item = i32> {
        self.start_hour..=self.end_hour
    }
}

/// Visual category of a rendered block. A returned reservation without a
/// proof photo was auto-returned when its slot expired and gets warning
/// styling; one with a photo renders muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Active,
    Returned,
    AutoReturned,
}

/// Absolute pixel geometry of one block, relative to the grid origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGeometry {
    pub column: usize,
    pub top: I32F32,
    pub height: I32F32,
    pub left: I32F32,
    pub width: I32F32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationBlock {
    pub id: String,
    pub style: BlockStyle,
    pub geometry: BlockGeometry,
}

/// `max(min, (container - axis) / count)`. Degrades to the minimum width
/// when the container is too narrow (or not measured yet, i.e. zero).
pub fn column_width(container_width: I32F32, column_count: usize) -> I32F32 {
    let min = I32F32::from_num(MIN_COLUMN_WIDTH_PX);
    if column_count == 0 {
        return min;
    }
    let axis = I32F32::from_num(TIME_AXIS_WIDTH_PX);
    let count = I32F32::from_num(column_count as i32);
    ((container_width - axis) / count).max(min)
}

/// Lays out one day across all spaces: one column per `Space` in enum order.
pub fn daily_layout(
    reservations: &[Reservation],
    date: NaiveDate,
    window: VisibleWindow,
    container_width: I32F32,
) -> Vec<ReservationBlock> {
    let col_width = column_width(container_width, Space::COUNT);
    reservations
        .iter()
        .filter(|r| r.date() == date)
        .map(|r| reservation_block(r, r.space().index(), window, col_width))
        .collect()
}

/// Seven consecutive calendar days backing the weekly view's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDays([NaiveDate; 7]);

impl WeekDays {
    pub fn starting(first_day: NaiveDate) -> Self {
        let mut days = [first_day; 7];
        for (i, day) in days.iter_mut().enumerate() {
            *day = first_day + Days::new(i as u64);
        }
        Self(days)
    }

    pub fn days(&self) -> &[NaiveDate; 7] { &self.0 }

    fn column_of(&self, date: NaiveDate) -> Option<usize> {
        self.0.iter().position(|d| *d == date)
    }
}

/// Lays out one space across a week: one column per day. Reservations whose
/// date falls outside the week are not rendered.
pub fn weekly_layout(
    reservations: &[Reservation],
    space: Space,
    week: &WeekDays,
    window: VisibleWindow,
    container_width: I32F32,
) -> Vec<ReservationBlock> {
    let col_width = column_width(container_width, week.0.len());
    reservations
        .iter()
        .filter(|r| r.space() == space)
        .filter_map(|r| {
            week.column_of(r.date())
                .map(|column| reservation_block(r, column, window, col_width))
        })
        .collect()
}

/// Cosmetic geometry for the loading shimmer: one 120-minute block per
/// column at a fresh random offset. Intentionally re-randomized on every
/// call, there is nothing to cache.
pub fn placeholder_layout(
    column_count: usize,
    window: VisibleWindow,
    container_width: I32F32,
    rng: &mut impl Rng,
) -> Vec<BlockGeometry> {
    let col_width = column_width(container_width, column_count);
    let latest_start = window.end_minutes() - PLACEHOLDER_MINUTES;
    (0..column_count)
        .map(|column| {
            let start = rng.random_range(window.start_minutes()..=latest_start.max(window.start_minutes()));
            block_geometry(column, start, start + PLACEHOLDER_MINUTES, window, col_width)
        })
        .collect()
}

fn reservation_block(
    reservation: &Reservation,
    column: usize,
    window: VisibleWindow,
    col_width: I32F32,
) -> ReservationBlock {
    let style = match (reservation.status(), reservation.return_picture()) {
        (ReservationStatus::Returned, Some(_)) => BlockStyle::Returned,
        (ReservationStatus::Returned, None) => BlockStyle::AutoReturned,
        _ => BlockStyle::Active,
    };
    ReservationBlock {
        id: reservation.id().to_owned(),
        style,
        geometry: block_geometry(
            column,
            reservation.start_minutes(),
            reservation.effective_end_minutes(),
            window,
            col_width,
        ),
    }
}

// Blocks starting before or ending after the window are deliberately not
// clamped; they overflow the grid exactly like the web frontend lets them.
// Overlapping blocks in one column stack at the same horizontal offset.
fn block_geometry(
    column: usize,
    start_minutes: i32,
    end_minutes: i32,
    window: VisibleWindow,
    col_width: I32F32,
) -> BlockGeometry {
    BlockGeometry {
        column,
        top: I32F32::from_num(start_minutes - window.start_minutes()),
        height: I32F32::from_num(end_minutes - start_minutes),
        left: I32F32::from_num(column as i32) * col_width + I32F32::from_num(BLOCK_INSET_PX / 2),
        width: col_width - I32F32::from_num(BLOCK_INSET_PX),
    }
}
