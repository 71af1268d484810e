use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use strum_macros::{Display, EnumCount, EnumIter};

/// Lifecycle of a reservation. The server owns all transitions
/// (`Pending` → `InUse` → `Returned`), this client only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    InUse,
    Returned,
}

/// The fixed set of bookable spaces. Enum order is the column order of the
/// daily timetable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    serde::Serialize, serde::Deserialize, Display, EnumIter, EnumCount,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Space {
    Table1,
    Table2,
    Table3,
    Table4,
    RobotField,
}

impl Space {
    /// Column index within the daily timetable.
    pub fn index(self) -> usize { self as usize }

    /// User-facing label, as shown by the web frontend.
    pub fn label(self) -> &'static str {
        match self {
            Space::Table1 => "테이블1",
            Space::Table2 => "테이블2",
            Space::Table3 => "테이블3",
            Space::Table4 => "테이블4",
            Space::RobotField => "경기장",
        }
    }
}

/// Clubs sharing the rooms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    serde::Serialize, serde::Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Club {
    Wink,
    Foscar,
    Koss,
    DoUm,
    Kobot,
    DAlpha,
    Aim,
    Kpsc,
}

impl Club {
    pub fn label(self) -> &'static str {
        match self {
            Club::Wink => "WINK",
            Club::Foscar => "FOSCAR",
            Club::Koss => "KOSS",
            Club::DoUm => "Do-Um",
            Club::Kobot => "KOBOT",
            Club::DAlpha => "D-Alpha",
            Club::Aim => "AIM",
            Club::Kpsc => "KPSC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserDto {
    id: String,
    club: Club,
    name: String,
}

impl UserDto {
    pub fn id(&self) -> &str { self.id.as_str() }
    pub fn club(&self) -> Club { self.club }
    pub fn name(&self) -> &str { self.name.as_str() }

    #[cfg(test)]
    pub fn test(id: &str, club: Club, name: &str) -> Self {
        Self { id: id.into(), club, name: name.into() }
    }
}

/// A reservation as reported by the backend. Read-only here.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: String,
    participants: Vec<UserDto>,
    club: Club,
    space: Space,
    date: NaiveDate,
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
    reason: String,
    status: ReservationStatus,
    return_picture: Option<String>,
    returned_at: Option<NaiveDateTime>,
}

impl Reservation {
    pub fn id(&self) -> &str { self.id.as_str() }
    pub fn participants(&self) -> &[UserDto] { &self.participants }
    pub fn club(&self) -> Club { self.club }
    pub fn space(&self) -> Space { self.space }
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn start_time(&self) -> NaiveTime { self.start_time }
    pub fn end_time(&self) -> NaiveTime { self.end_time }
    pub fn reason(&self) -> &str { self.reason.as_str() }
    pub fn status(&self) -> ReservationStatus { self.status }
    pub fn return_picture(&self) -> Option<&str> { self.return_picture.as_deref() }
    pub fn returned_at(&self) -> Option<NaiveDateTime> { self.returned_at }

    pub fn is_pending(&self) -> bool { self.status == ReservationStatus::Pending }

    /// Start of occupancy in minutes since midnight.
    pub fn start_minutes(&self) -> i32 { minutes_of_day(self.start_time) }

    /// End of occupancy in minutes since midnight. An early return shortens
    /// the occupancy to the time of day of `returned_at`, truncated to the
    /// minute.
    pub fn effective_end_minutes(&self) -> i32 {
        match (self.status, self.returned_at) {
            (ReservationStatus::Returned, Some(at)) => minutes_of_day(at.time()),
            _ => minutes_of_day(self.end_time),
        }
    }

    #[cfg(test)]
    #[allow(clippy::too_many_arguments)]
    pub fn test(
        id: &str,
        club: Club,
        space: Space,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        status: ReservationStatus,
        return_picture: Option<&str>,
        returned_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: id.into(),
            participants: vec![UserDto::test("u-0", club, "tester")],
            club,
            space,
            date,
            start_time,
            end_time,
            reason: "test".into(),
            status,
            return_picture: return_picture.map(str::to_owned),
            returned_at,
        }
    }
}

fn minutes_of_day(t: NaiveTime) -> i32 {
    use chrono::Timelike;
    (t.hour() * 60 + t.minute()) as i32
}

/// Serde adapter for the backend's `HH:MM` time-of-day strings. Accepts an
/// optional seconds part on the way in since some endpoints echo it back.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
