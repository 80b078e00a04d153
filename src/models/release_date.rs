use super::{unix_to_utc, Model};
use crate::endpoint::ModelKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Precision of a release date, encoded on the wire as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ReleaseDateCategory {
    /// YYYYMMMMDD
    YearMonthDay,
    /// YYYYMMMM
    YearMonth,
    /// YYYY
    Year,
    YearQ1,
    YearQ2,
    YearQ3,
    YearQ4,
    /// To be determined
    Tbd,
    /// A code this client does not know about yet
    Unknown(i32),
}

impl From<i32> for ReleaseDateCategory {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::YearMonthDay,
            1 => Self::YearMonth,
            2 => Self::Year,
            3 => Self::YearQ1,
            4 => Self::YearQ2,
            5 => Self::YearQ3,
            6 => Self::YearQ4,
            7 => Self::Tbd,
            other => Self::Unknown(other),
        }
    }
}

impl From<ReleaseDateCategory> for i32 {
    fn from(category: ReleaseDateCategory) -> Self {
        match category {
            ReleaseDateCategory::YearMonthDay => 0,
            ReleaseDateCategory::YearMonth => 1,
            ReleaseDateCategory::Year => 2,
            ReleaseDateCategory::YearQ1 => 3,
            ReleaseDateCategory::YearQ2 => 4,
            ReleaseDateCategory::YearQ3 => 5,
            ReleaseDateCategory::YearQ4 => 6,
            ReleaseDateCategory::Tbd => 7,
            ReleaseDateCategory::Unknown(code) => code,
        }
    }
}

/// A release of a game on a platform
///
/// See <https://api-docs.igdb.com/#release-date>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    pub id: u64,
    /// Format category of the date
    pub category: Option<ReleaseDateCategory>,
    /// Date of the release (unix seconds)
    pub date: Option<i64>,
    /// Platform reference id
    pub platform: Option<u64>,
}

impl ReleaseDate {
    /// Release date as a UTC timestamp
    pub fn date_utc(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.date)
    }
}

impl Model for ReleaseDate {
    const KIND: ModelKind = ModelKind::ReleaseDate;
}
