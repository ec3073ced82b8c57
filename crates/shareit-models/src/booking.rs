//! Booking wire types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Id, ItemDto, UserDto, ValidationError};

/// Lifecycle status of a booking.
///
/// Every booking starts `Waiting`; the item's owner moves it to `Approved`
/// or `Rejected` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Waiting)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter accepted by the booking listings (`?state=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ValidationError::UnknownState(s.to_string())),
        }
    }
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(default)]
    pub item_id: Option<Id>,
    #[serde(default, with = "crate::time::option")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, with = "crate::time::option")]
    pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Id,
    #[serde(with = "crate::time::seconds")]
    pub start: NaiveDateTime,
    #[serde(with = "crate::time::seconds")]
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub item: ItemDto,
    pub booker: UserDto,
}

/// Booking summary embedded in an owner's item view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortBookingDto {
    pub id: Id,
    #[serde(with = "crate::time::seconds")]
    pub start: NaiveDateTime,
    #[serde(with = "crate::time::seconds")]
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub booker_id: Id,
}
