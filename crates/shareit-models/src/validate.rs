//! Boundary validation.
//!
//! Each function checks one inbound body and, for creation bodies, returns the
//! validated values with the optional wrappers removed. The gateway runs these
//! before forwarding; the server runs them again before any domain logic.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    Id, ItemPatch, NewBooking, NewComment, NewItem, NewItemRequest, NewUser, Patch, UserPatch,
    ValidationError,
};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<Id>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDraft {
    pub item_id: Id,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

fn not_blank(field: &'static str, value: Option<&String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing(field)),
        Some(v) if v.trim().is_empty() => Err(ValidationError::Blank(field)),
        Some(v) => Ok(v.clone()),
    }
}

fn patched_not_blank(field: &'static str, value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Absent => Ok(()),
        Patch::Null => Err(ValidationError::NotNullable(field)),
        Patch::Value(v) if v.trim().is_empty() => Err(ValidationError::Blank(field)),
        Patch::Value(_) => Ok(()),
    }
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(value.to_string()))
    }
}

pub fn new_user(body: &NewUser) -> Result<UserDraft, ValidationError> {
    let name = not_blank("name", body.name.as_ref())?;
    let address = body
        .email
        .clone()
        .ok_or(ValidationError::Missing("email"))?;
    email(&address)?;
    Ok(UserDraft {
        name,
        email: address,
    })
}

pub fn user_patch(body: &UserPatch) -> Result<(), ValidationError> {
    patched_not_blank("name", &body.name)?;
    match &body.email {
        Patch::Absent => Ok(()),
        Patch::Null => Err(ValidationError::NotNullable("email")),
        Patch::Value(v) => email(v),
    }
}

pub fn new_item(body: &NewItem) -> Result<ItemDraft, ValidationError> {
    Ok(ItemDraft {
        name: not_blank("name", body.name.as_ref())?,
        description: not_blank("description", body.description.as_ref())?,
        available: body.available.ok_or(ValidationError::Missing("available"))?,
        request_id: body.request_id,
    })
}

pub fn item_patch(body: &ItemPatch) -> Result<(), ValidationError> {
    patched_not_blank("name", &body.name)?;
    patched_not_blank("description", &body.description)?;
    if body.available.is_null() {
        return Err(ValidationError::NotNullable("available"));
    }
    Ok(())
}

/// Presence of every booking field; the time window is checked separately.
pub fn new_booking(body: &NewBooking) -> Result<BookingDraft, ValidationError> {
    Ok(BookingDraft {
        item_id: body.item_id.ok_or(ValidationError::Missing("itemId"))?,
        start: body.start.ok_or(ValidationError::Missing("start"))?,
        end: body.end.ok_or(ValidationError::Missing("end"))?,
    })
}

/// Rental window rules: both ends not in the past and `start < end`.
pub fn booking_window(
    start: NaiveDateTime,
    end: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), ValidationError> {
    if end < now {
        return Err(ValidationError::InvalidRange("end is in the past"));
    }
    if start < now {
        return Err(ValidationError::InvalidRange("start is in the past"));
    }
    if start == end {
        return Err(ValidationError::InvalidRange("start equals end"));
    }
    if end < start {
        return Err(ValidationError::InvalidRange("end is before start"));
    }
    Ok(())
}

pub fn new_comment(body: &NewComment) -> Result<String, ValidationError> {
    not_blank("text", body.text.as_ref())
}

pub fn new_item_request(body: &NewItemRequest) -> Result<String, ValidationError> {
    not_blank("description", body.description.as_ref())
}
