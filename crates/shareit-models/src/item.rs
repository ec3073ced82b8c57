//! Item and comment wire types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Id, Patch, ShortBookingDto};

/// Body of `POST /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub request_id: Option<Id>,
}

/// Body of `PATCH /items/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub available: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub request_id: Patch<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<Id>,
}

/// Item with its booking window and comments, as shown on the item page.
///
/// `last_booking` and `next_booking` are only filled in for the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongItemDto {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<Id>,
    pub last_booking: Option<ShortBookingDto>,
    pub next_booking: Option<ShortBookingDto>,
    pub comments: Vec<CommentDto>,
}

/// Body of `POST /items/{id}/comment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Id,
    pub text: String,
    pub author_name: String,
    #[serde(with = "crate::time::millis")]
    pub created: NaiveDateTime,
}
