//! Item-request ("wanted item") wire types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Id, ItemDto};

/// Body of `POST /requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItemRequest {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequestDto {
    pub id: Id,
    pub description: String,
    pub items: Vec<ItemDto>,
    #[serde(with = "crate::time::seconds")]
    pub created: NaiveDateTime,
}
