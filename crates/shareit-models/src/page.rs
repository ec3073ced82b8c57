//! Offset pagination and list query parameters.
//!
//! Clients send `from` (zero-based element offset) and `size` (page length).
//! The page index is `from / size`, so `from` is rounded down to a page
//! boundary: `from=15,size=10` returns the same rows as `from=10,size=10`.

use serde::{Deserialize, Serialize};

use crate::{BookingState, ValidationError};

pub const DEFAULT_FROM: i64 = 0;
pub const DEFAULT_SIZE: i64 = 10;

fn default_from() -> i64 {
    DEFAULT_FROM
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

fn default_state() -> String {
    "ALL".to_string()
}

/// A validated page window, ready to bind as `LIMIT ? OFFSET ?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: i64,
    pub size: i64,
}

impl Page {
    pub fn new(from: i64, size: i64) -> Result<Self, ValidationError> {
        if from < 0 || size < 1 {
            return Err(ValidationError::InvalidPage { from, size });
        }
        Ok(Self {
            index: from / size,
            size,
        })
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        self.index * self.size
    }
}

/// `?from&size`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_from")]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM,
            size: DEFAULT_SIZE,
        }
    }
}

impl PageQuery {
    pub fn page(&self) -> Result<Page, ValidationError> {
        Page::new(self.from, self.size)
    }
}

/// `?state&from&size` for the booking listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsQuery {
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default = "default_from")]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

impl BookingsQuery {
    pub fn state(&self) -> Result<BookingState, ValidationError> {
        self.state.parse()
    }

    pub fn page(&self) -> Result<Page, ValidationError> {
        Page::new(self.from, self.size)
    }
}

/// `?text&from&size` for item search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_from")]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

impl SearchQuery {
    pub fn page(&self) -> Result<Page, ValidationError> {
        Page::new(self.from, self.size)
    }
}

/// `?approved` on the booking decision endpoint. Absent means reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalQuery {
    #[serde(default)]
    pub approved: bool,
}
