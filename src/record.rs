use std::fmt;

use serde::{Deserialize, Serialize};

/// One CD entry of the inventory.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl Record {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}
