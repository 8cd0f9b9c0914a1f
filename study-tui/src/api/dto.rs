use serde::{Deserialize, Serialize};

use crate::api::GatewayError;
use crate::types::{Entry, EntryId};

/// Columns may come back as text or as JSON numbers depending on the table schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(i64),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// One row of the record table as returned by PostgREST.
#[derive(Debug, Deserialize)]
pub struct RecordRow {
    pub id: TextOrNumber,
    pub title: String,
    pub time: TextOrNumber,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<time::OffsetDateTime>,
}

impl TryFrom<RecordRow> for Entry {
    type Error = GatewayError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let id = row.id.into_text();
        let raw_time = row.time.into_text();
        let time = raw_time.trim().parse::<u32>().map_err(|_| {
            GatewayError::new(format!("record {id} has invalid time {raw_time:?}"))
        })?;
        Ok(Entry {
            id: EntryId::new(id),
            title: row.title,
            time,
            created_at: row.created_at,
        })
    }
}

/// Body for insert and update. `time` is stored as text.
#[derive(Debug, Serialize)]
pub struct RecordBody<'a> {
    pub title: &'a str,
    pub time: String,
}

/// PostgREST error payload; only the message is kept.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
