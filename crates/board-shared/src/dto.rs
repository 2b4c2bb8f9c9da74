//! Data Transfer Objects - raw request payloads before validation.

use serde::{Deserialize, Serialize};

/// Query string of the post list. Values stay raw so the pagination rules
/// can decide how to treat junk input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Submitted create/edit form. Missing fields deserialize as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFormBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl PostFormBody {
    pub fn new(title: &str, content: &str, author: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            content: Some(content.to_owned()),
            author: Some(author.to_owned()),
        }
    }
}
