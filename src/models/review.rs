//! Review records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::clinic::id_to_string;
use super::lenient;

/// Raw review row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewRecord {
    pub id: Option<Value>,
    pub clinic_id: Option<Value>,
    #[serde(deserialize_with = "lenient::text")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient::float")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub body: Option<String>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Display-ready review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: String,
    pub clinic_id: String,
    pub author: String,
    pub rating: f64,
    pub title: String,
    pub body: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ReviewRecord {
    /// Fills in defaults; rows missing an id or clinic id are dropped.
    pub fn into_review(self) -> Option<Review> {
        Some(Review {
            id: self.id.as_ref().and_then(id_to_string)?,
            clinic_id: self.clinic_id.as_ref().and_then(id_to_string)?,
            author: self
                .author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            rating: self.rating.unwrap_or(0.0).clamp(0.0, 5.0),
            title: self.title.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            created_at: self.created_at,
        })
    }
}
