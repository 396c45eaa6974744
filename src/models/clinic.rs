//! Clinic records
//!
//! The backend returns loosely-typed rows where almost every field may be
//! missing. [`ClinicRecord`] mirrors that shape; [`Clinic`] is the fully
//! populated value the rest of the crate works with. Defaulting happens once,
//! in [`ClinicRecord::into_clinic`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Raw clinic row as stored in the backend or the fallback dataset.
///
/// Every field decodes leniently: a value of the wrong shape reads as absent
/// and is defaulted like a missing one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClinicRecord {
    /// Backends disagree on numeric vs. string ids
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub conditions: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::list")]
    pub features: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::float")]
    pub consultation_fee: Option<f64>,
    #[serde(deserialize_with = "lenient::float")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub review_count: Option<u32>,
    #[serde(deserialize_with = "lenient::flag")]
    pub telemedicine: Option<bool>,
}

/// Display-ready clinic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clinic {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub city: String,
    pub region: String,
    pub website: Option<String>,
    pub conditions: Vec<String>,
    pub features: Vec<String>,
    pub consultation_fee: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub telemedicine: bool,
}

impl ClinicRecord {
    /// Fills in defaults for every missing field.
    ///
    /// Returns `None` when the row has no usable id, since such a clinic
    /// cannot be looked up or invalidated.
    pub fn into_clinic(self) -> Option<Clinic> {
        let id = self.id.as_ref().and_then(id_to_string)?;
        let name = non_blank(self.name).unwrap_or_else(|| "Unnamed clinic".to_string());
        let slug = non_blank(self.slug).unwrap_or_else(|| slugify(&name));

        Some(Clinic {
            id,
            slug,
            name,
            description: self.description.unwrap_or_default(),
            city: non_blank(self.city).unwrap_or_else(|| "Online".to_string()),
            region: self.region.unwrap_or_default(),
            website: non_blank(self.website),
            conditions: self.conditions.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            consultation_fee: self.consultation_fee.filter(|fee| *fee >= 0.0),
            rating: self.rating.unwrap_or(0.0).clamp(0.0, 5.0),
            review_count: self.review_count.unwrap_or(0),
            telemedicine: self.telemedicine.unwrap_or(false),
        })
    }
}

/// Renders a JSON id as a plain string.
pub(crate) fn id_to_string(id: &Value) -> Option<String> {
    match id {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
