//! Canonical document record and upstream schema normalization.
//!
//! The upstream API spells the same notions differently depending on the
//! endpoint and the document family (`title` vs `titreTexte`, `contenu` vs
//! `texteHtml`, ...). Rather than duck-typing those names wherever a document
//! is consumed, this module maps the known alternates onto one canonical
//! record once, at the edge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title shown when the upstream document carries none.
const DEFAULT_TITLE: &str = "Sans titre";

/// A legal document in canonical form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    /// Nature of the text ("LOI", "DECRET", code name, ...).
    pub reference: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub legifrance_url: Option<String>,
}

/// Returns the first of `names` present in `value` as a non-empty string.
fn first_str(value: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| value.get(name).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

impl DocumentRecord {
    /// Normalizes one upstream document, wherever it came from.
    ///
    /// Alternate field names per attribute: `title`/`titreTexte`,
    /// `nature`/`typeTexte`/`code`, `summary`/`resumeTexte`,
    /// `content`/`contenu`/`texteHtml`, `lienLegifrance`.
    pub fn from_upstream(value: &Value) -> Self {
        DocumentRecord {
            id: first_str(value, &["id", "cid"]).unwrap_or_default(),
            title: first_str(value, &["title", "titreTexte"])
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            reference: first_str(value, &["nature", "typeTexte", "code"]).unwrap_or_default(),
            summary: first_str(value, &["summary", "resumeTexte"]),
            content: first_str(value, &["content", "contenu", "texteHtml"]),
            legifrance_url: first_str(value, &["lienLegifrance"]),
        }
    }
}
