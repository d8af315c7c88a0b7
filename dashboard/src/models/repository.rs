//! Repository models

use serde::{Deserialize, Serialize};

/// A source repository available for deployment
///
/// Snapshot returned by the backend; the whole collection is replaced on
/// every list fetch, never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository name, unique within the listing
    pub name: String,

    /// Owner-qualified name, e.g. "acme/widget"
    #[serde(default)]
    pub full_name: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Primary language reported by the code host
    #[serde(default)]
    pub language: Option<String>,

    /// Last update timestamp, RFC 3339
    pub updated_at: String,

    /// URL used by the backend to clone the repository
    pub clone_url: String,
}
