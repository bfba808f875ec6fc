use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ValidationError, validation};

/// Which policy page a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Terms,
    Privacy,
}

impl DocumentKind {
    pub fn path(&self) -> &'static str {
        match self {
            DocumentKind::Terms => "/api/terms",
            DocumentKind::Privacy => "/api/privacy-policy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Terms => "Terms & Conditions",
            DocumentKind::Privacy => "Privacy Policy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub last_modified_by: String,
    #[serde(default)]
    pub changes_summary: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// The editable fields of a policy document. Saving sends all of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyForm {
    pub title: String,
    pub content: String,
    pub version: String,
    pub effective_date: String,
    pub last_modified_by: String,
    pub changes_summary: String,
    pub is_active: bool,
}

impl PolicyForm {
    pub fn from_document(document: &PolicyDocument) -> Self {
        Self {
            title: document.title.clone(),
            content: document.content.clone(),
            version: document.version.clone(),
            effective_date: document.effective_date.clone(),
            last_modified_by: document.last_modified_by.clone(),
            changes_summary: document.changes_summary.clone(),
            is_active: document.is_active,
        }
    }

    /// A blank form for a kind that has no document yet.
    pub fn blank(kind: DocumentKind) -> Self {
        Self {
            title: kind.title().to_string(),
            version: "1.0".to_string(),
            is_active: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Title", &self.title)?;
        validation::required("Content", &self.content)?;
        validation::required("Version", &self.version)?;
        Ok(())
    }
}
