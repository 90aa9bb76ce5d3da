//! Document and Cluster Value Objects
//!
//! Minimal document model for the clustering algorithm seam. The registry
//! core never inspects these; algorithms consume documents and produce
//! clusters during request handling.

use serde::{Deserialize, Serialize};

/// Value Object: Input Document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Optional short title
    pub title: Option<String>,
    /// Main text content
    pub body: String,
}

impl Document {
    /// Create a document from body text
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    /// Attach a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title and body concatenated for analysis
    pub fn text(&self) -> String {
        match &self.title {
            Some(title) => format!("{title} {}", self.body),
            None => self.body.clone(),
        }
    }
}

/// Value Object: Output Cluster
///
/// A labeled group of input documents, referenced by index into the
/// clustered slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cluster {
    /// Human-readable cluster label
    pub label: String,
    /// Indices of member documents in the input slice
    pub documents: Vec<usize>,
}

impl Cluster {
    /// Create a cluster with a label and member indices
    pub fn new(label: impl Into<String>, documents: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            documents,
        }
    }

    /// Number of member documents
    pub fn size(&self) -> usize {
        self.documents.len()
    }
}
