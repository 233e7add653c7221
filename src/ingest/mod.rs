//! Annotation file loading and label extraction.
//!
//! Turns task JSON records into [`AnnotationSet`]s. The instance key type
//! decides which part of a document is read:
//!
//! | Key | Reads | Tasks |
//! |-----|-------|-------|
//! | [`ArticleInstance`] | `article_human_values` | task1a, task1b |
//! | [`SubeventInstance`] | `subevents_human_values[*].subevent_human_values` | task2a, task2b |
//!
//! and the [`LabelScheme`] decides how a single annotation becomes a label.

pub mod records;

pub use records::{Document, HumanValue, Scalar, SubeventValues};

use crate::types::{AnnotationSet, ArticleInstance, Label, SubeventInstance};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::path::Path;

/// How an annotation is rendered into a label string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelScheme {
    /// `"{l2_value}"`
    Level2,
    /// `"{direction}:{l1_value}"`
    DirectionLevel1,
}

impl LabelScheme {
    /// Render one annotation. `guid` only feeds the error message.
    pub fn label(self, value: &HumanValue, guid: &Scalar) -> Result<Label> {
        let require = |field: &Option<Scalar>, name: &str| -> Result<String> {
            field.as_ref().map(ToString::to_string).ok_or_else(|| {
                Error::parse(format!(
                    "document {}: annotation for actor {} is missing `{}`",
                    guid, value.actor, name
                ))
            })
        };

        match self {
            LabelScheme::Level2 => require(&value.l2_value, "l2_value"),
            LabelScheme::DirectionLevel1 => {
                let direction = require(&value.direction, "direction")?;
                let l1 = require(&value.l1_value, "l1_value")?;
                Ok(format!("{}:{}", direction, l1))
            }
        }
    }
}

/// An instance identifier that can be extracted from documents.
pub trait InstanceKey: Eq + Hash + Clone + std::fmt::Debug {
    /// Collect every annotation of this granularity under `scheme`.
    fn extract(documents: &[Document], scheme: LabelScheme) -> Result<AnnotationSet<Self>>;
}

impl InstanceKey for ArticleInstance {
    fn extract(documents: &[Document], scheme: LabelScheme) -> Result<AnnotationSet<Self>> {
        let mut out = AnnotationSet::new();
        for doc in documents {
            let guid = doc.guid.to_string();
            for hv in &doc.article_human_values {
                let label = scheme.label(hv, &doc.guid)?;
                out.insert(ArticleInstance::new(guid.clone(), hv.actor.to_string()), label);
            }
        }
        Ok(out)
    }
}

impl InstanceKey for SubeventInstance {
    fn extract(documents: &[Document], scheme: LabelScheme) -> Result<AnnotationSet<Self>> {
        let mut out = AnnotationSet::new();
        for doc in documents {
            let guid = doc.guid.to_string();
            for subevent in &doc.subevents_human_values {
                let sid = subevent.subevent_id.to_string();
                for hv in &subevent.subevent_human_values {
                    let label = scheme.label(hv, &doc.guid)?;
                    out.insert(
                        SubeventInstance::new(guid.clone(), sid.clone(), hv.actor.to_string()),
                        label,
                    );
                }
            }
        }
        Ok(out)
    }
}

/// Article-level annotations (tasks 1a/1b).
pub fn article_annotations(
    documents: &[Document],
    scheme: LabelScheme,
) -> Result<AnnotationSet<ArticleInstance>> {
    ArticleInstance::extract(documents, scheme)
}

/// Subevent-level annotations (tasks 2a/2b).
pub fn subevent_annotations(
    documents: &[Document],
    scheme: LabelScheme,
) -> Result<AnnotationSet<SubeventInstance>> {
    SubeventInstance::extract(documents, scheme)
}

/// Parse documents from a JSON string (a top-level array).
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    Ok(serde_json::from_str(json)?)
}

/// Load documents from a JSON file.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::dataset(format!("failed to read {}: {}", path.display(), e)))?;
    let documents: Vec<Document> = serde_json::from_str(&content)
        .map_err(|e| Error::parse(format!("{}: {}", path.display(), e)))?;
    log::debug!("loaded {} documents from {}", documents.len(), path.display());
    Ok(documents)
}
