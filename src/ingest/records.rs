//! Serde records for the human-values annotation files.
//!
//! Gold and prediction files share one layout: a JSON array of documents.
//!
//! ```json
//! [
//!   {
//!     "guid": 17,
//!     "article_human_values": [
//!       {"actor": 3, "l2_value": 5, "direction": 0, "l1_value": 12}
//!     ],
//!     "subevents_human_values": [
//!       {"subevent_id": 1, "subevent_human_values": [
//!         {"actor": 3, "l2_value": 5, "direction": 1, "l1_value": 40}
//!       ]}
//!     ]
//!   }
//! ]
//! ```
//!
//! Ids and values may be strings or numbers. Prediction files only need the
//! fields of the task they answer, so every value field is optional here
//! and checked at extraction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON scalar used as an id or value.
///
/// Displayed the way ids are compared: strings verbatim, numbers in their
/// JSON spelling, booleans as `True`/`False`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// JSON string
    Text(String),
    /// JSON number
    Number(serde_json::Number),
    /// JSON boolean
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(n.into())
    }
}

/// One document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub guid: Scalar,
    /// Article-level annotations (tasks 1a/1b)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub article_human_values: Vec<HumanValue>,
    /// Subevent-level annotations (tasks 2a/2b)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subevents_human_values: Vec<SubeventValues>,
}

impl Document {
    /// Create a document with no annotations.
    #[must_use]
    pub fn new(guid: impl Into<Scalar>) -> Self {
        Self {
            guid: guid.into(),
            article_human_values: Vec::new(),
            subevents_human_values: Vec::new(),
        }
    }

    /// Add an article-level annotation.
    #[must_use]
    pub fn with_article_value(mut self, value: HumanValue) -> Self {
        self.article_human_values.push(value);
        self
    }

    /// Add a subevent with its annotations.
    #[must_use]
    pub fn with_subevent(mut self, subevent: SubeventValues) -> Self {
        self.subevents_human_values.push(subevent);
        self
    }
}

/// Annotations attached to one subevent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubeventValues {
    /// Subevent identifier
    pub subevent_id: Scalar,
    /// Annotations for actors within this subevent
    #[serde(default)]
    pub subevent_human_values: Vec<HumanValue>,
}

impl SubeventValues {
    /// Create a subevent entry.
    #[must_use]
    pub fn new(subevent_id: impl Into<Scalar>, values: Vec<HumanValue>) -> Self {
        Self {
            subevent_id: subevent_id.into(),
            subevent_human_values: values,
        }
    }
}

/// A single human-value annotation for one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanValue {
    /// Actor the value is attributed to
    pub actor: Scalar,
    /// Level-2 value (`0`..`19`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l2_value: Option<Scalar>,
    /// Direction (`0` aligned, `1` contradictory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Scalar>,
    /// Level-1 value (`0`..`53`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l1_value: Option<Scalar>,
}

impl HumanValue {
    /// Level-2 annotation.
    #[must_use]
    pub fn level2(actor: impl Into<Scalar>, l2_value: impl Into<Scalar>) -> Self {
        Self {
            actor: actor.into(),
            l2_value: Some(l2_value.into()),
            direction: None,
            l1_value: None,
        }
    }

    /// Direction + level-1 annotation.
    #[must_use]
    pub fn directed(
        actor: impl Into<Scalar>,
        direction: impl Into<Scalar>,
        l1_value: impl Into<Scalar>,
    ) -> Self {
        Self {
            actor: actor.into(),
            l2_value: None,
            direction: Some(direction.into()),
            l1_value: Some(l1_value.into()),
        }
    }
}
