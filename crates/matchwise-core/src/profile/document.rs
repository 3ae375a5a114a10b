//! The portable profile document (version 1).
//!
//! Only the raw log is persisted; the aggregate and independent set are
//! recomputed on load. Unknown fields outside the designated `ext`
//! areas fail with a schema error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::needs::NeedSet;

use super::answer::AnswerRecord;
use super::UserProfile;

/// The only supported profile document version.
pub const PROFILE_VERSION: u32 = 1;

/// Serialized form of a [`UserProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDocument {
    /// Document version; must equal [`PROFILE_VERSION`].
    pub version: u32,
    /// The raw answer log, in arrival order.
    pub answers: Vec<AnswerRecord>,
    /// Extension area: opaque caller payload, preserved verbatim.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub ext: serde_json::Map<String, serde_json::Value>,
}

/// What to do with a persisted answer that references a need absent
/// from the current needs set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownNeedPolicy {
    /// Fail the load with [`CoreError::UnknownNeed`].
    Reject,
    /// Drop the answer with a warning and keep loading.
    Skip,
}

impl UserProfile {
    /// Snapshot the profile into its portable document.
    pub fn to_document(&self) -> ProfileDocument {
        ProfileDocument {
            version: PROFILE_VERSION,
            answers: self.log().to_vec(),
            ext: Default::default(),
        }
    }

    /// Rebuild a profile from a document, recomputing all caches.
    ///
    /// # Errors
    /// - [`CoreError::Schema`] on an unsupported version
    /// - [`CoreError::UnknownNeed`] under [`UnknownNeedPolicy::Reject`]
    ///   when an answer references a need not in `needs`
    pub fn from_document(
        document: ProfileDocument,
        needs: &NeedSet,
        policy: UnknownNeedPolicy,
    ) -> CoreResult<Self> {
        if document.version != PROFILE_VERSION {
            return Err(CoreError::schema(
                "version",
                format!(
                    "unsupported version {} (expected {PROFILE_VERSION})",
                    document.version
                ),
            ));
        }

        let mut profile = Self::new();
        for record in document.answers {
            if !needs.contains(&record.need_id) {
                match policy {
                    UnknownNeedPolicy::Reject => {
                        return Err(CoreError::UnknownNeed(record.need_id));
                    }
                    UnknownNeedPolicy::Skip => {
                        warn!(need_id = %record.need_id, "dropping answer for unknown need");
                        continue;
                    }
                }
            }
            profile.push_record(record);
        }
        Ok(profile)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(&self.to_document())
            .map_err(|e| CoreError::schema("$", e.to_string()))
    }

    /// Deserialize from a JSON string and rebuild the caches.
    ///
    /// # Errors
    /// [`CoreError::Schema`] when the JSON does not match the document
    /// shape (including unknown fields outside the `ext` areas), plus
    /// the [`UserProfile::from_document`] errors.
    pub fn from_json(
        json: &str,
        needs: &NeedSet,
        policy: UnknownNeedPolicy,
    ) -> CoreResult<Self> {
        let document: ProfileDocument =
            serde_json::from_str(json).map_err(|e| CoreError::schema("$", e.to_string()))?;
        Self::from_document(document, needs, policy)
    }
}
