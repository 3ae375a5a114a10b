//! Validated conversions from documents to immutable snapshots.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::{Catalog, FeatureDef, FeatureKind, FeatureTable};
use crate::error::{CoreError, CoreResult};
use crate::needs::{Need, NeedSet, QuestionBank};

use super::docs::{CatalogDoc, FeatureTableDoc, NeedsDoc, QuestionsDoc};

/// Deserialize a JSON document, mapping shape mismatches to
/// [`CoreError::Schema`] with `path` naming the document.
pub fn parse_json<T: DeserializeOwned>(json: &str, path: &str) -> CoreResult<T> {
    serde_json::from_str(json).map_err(|e| CoreError::schema(path, e.to_string()))
}

/// Build the feature table from its document.
///
/// Declaration order is: plain features, then per group its member
/// buckets followed by its derived buckets.
///
/// # Errors
/// - [`CoreError::Schema`] when a derived bucket names a member
///   outside its own group
/// - [`CoreError::Duplicate`] on feature-id collisions
pub fn build_feature_table(doc: &FeatureTableDoc) -> CoreResult<FeatureTable> {
    let mut defs: Vec<FeatureDef> = doc.features.iter().map(|f| FeatureDef::continuous(&f.id)).collect();

    for group in &doc.groups {
        let member_ids: HashSet<&str> = group.values.iter().map(|b| b.id.as_str()).collect();

        for bucket in &group.values {
            defs.push(FeatureDef {
                id: bucket.id.clone(),
                kind: FeatureKind::Bucket {
                    group: group.id.clone(),
                    min: bucket.min,
                    max: bucket.max,
                },
            });
        }

        for derived in &group.derived {
            for member in &derived.members {
                if !member_ids.contains(member.as_str()) {
                    return Err(CoreError::schema(
                        format!("groups.{}.derived.{}", group.id, derived.id),
                        format!("member `{member}` is not a bucket of this group"),
                    ));
                }
            }
            defs.push(FeatureDef {
                id: derived.id.clone(),
                kind: FeatureKind::Derived {
                    group: group.id.clone(),
                    members: derived.members.clone(),
                },
            });
        }
    }

    let table = FeatureTable::new(defs)?;
    debug!(features = table.len(), groups = doc.groups.len(), "feature table built");
    Ok(table)
}

/// Build the catalog from its document, validating every value against
/// the feature table.
pub fn build_catalog(doc: CatalogDoc, table: &FeatureTable) -> CoreResult<Catalog> {
    let catalog = Catalog::from_records(
        table,
        doc.objects.into_iter().map(|o| (o.id, o.features)),
    )?;
    debug!(objects = catalog.len(), "catalog built");
    Ok(catalog)
}

/// Parse and compile the needs list against the feature table.
pub fn build_needs(doc: &NeedsDoc, table: &FeatureTable) -> CoreResult<NeedSet> {
    let mut needs = Vec::with_capacity(doc.needs.len());
    for need in &doc.needs {
        needs.push(Need::compile(
            &need.id,
            &need.name,
            &need.block,
            &need.formula,
            need.weight,
            table,
        )?);
    }
    let set = NeedSet::new(needs)?;
    debug!(needs = set.len(), "needs compiled");
    Ok(set)
}

/// Assemble the question bank from per-need documents.
///
/// # Errors
/// - [`CoreError::UnknownNeed`] when a document names an undeclared
///   need
/// - [`CoreError::ValueOutOfRange`] when a question weight leaves
///   [0,1]
/// - [`CoreError::Duplicate`] on question-id collisions
pub fn build_question_bank(docs: Vec<QuestionsDoc>, needs: &NeedSet) -> CoreResult<QuestionBank> {
    for doc in &docs {
        for question in &doc.questions {
            if !question.weight.is_finite() || !(0.0..=1.0).contains(&question.weight) {
                return Err(CoreError::out_of_range(
                    format!("{}.questions.{}.weight", doc.need_id, question.id),
                    question.weight,
                ));
            }
        }
    }
    QuestionBank::new(docs.into_iter().map(|d| (d.need_id, d.questions)), needs)
}
