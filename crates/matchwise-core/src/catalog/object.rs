//! Catalog objects and the catalog snapshot.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{CoreError, CoreResult, IdKind};

use super::feature_table::FeatureTable;

/// One catalog object with its feature values resolved to a dense
/// array indexed by the feature table.
///
/// Absent features are `None` and evaluate UNKNOWN, never 0.
#[derive(Debug, Clone)]
pub struct CatalogObject {
    id: String,
    values: Vec<Option<f32>>,
}

impl CatalogObject {
    /// Stable object id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value at a feature index, `None` when absent.
    #[inline]
    pub fn value(&self, feature: u32) -> Option<f32> {
        self.values.get(feature as usize).copied().flatten()
    }

    /// Dense value array, indexed by feature index.
    #[inline]
    pub fn values(&self) -> &[Option<f32>] {
        &self.values
    }

    /// Number of features present on this object.
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// The immutable set of catalog objects for a session set.
#[derive(Debug, Clone)]
pub struct Catalog {
    objects: Vec<CatalogObject>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from raw `(id, feature map)` records.
    ///
    /// Validation:
    /// - every feature id must be declared in the table
    ///   ([`CoreError::UnknownFeature`])
    /// - every value must be finite and in [0,1]
    ///   ([`CoreError::ValueOutOfRange`])
    /// - object ids must be unique ([`CoreError::Duplicate`])
    ///
    /// Derived buckets are materialized here as the Łukasiewicz OR of
    /// the members present on the object (`min(1, Σv)`); when no member
    /// is present the derived feature stays absent. A record may also
    /// supply a derived value directly, which wins over materialization.
    pub fn from_records<I>(table: &FeatureTable, records: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (String, HashMap<String, f32>)>,
    {
        let mut objects = Vec::new();
        let mut index = HashMap::new();

        for (id, features) in records {
            if index.contains_key(&id) {
                return Err(CoreError::duplicate(IdKind::Object, &id));
            }

            let mut values = vec![None; table.len()];
            for (feature_id, value) in &features {
                let feature = table
                    .index_of(feature_id)
                    .ok_or_else(|| CoreError::UnknownFeature(feature_id.clone()))?;
                if !value.is_finite() || !(0.0..=1.0).contains(value) {
                    return Err(CoreError::out_of_range(
                        format!("{id}.features.{feature_id}"),
                        *value,
                    ));
                }
                values[feature as usize] = Some(*value);
            }

            for (derived, members) in table.derived_members() {
                if values[*derived as usize].is_some() {
                    continue;
                }
                let mut sum = 0.0f32;
                let mut present = false;
                for member in members {
                    if let Some(v) = values[*member as usize] {
                        sum += v;
                        present = true;
                    }
                }
                if present {
                    values[*derived as usize] = Some(sum.min(1.0));
                }
            }

            index.insert(id.clone(), objects.len());
            objects.push(CatalogObject { id, values });
        }

        if objects.is_empty() {
            warn!("catalog built with zero objects");
        }

        Ok(Self { objects, index })
    }

    /// Number of objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the catalog holds no objects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object by id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&CatalogObject> {
        self.index.get(id).map(|&i| &self.objects[i])
    }

    /// Position of an object in catalog order.
    #[inline]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Objects in load order.
    #[inline]
    pub fn objects(&self) -> &[CatalogObject] {
        &self.objects
    }

    /// Object ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|o| o.id())
    }
}
