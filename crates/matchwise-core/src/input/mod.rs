//! External document shapes and their validated conversions.
//!
//! The core does not walk directories or open files; collaborators
//! hand it already-read documents in these shapes (typically JSON).
//! Every conversion validates ids, ranges, and cross-references, so
//! the immutable snapshots behind the engine can only hold good data.
//!
//! # Module Structure
//! - `docs`: serde document types mirroring the external interfaces
//! - `load`: document → snapshot conversions with full validation

mod docs;
mod load;

pub use self::docs::{
    BucketDoc, CatalogDoc, DerivedDoc, FeatureDoc, FeatureTableDoc, GroupDoc, NeedDoc, NeedsDoc,
    ObjectDoc, QuestionsDoc,
};
pub use self::load::{
    build_catalog, build_feature_table, build_needs, build_question_bank, parse_json,
};
