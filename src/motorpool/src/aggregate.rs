//! Cross-file aggregation
//!
//! Documents merge in input order: a later file's component replaces an
//! earlier one of the same name in the same category. Counts are recomputed
//! from the merged maps afterwards so an overwrite is never counted twice.

use serde::Serialize;
use std::collections::HashMap;

use crate::document::{Component, Document};

/// Per-category component counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub guns: usize,
    pub turrets: usize,
    pub hulls: usize,
    pub total: usize,
}

/// The merged output for a set of input documents.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedResult {
    pub guns: HashMap<String, Component>,
    pub turrets: HashMap<String, Component>,
    pub hulls: HashMap<String, Component>,
    pub count: Counts,
    /// Source identifiers in the order they were merged.
    pub sources: Vec<String>,
    /// RFC 3339 generation timestamp.
    pub generated: String,
}

/// Merges parsed documents in order, last write wins per category.
pub fn aggregate(documents: Vec<Document>, sources: Vec<String>) -> CombinedResult {
    let mut guns = HashMap::new();
    let mut turrets = HashMap::new();
    let mut hulls = HashMap::new();

    for document in documents {
        guns.extend(document.guns);
        turrets.extend(document.turrets);
        hulls.extend(document.hulls);
    }

    let count = Counts {
        guns: guns.len(),
        turrets: turrets.len(),
        hulls: hulls.len(),
        total: guns.len() + turrets.len() + hulls.len(),
    };

    CombinedResult {
        guns,
        turrets,
        hulls,
        count,
        sources,
        generated: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    fn doc(text: &str) -> Document {
        parse_document(text).document
    }

    #[test]
    fn test_disjoint_names_sum_up() {
        let a = doc(r#"['GunA'] = {id = 1, metadata = {attributes = {}, config = {GunCaliber = 88}}}"#);
        let b = doc(r#"['HullB'] = {id = 2, metadata = {attributes = {}, config = {HullWeight = 5000}}}"#);
        let per_document = a.len() + b.len();

        let result = aggregate(vec![a, b], vec!["a.lua".into(), "b.lua".into()]);
        assert_eq!(result.count.guns, 1);
        assert_eq!(result.count.hulls, 1);
        assert_eq!(result.count.turrets, 0);
        assert_eq!(
            result.count.total,
            result.count.guns + result.count.turrets + result.count.hulls
        );
        assert_eq!(result.count.total, per_document);
        assert_eq!(result.sources, vec!["a.lua", "b.lua"]);
    }

    #[test]
    fn test_later_file_wins() {
        let a = doc(r#"['Turret_A'] = {id = 1, metadata = {attributes = {}, config = {TurretWeight = 700}}}"#);
        let b = doc(r#"['Turret_A'] = {id = 2, metadata = {attributes = {}, config = {TurretWeight = 950}}}"#);

        let result = aggregate(vec![a, b], vec!["old.lua".into(), "new.lua".into()]);
        assert_eq!(result.count.total, 1);
        assert_eq!(result.turrets["Turret_A"].id, "2");
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate(Vec::new(), Vec::new());
        assert_eq!(result.count.total, 0);
        assert!(result.sources.is_empty());
        assert!(!result.generated.is_empty());
    }

    #[test]
    fn test_result_envelope_shape() {
        let a = doc(r#"['GunA'] = {id = 1, metadata = {attributes = {}, config = {GunCaliber = 88}}}"#);
        let result = aggregate(vec![a], vec!["a.lua".into()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["count"]["guns"], 1);
        assert_eq!(json["count"]["total"], 1);
        assert_eq!(json["sources"][0], "a.lua");
        assert!(json["generated"].is_string());
    }
}
