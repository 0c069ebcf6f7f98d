//! Shell table extraction
//!
//! A gun's `Shells` section maps ammunition names to their own flat
//! property tables:
//!
//! ```text
//! Shells = {
//!     AP = {Damage = 400, Name = "APCR"},
//!     HE = {Damage = 250, HEATFS = true},
//! }
//! ```

use regex::Regex;
use std::collections::HashMap;

use crate::block::extract_block;
use crate::scalar::extract_scalars;
use crate::value::TypedValue;

/// Extracts every `name = { ... }` child of a section body.
///
/// Children are scanned left to right; each child's body is carved out with
/// the block extractor and scalar-extracted on its own. An unterminated
/// child ends the scan, keeping the children found before it.
pub fn extract_named_children(section: &str) -> HashMap<String, HashMap<String, TypedValue>> {
    let header = Regex::new(r"(\w+)\s*=\s*\{").unwrap();
    let mut children = HashMap::new();
    let mut cursor = 0;

    while let Some(cap) = section.get(cursor..).and_then(|rest| header.captures(rest)) {
        let body_start = cursor + cap.get(0).map(|m| m.end()).unwrap_or(0);
        let block = extract_block(section, body_start);
        if !block.terminated {
            break;
        }
        children.insert(cap[1].to_string(), extract_scalars(block.body));
        cursor = block.close_offset + 1;
    }

    children
}
