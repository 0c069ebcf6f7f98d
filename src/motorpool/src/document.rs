//! Component discovery and metadata assembly
//!
//! One parse pass scans the input for component headers of the form
//! `['<name>'] = {id = <digits>`. A component's body runs from just past
//! the id digits to the start of the next header (or the end of the text),
//! not to a balanced close brace; the sub-table extractors search only that
//! region.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

use crate::block::{extract_block, Block};
use crate::classify::{classify, has_indicators, Category};
use crate::diagnostics::Diagnostic;
use crate::scalar::extract_scalars;
use crate::shells::extract_named_children;
use crate::strip_wrapper;
use crate::value::TypedValue;

/// One named entry of the source table. Identity is the name it is stored
/// under; the id digits are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub id: String,
    pub metadata: Metadata,
}

/// The sections nested under a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub attributes: HashMap<String, TypedValue>,
    pub config: ConfigTable,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub crew: Vec<String>,
    #[serde(rename = "tdAttributes", skip_serializing_if = "HashMap::is_empty")]
    pub td_attributes: HashMap<String, TypedValue>,
    #[serde(rename = "ammoMass", skip_serializing_if = "Option::is_none")]
    pub ammo_mass: Option<f64>,
}

/// The `config` sub-table: flat typed values plus the reserved `Shells`
/// section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigTable {
    #[serde(flatten)]
    pub values: HashMap<String, TypedValue>,
    #[serde(rename = "Shells", skip_serializing_if = "HashMap::is_empty")]
    pub shells: HashMap<String, HashMap<String, TypedValue>>,
}

/// All components of one input text, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub guns: HashMap<String, Component>,
    pub turrets: HashMap<String, Component>,
    pub hulls: HashMap<String, Component>,
}

impl Document {
    /// Number of components across all three categories.
    pub fn len(&self) -> usize {
        self.guns.len() + self.turrets.len() + self.hulls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn category_mut(&mut self, category: Category) -> &mut HashMap<String, Component> {
        match category {
            Category::Gun => &mut self.guns,
            Category::Turret => &mut self.turrets,
            Category::Hull => &mut self.hulls,
        }
    }
}

/// A parsed document together with the events recorded while parsing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentParse {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses one input text into categorized components.
///
/// Never fails: malformed regions degrade to partial or empty sections and
/// the scan continues with the next component.
pub fn parse_document(text: &str) -> DocumentParse {
    let text = strip_wrapper(text);
    let header = Regex::new(r"\['([^']+)'\]\s*=\s*\{id\s*=\s*(\d+)").unwrap();
    let mut parse = DocumentParse::default();

    let headers: Vec<regex::Captures> = header.captures_iter(text).collect();
    for (i, cap) in headers.iter().enumerate() {
        let name = cap[1].to_string();
        let id = cap[2].to_string();

        let body_start = cap.get(0).map(|m| m.end()).unwrap_or(0);
        let body_end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        let body = &text[body_start..body_end];

        parse.diagnostics.push(Diagnostic::ComponentFound {
            name: name.clone(),
            id: id.clone(),
        });

        let metadata = extract_metadata(&name, body, &mut parse.diagnostics);

        let category = classify(&metadata.config);
        if !has_indicators(&metadata.config) {
            parse.diagnostics.push(Diagnostic::DefaultedCategory {
                component: name.clone(),
            });
        }

        parse
            .document
            .category_mut(category)
            .insert(name, Component { id, metadata });
    }

    parse
}

/// Extracts the known sections out of one component body.
fn extract_metadata(name: &str, body: &str, diagnostics: &mut Vec<Diagnostic>) -> Metadata {
    let mut metadata = Metadata::default();

    match find_section(body, "attributes") {
        Some(section) => {
            note_section(name, "attributes", &section, diagnostics);
            metadata.attributes = extract_scalars(section.body);
        }
        None => diagnostics.push(Diagnostic::SectionMissing {
            component: name.to_string(),
            section: "attributes".to_string(),
        }),
    }

    match find_section(body, "config") {
        Some(section) => {
            note_section(name, "config", &section, diagnostics);
            metadata.config = extract_config(name, section.body, diagnostics);
        }
        None => diagnostics.push(Diagnostic::SectionMissing {
            component: name.to_string(),
            section: "config".to_string(),
        }),
    }

    if let Some(section) = find_section(body, "crew") {
        note_section(name, "crew", &section, diagnostics);
        metadata.crew = quoted_strings(section.body);
    }

    if let Some(section) = find_section(body, "tdAttributes") {
        note_section(name, "tdAttributes", &section, diagnostics);
        metadata.td_attributes = extract_scalars(section.body);
    }

    metadata.ammo_mass = ammo_mass(body);

    metadata
}

/// Extracts the config sub-table: the `Shells` block goes through the
/// nested extractor and is spliced out of the text before the flat passes
/// run, so shell properties never leak into the surrounding keys.
fn extract_config(name: &str, body: &str, diagnostics: &mut Vec<Diagnostic>) -> ConfigTable {
    let mut config = ConfigTable::default();
    let shells_header = Regex::new(r"\bShells\s*=\s*\{").unwrap();

    match shells_header.find(body) {
        Some(m) => {
            let block = extract_block(body, m.end());
            if !block.terminated {
                diagnostics.push(Diagnostic::UnterminatedBlock {
                    component: name.to_string(),
                    section: "Shells".to_string(),
                });
            }
            config.shells = extract_named_children(block.body);

            let mut shell_names: Vec<&String> = config.shells.keys().collect();
            shell_names.sort();
            for shell in shell_names {
                diagnostics.push(Diagnostic::ShellFound {
                    component: name.to_string(),
                    shell: shell.clone(),
                });
            }

            let mut flat = String::with_capacity(body.len());
            flat.push_str(&body[..m.start()]);
            if block.terminated {
                flat.push_str(&body[block.close_offset + 1..]);
            }
            config.values = extract_scalars(&flat);
        }
        None => config.values = extract_scalars(body),
    }

    config
}

/// Locates a `name = { ... }` sub-table and carves out its block.
fn find_section<'a>(body: &'a str, name: &str) -> Option<Block<'a>> {
    let pattern = Regex::new(&format!(r"\b{}\s*=\s*\{{", regex::escape(name))).unwrap();
    let m = pattern.find(body)?;
    Some(extract_block(body, m.end()))
}

fn note_section(name: &str, section: &str, block: &Block, diagnostics: &mut Vec<Diagnostic>) {
    diagnostics.push(Diagnostic::SectionFound {
        component: name.to_string(),
        section: section.to_string(),
    });
    if !block.terminated {
        diagnostics.push(Diagnostic::UnterminatedBlock {
            component: name.to_string(),
            section: section.to_string(),
        });
    }
}

/// Collects the quoted strings of a `crew = {"a", "b"}` list in order.
fn quoted_strings(body: &str) -> Vec<String> {
    let pattern = Regex::new(r#""([^"]+)""#).unwrap();
    pattern
        .captures_iter(body)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Matches a bare `ammoMass = <number>` field anywhere in the body.
fn ammo_mass(body: &str) -> Option<f64> {
    let pattern = Regex::new(r"\bammoMass\s*=\s*(-?\d+(?:\.\d+)?)").unwrap();
    pattern.captures(body).and_then(|cap| cap[1].parse().ok())
}
