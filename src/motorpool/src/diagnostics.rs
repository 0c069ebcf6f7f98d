//! Structured parse events
//!
//! The extraction steps report what they found (or failed to find) as
//! records instead of writing to a process-wide stream. None of these are
//! errors: parsing always runs to completion and callers decide what to
//! surface.

use serde::Serialize;
use std::fmt;

/// One recognized step or notice produced while parsing a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A component header was matched.
    ComponentFound { name: String, id: String },
    /// A named sub-table was located inside a component body.
    SectionFound { component: String, section: String },
    /// An expected sub-table was absent; the component keeps an empty one.
    SectionMissing { component: String, section: String },
    /// A sub-table ran past the end of its search region; its partial body
    /// was still extracted.
    UnterminatedBlock { component: String, section: String },
    /// A shell entry was found under a component's config.
    ShellFound { component: String, shell: String },
    /// No indicator keys matched and the component fell back to the turret
    /// category.
    DefaultedCategory { component: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ComponentFound { name, id } => {
                write!(f, "found component {} (id {})", name, id)
            }
            Diagnostic::SectionFound { component, section } => {
                write!(f, "{}: found {}", component, section)
            }
            Diagnostic::SectionMissing { component, section } => {
                write!(f, "{}: no {} section", component, section)
            }
            Diagnostic::UnterminatedBlock { component, section } => {
                write!(f, "{}: unterminated {} block", component, section)
            }
            Diagnostic::ShellFound { component, shell } => {
                write!(f, "{}: shell type {}", component, shell)
            }
            Diagnostic::DefaultedCategory { component } => {
                write!(f, "{}: no category indicators, defaulting to turret", component)
            }
        }
    }
}
