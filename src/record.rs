//! Index record model: a documented symbol's label and its link targets.

use crate::types::{CompactString, RecordId};
use serde::{Deserialize, Serialize};

/// One documentation link belonging to an index record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Reference to a documentation fragment: page path plus optional `#anchor`.
    pub locator: CompactString,

    /// Numeric flag emitted by the generator to distinguish page-level anchors
    /// from standalone pages. Opaque pass-through, never branched on.
    pub kind: u32,

    /// Human-readable qualifier (enclosing namespace or class). May be empty.
    pub context: CompactString,
}

impl Target {
    pub fn new(locator: &str, kind: u32, context: &str) -> Self {
        Self {
            locator: locator.into(),
            kind,
            context: context.into(),
        }
    }

    /// Page part of the locator, without the anchor.
    pub fn page(&self) -> &str {
        self.locator
            .split_once('#')
            .map_or(&*self.locator, |(page, _)| page)
    }

    /// In-page anchor, if the locator carries one.
    pub fn anchor(&self) -> Option<&str> {
        self.locator.split_once('#').map(|(_, anchor)| anchor)
    }
}

/// One documented-symbol entry in the search index.
///
/// Produced wholesale by the documentation generator; the running system never
/// mutates records after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub id: RecordId,
    /// Display text shown in search results. Entities are decoded at load.
    pub label: CompactString,
    /// Ordered link targets, at least one entry.
    pub targets: Vec<Target>,
}

impl IndexRecord {
    pub fn new(id: RecordId, label: &str, targets: Vec<Target>) -> Self {
        Self {
            id,
            label: label.into(),
            targets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_page_and_anchor() {
        let t = Target::new("../structns_1_1read.html#a85ea", 1, "ns::read");
        assert_eq!(t.page(), "../structns_1_1read.html");
        assert_eq!(t.anchor(), Some("a85ea"));
    }

    #[test]
    fn test_target_without_anchor() {
        let t = Target::new("../classns_1_1parser.html", 1, "ns::parser");
        assert_eq!(t.page(), "../classns_1_1parser.html");
        assert_eq!(t.anchor(), None);
    }
}
