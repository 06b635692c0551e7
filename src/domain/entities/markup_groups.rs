//! MarkupGroups entity - rendered markup keyed by mount key
//!
//! Keys keep first-insertion order; snippets keep push order.

use std::collections::HashMap;

use crate::domain::value_objects::MountKey;

/// Markup rendered for one mount key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupGroup {
    pub key: MountKey,
    pub markup: Vec<String>,
}

/// Insertion-ordered mapping from mount key to markup snippets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupGroups {
    groups: Vec<MarkupGroup>,
    index: HashMap<MountKey, usize>,
}

impl MarkupGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `markup` under `key`, creating the group on first use
    pub fn push(&mut self, key: MountKey, markup: String) {
        match self.index.get(&key) {
            Some(&idx) => self.groups[idx].markup.push(markup),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(MarkupGroup {
                    key,
                    markup: vec![markup],
                });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&idx| self.groups[idx].markup.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkupGroup> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of snippets across all groups
    pub fn snippet_count(&self) -> usize {
        self.groups.iter().map(|g| g.markup.len()).sum()
    }
}
