//! Type Registry
//!
//! Ordered lookup table over MinionTypes, keyed by id and slug.

use std::collections::HashMap;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tracing::{debug, warn};

use crate::error::{Result, VenuesError};
use crate::schema::MinionType;
use crate::types::custom_types;

/// Registry of MinionTypes
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// Types in registration order
    types: Vec<MinionType>,
    /// id -> index into `types`
    by_id: HashMap<String, usize>,
    /// slug -> index into `types`
    by_slug: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the four venue types
    pub fn with_custom_types() -> Self {
        let mut registry = Self::new();
        for t in custom_types() {
            if let Err(e) = registry.register(t.clone()) {
                warn!(error = %e, "skipping custom type");
            }
        }
        registry
    }

    /// Register a new type
    ///
    /// Ids and slugs must both be unused. Nothing is inserted on error.
    pub fn register(&mut self, minion_type: MinionType) -> Result<()> {
        if self.by_id.contains_key(&minion_type.id) {
            return Err(VenuesError::AlreadyRegistered {
                id: minion_type.id,
            });
        }
        if self.by_slug.contains_key(&minion_type.slug) {
            return Err(VenuesError::DuplicateSlug {
                slug: minion_type.slug,
            });
        }

        let duplicates = minion_type.duplicate_field_names();
        if !duplicates.is_empty() {
            warn!(id = %minion_type.id, ?duplicates, "type has repeated field names");
        }

        let index = self.types.len();
        self.by_id.insert(minion_type.id.clone(), index);
        self.by_slug.insert(minion_type.slug.clone(), index);
        debug!(id = %minion_type.id, slug = %minion_type.slug, "registered type");
        self.types.push(minion_type);
        Ok(())
    }

    /// Get a type by id
    pub fn get(&self, id: &str) -> Option<&MinionType> {
        self.by_id.get(id).map(|&i| &self.types[i])
    }

    /// Get a type by slug
    pub fn get_by_slug(&self, slug: &str) -> Option<&MinionType> {
        self.by_slug.get(slug).map(|&i| &self.types[i])
    }

    /// Get a type by slug, failing if it is not registered
    pub fn require_slug(&self, slug: &str) -> Result<&MinionType> {
        self.get_by_slug(slug).ok_or_else(|| {
            debug!(slug, "slug lookup missed");
            VenuesError::UnknownType {
                key: slug.to_string(),
            }
        })
    }

    /// Fuzzy-search types by slug and name, best match first
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&MinionType> {
        let matcher = SkimMatcherV2::default();
        let mut results: Vec<(i64, &MinionType)> = self
            .types
            .iter()
            .filter_map(|t| {
                let slug_score = matcher.fuzzy_match(&t.slug, query);
                let name_score = matcher.fuzzy_match(&t.name, query);
                slug_score.max(name_score).map(|score| (score, t))
            })
            .collect();

        // Stable sort keeps registration order among equal scores
        results.sort_by(|a, b| b.0.cmp(&a.0));

        results.into_iter().take(limit).map(|(_, t)| t).collect()
    }

    /// Iterate types in registration order
    pub fn iter(&self) -> impl Iterator<Item = &MinionType> {
        self.types.iter()
    }

    /// Registered slugs in registration order
    pub fn slugs(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.slug.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = &'a MinionType;
    type IntoIter = std::slice::Iter<'a, MinionType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
