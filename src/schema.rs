//! MinionType and field definition structures

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VenuesError;

/// Type of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    /// One value out of a host-defined option list
    Select,
}

impl FieldType {
    /// All field types, in declaration order
    pub const ALL: [FieldType; 4] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Select,
    ];

    /// Get the wire name for this field type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Select => "select",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = VenuesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| VenuesError::InvalidFieldType(s.to_string()))
    }
}

/// One typed, labeled field within a MinionType's schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
}

impl FieldDefinition {
    /// Create a new field definition
    pub fn new(name: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
        }
    }

    /// Create a field whose label is its name
    pub fn labeled(name: &str, field_type: FieldType) -> Self {
        Self::new(name, field_type, name)
    }
}

/// A named, described schema definition registered with a host framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinionType {
    /// Globally unique id (e.g., "venues-tent")
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    /// Ordered field list
    pub schema: Vec<FieldDefinition>,
}

impl MinionType {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.schema.iter().find(|f| f.name == name)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> Vec<&str> {
        self.schema.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn field_count(&self) -> usize {
        self.schema.len()
    }

    /// Names that appear more than once in the schema, in first-repeat order
    pub fn duplicate_field_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for field in &self.schema {
            if !seen.insert(field.name.as_str()) && !duplicates.contains(&field.name.as_str()) {
                duplicates.push(field.name.as_str());
            }
        }
        duplicates
    }
}
