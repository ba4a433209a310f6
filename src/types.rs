//! Common types used throughout the Redmine client
//!
//! This module contains the shared resource primitives that appear inside
//! most Redmine payloads, plus a few type aliases used across modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Resource Primitives
// ============================================================================

/// A bare resource reference carrying only its numeric ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: u32,
}

impl Id {
    /// Create a reference to the given resource ID
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

/// A resource reference carrying its numeric ID and display name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdName {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

impl IdName {
    /// Create a named reference
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A custom field value attached to a resource
///
/// Redmine custom fields are schema-less; the value is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}
