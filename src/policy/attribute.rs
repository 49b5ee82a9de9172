// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Mass-assignable asciicast attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Title,
    Description,
    ThemeName,
    Featured,
    Private,
}

impl Attribute {
    /// Get the attribute name as it appears in request parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Title => "title",
            Attribute::Description => "description",
            Attribute::ThemeName => "theme_name",
            Attribute::Featured => "featured",
            Attribute::Private => "private",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of attributes an actor may set on an asciicast.
///
/// Insertion order is preserved; inserting an attribute twice keeps the
/// first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct PermittedAttributes(Vec<Attribute>);

impl PermittedAttributes {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute unless already present
    pub fn insert(&mut self, attribute: Attribute) {
        if !self.contains(attribute) {
            self.0.push(attribute);
        }
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.0.contains(&attribute)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.0
    }

    /// Attribute names, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|a| a.as_str()).collect()
    }

    /// Keep only the request parameters the actor may set
    pub fn filter(&self, params: &Map<String, Value>) -> Map<String, Value> {
        params
            .iter()
            .filter(|(key, _)| self.iter().any(|a| a.as_str() == key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl Extend<Attribute> for PermittedAttributes {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

impl FromIterator<Attribute> for PermittedAttributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut permitted = Self::new();
        permitted.extend(iter);
        permitted
    }
}

impl From<Vec<Attribute>> for PermittedAttributes {
    fn from(attributes: Vec<Attribute>) -> Self {
        attributes.into_iter().collect()
    }
}

impl From<PermittedAttributes> for Vec<Attribute> {
    fn from(permitted: PermittedAttributes) -> Self {
        permitted.0
    }
}

impl PartialEq<[Attribute]> for PermittedAttributes {
    fn eq(&self, other: &[Attribute]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[Attribute; N]> for PermittedAttributes {
    fn eq(&self, other: &[Attribute; N]) -> bool {
        self.0 == other
    }
}
