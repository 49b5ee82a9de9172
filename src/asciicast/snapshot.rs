// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};

use crate::actor::ActorId;

/// Snapshot of an asciicast record as handed over by the persistence layer.
///
/// Only `owner_id` takes part in policy decisions; the remaining fields are
/// the mass-assignable attributes the policy whitelists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asciicast {
    /// Creator of the recording, unset for a new record
    #[serde(default)]
    pub owner_id: Option<ActorId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub theme_name: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub private: bool,
}

impl Asciicast {
    /// Create a new, unowned asciicast
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an asciicast created by the given actor
    pub fn owned_by(owner_id: impl Into<ActorId>) -> Self {
        Self::new().with_owner(owner_id)
    }

    /// Set the owner
    pub fn with_owner(mut self, owner_id: impl Into<ActorId>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_theme(mut self, theme_name: impl Into<String>) -> Self {
        self.theme_name = Some(theme_name.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Check if the asciicast has an owner
    pub fn has_owner(&self) -> bool {
        self.owner_id.is_some()
    }
}
