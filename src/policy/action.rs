// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Actions that can be performed on an asciicast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Edit the recording's metadata
    Update,
    /// Delete the recording
    Destroy,
    /// Put the recording on the featured list
    Feature,
    /// Remove the recording from the featured list
    Unfeature,
    /// Make a private recording visible to everyone
    MakePublic,
    /// Hide the recording from everyone but its owner
    MakePrivate,
}

impl Action {
    /// Number of actions.
    pub const COUNT: usize = 6;

    /// All actions, in declaration order.
    pub const ALL: [Action; Action::COUNT] = [
        Action::Update,
        Action::Destroy,
        Action::Feature,
        Action::Unfeature,
        Action::MakePublic,
        Action::MakePrivate,
    ];

    /// Position of the action in `ALL`.
    pub fn index(&self) -> usize {
        match self {
            Action::Update => 0,
            Action::Destroy => 1,
            Action::Feature => 2,
            Action::Unfeature => 3,
            Action::MakePublic => 4,
            Action::MakePrivate => 5,
        }
    }

    /// Get the action name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Update => "update",
            Action::Destroy => "destroy",
            Action::Feature => "feature",
            Action::Unfeature => "unfeature",
            Action::MakePublic => "make_public",
            Action::MakePrivate => "make_private",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    /// Parse an action name; the predicate form (`update?`) and kebab case
    /// (`make-public`) are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_end_matches('?').to_lowercase().replace('-', "_");

        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == name)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
