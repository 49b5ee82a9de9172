// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::asciicast::Asciicast;

/// Unique identity of an actor, as issued by the authentication layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An authenticated caller attempting an action on an asciicast.
///
/// An unauthenticated caller has no `Actor` at all: every policy operation
/// takes `Option<&Actor>` and treats `None` as the anonymous case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Actor identifier
    pub id: ActorId,
    /// Elevated privileges that bypass ownership for some actions
    #[serde(default)]
    pub admin: bool,
}

impl Actor {
    /// Create a regular (non-admin) actor
    pub fn new(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            admin: false,
        }
    }

    /// Create an admin actor
    pub fn admin(id: impl Into<ActorId>) -> Self {
        Self::new(id).with_admin(true)
    }

    /// Set the admin flag
    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Check if the actor has admin privileges
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Check if the actor created the given asciicast
    pub fn owns(&self, asciicast: &Asciicast) -> bool {
        asciicast.owner_id == Some(self.id)
    }
}
