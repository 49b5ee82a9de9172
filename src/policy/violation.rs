// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor::ActorId;
use crate::policy::action::Action;
use crate::request::types::Verdict;

/// Why an actor was denied an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    #[error("no authenticated actor")]
    Unauthenticated,
    #[error("actor is not an admin")]
    NotAdmin,
    #[error("actor is not the owner")]
    NotOwner,
    #[error("actor is neither an admin nor the owner")]
    NotAdminOrOwner,
}

/// Represents a denied authorization request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Not allowed to {action} this asciicast: {reason}")]
pub struct PolicyViolation {
    pub action: Action,
    pub reason: DenialReason,
    pub actor_id: Option<ActorId>,
}

impl PolicyViolation {
    /// Create a new policy violation
    pub fn new(action: Action, reason: DenialReason) -> Self {
        Self {
            action,
            reason,
            actor_id: None,
        }
    }

    /// Add the denied actor to this violation
    pub fn with_actor(mut self, actor_id: ActorId) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    /// Convert to a negative verdict
    pub fn to_verdict(&self) -> Verdict {
        Verdict::deny(self.action, self.reason)
    }
}
