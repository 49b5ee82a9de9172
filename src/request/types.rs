// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};

use crate::actor::{Actor, ActorId};
use crate::asciicast::Asciicast;
use crate::policy::action::Action;
use crate::policy::attribute::PermittedAttributes;
use crate::policy::violation::DenialReason;

/// A question put to the policy: may this actor act on this asciicast?
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// Absent or null for an unauthenticated caller
    #[serde(default)]
    pub actor: Option<Actor>,
    #[serde(default)]
    pub asciicast: Asciicast,
    /// Evaluate every action when omitted
    #[serde(default)]
    pub action: Option<Action>,
}

/// Outcome of a single action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub action: Action,
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
}

impl Verdict {
    /// Create a positive verdict
    pub fn allow(action: Action) -> Self {
        Self {
            action,
            allowed: true,
            reason: None,
        }
    }

    /// Create a negative verdict
    pub fn deny(action: Action, reason: DenialReason) -> Self {
        Self {
            action,
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Decisions for one actor and asciicast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub actor_id: Option<ActorId>,
    pub verdicts: Vec<Verdict>,
    pub permitted_attributes: PermittedAttributes,
}

impl DecisionReport {
    /// Check if the report grants the action. Actions not evaluated are denied.
    pub fn allows(&self, action: Action) -> bool {
        self.verdicts
            .iter()
            .any(|v| v.action == action && v.allowed)
    }

    /// Check if every evaluated action was granted
    pub fn all_allowed(&self) -> bool {
        self.verdicts.iter().all(|v| v.allowed)
    }
}
