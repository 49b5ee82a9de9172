// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::asciicast::Asciicast;
use crate::policy::violation::DenialReason;

/// Grant rules an action can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Actor is an admin or created the asciicast
    AdminOrOwner,
    /// Actor is an admin, ownership is irrelevant
    Admin,
    /// Actor created the asciicast, admin flag is irrelevant
    Owner,
}

impl Rule {
    /// Check if the actor satisfies this rule for the given asciicast
    pub fn check(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> Result<(), DenialReason> {
        let actor = actor.ok_or(DenialReason::Unauthenticated)?;

        match self {
            Rule::AdminOrOwner => {
                if !actor.is_admin() && !actor.owns(asciicast) {
                    return Err(DenialReason::NotAdminOrOwner);
                }
            }
            Rule::Admin => {
                if !actor.is_admin() {
                    return Err(DenialReason::NotAdmin);
                }
            }
            Rule::Owner => {
                if !actor.owns(asciicast) {
                    return Err(DenialReason::NotOwner);
                }
            }
        }

        Ok(())
    }

    /// Quick check (returns bool).
    pub fn permits(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.check(actor, asciicast).is_ok()
    }
}
