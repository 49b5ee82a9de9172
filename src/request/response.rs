// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use super::types::{DecisionReport, Verdict};
use crate::actor::ActorId;
use crate::policy::attribute::PermittedAttributes;

/// Builder for constructing decision reports
#[derive(Debug, Default)]
pub struct ReportBuilder {
    actor_id: Option<ActorId>,
    verdicts: Vec<Verdict>,
    permitted_attributes: PermittedAttributes,
}

impl ReportBuilder {
    /// Create a new report builder for the given actor
    pub fn new(actor_id: Option<ActorId>) -> Self {
        Self {
            actor_id,
            ..Self::default()
        }
    }

    /// Add a verdict
    pub fn verdict(mut self, verdict: Verdict) -> Self {
        self.verdicts.push(verdict);
        self
    }

    /// Set the permitted attributes
    pub fn attributes(mut self, permitted: PermittedAttributes) -> Self {
        self.permitted_attributes = permitted;
        self
    }

    /// Build the final DecisionReport
    pub fn build(self) -> DecisionReport {
        DecisionReport {
            actor_id: self.actor_id,
            verdicts: self.verdicts,
            permitted_attributes: self.permitted_attributes,
        }
    }
}
