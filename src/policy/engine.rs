// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::actor::Actor;
use crate::asciicast::Asciicast;
use crate::policy::action::Action;
use crate::policy::attribute::{Attribute, PermittedAttributes};
use crate::policy::config::{AttributeConfig, PolicyConfig, SUPPORTED_VERSION};
use crate::policy::rule::Rule;
use crate::policy::violation::PolicyViolation;
use crate::request::response::ReportBuilder;
use crate::request::types::{AuthorizationRequest, DecisionReport, Verdict};

/// Errors that can occur during policy configuration
#[derive(Debug, Error)]
pub enum PolicyConfigError {
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Unsupported policy version '{0}', expected '1.0'")]
    UnsupportedVersion(String),
    #[error("No rule configured for action '{0}'")]
    MissingRule(Action),
    #[error("Attribute '{0}' is listed more than once")]
    DuplicateAttribute(Attribute),
    #[error("Invalid policy configuration: {0}")]
    InvalidConfig(String),
}

/// The asciicast policy: action decisions and mass-assignment whitelist.
///
/// Every operation is a pure function of the actor and the asciicast
/// snapshot; an absent actor is always denied.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    /// Indexed by `Action::index`
    rules: [Rule; Action::COUNT],
    attributes: AttributeConfig,
}

const BUILTIN_RULES: [Rule; Action::COUNT] = [
    Rule::AdminOrOwner,
    Rule::AdminOrOwner,
    Rule::Admin,
    Rule::Admin,
    Rule::Owner,
    Rule::Owner,
];

impl PolicyEngine {
    /// Create an engine with the built-in policy
    pub fn new() -> Self {
        Self {
            rules: BUILTIN_RULES,
            attributes: AttributeConfig::default(),
        }
    }

    /// Load a policy from a YAML configuration string
    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyConfigError> {
        let config = PolicyConfig::from_yaml(yaml)?;
        Self::from_config(config)
    }

    /// Create a PolicyEngine from a validated PolicyConfig
    pub fn from_config(config: PolicyConfig) -> Result<Self, PolicyConfigError> {
        if config.version != SUPPORTED_VERSION {
            return Err(PolicyConfigError::UnsupportedVersion(config.version));
        }

        let mut rules = BUILTIN_RULES;
        for action in Action::ALL {
            rules[action.index()] = config
                .rules
                .get(&action)
                .copied()
                .ok_or(PolicyConfigError::MissingRule(action))?;
        }

        let attributes = &config.attributes;
        if attributes.base.is_empty() {
            return Err(PolicyConfigError::InvalidConfig(
                "base attribute list must not be empty".to_string(),
            ));
        }

        // admin and owner lists are never applied together
        for extra in [&attributes.admin, &attributes.owner] {
            let mut seen = HashSet::new();
            for attribute in attributes.base.iter().chain(extra) {
                if !seen.insert(*attribute) {
                    return Err(PolicyConfigError::DuplicateAttribute(*attribute));
                }
            }
        }

        info!(
            rules = rules.len(),
            base_attributes = attributes.base.len(),
            "loaded asciicast policy"
        );

        Ok(Self {
            rules,
            attributes: config.attributes,
        })
    }

    /// Get the effective configuration
    pub fn config(&self) -> PolicyConfig {
        PolicyConfig {
            version: SUPPORTED_VERSION.to_string(),
            rules: Action::ALL
                .into_iter()
                .map(|action| (action, self.rule_for(action)))
                .collect(),
            attributes: self.attributes.clone(),
        }
    }

    /// Get the rule an action is bound to
    pub fn rule_for(&self, action: Action) -> Rule {
        self.rules[action.index()]
    }

    /// Authorize an action, returning the denial reason on failure
    pub fn authorize(
        &self,
        action: Action,
        actor: Option<&Actor>,
        asciicast: &Asciicast,
    ) -> Result<(), PolicyViolation> {
        let result = self.rule_for(action).check(actor, asciicast);

        debug!(
            action = %action,
            actor_id = ?actor.map(|a| a.id),
            allowed = result.is_ok(),
            reason = ?result.as_ref().err(),
            "asciicast policy decision"
        );

        result.map_err(|reason| {
            let violation = PolicyViolation::new(action, reason);
            match actor {
                Some(actor) => violation.with_actor(actor.id),
                None => violation,
            }
        })
    }

    /// Quick check if the actor may perform the action (returns bool).
    pub fn permits(&self, action: Action, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.authorize(action, actor, asciicast).is_ok()
    }

    pub fn can_update(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.permits(Action::Update, actor, asciicast)
    }

    pub fn can_destroy(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.permits(Action::Destroy, actor, asciicast)
    }

    pub fn can_feature(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.permits(Action::Feature, actor, asciicast)
    }

    pub fn can_unfeature(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.permits(Action::Unfeature, actor, asciicast)
    }

    pub fn can_make_public(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.permits(Action::MakePublic, actor, asciicast)
    }

    pub fn can_make_private(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> bool {
        self.permits(Action::MakePrivate, actor, asciicast)
    }

    /// Attributes the actor may set on the asciicast.
    ///
    /// Admins get the base list plus the admin list, even when they also own
    /// the asciicast. Non-admin owners get the base list plus the owner list.
    /// Everyone else gets nothing.
    pub fn permitted_attributes(
        &self,
        actor: Option<&Actor>,
        asciicast: &Asciicast,
    ) -> PermittedAttributes {
        let mut permitted = PermittedAttributes::new();

        let extra = match actor {
            Some(actor) if actor.is_admin() => &self.attributes.admin,
            Some(actor) if actor.owns(asciicast) => &self.attributes.owner,
            _ => return permitted,
        };

        permitted.extend(self.attributes.base.iter().copied());
        permitted.extend(extra.iter().copied());
        permitted
    }

    /// Evaluate every action and the attribute whitelist
    pub fn report(&self, actor: Option<&Actor>, asciicast: &Asciicast) -> DecisionReport {
        self.build_report(&Action::ALL, actor, asciicast)
    }

    /// Evaluate an authorization request, restricted to its action if it names one
    pub fn evaluate(&self, request: &AuthorizationRequest) -> DecisionReport {
        let actions = match request.action {
            Some(action) => vec![action],
            None => Action::ALL.to_vec(),
        };
        self.build_report(&actions, request.actor.as_ref(), &request.asciicast)
    }

    fn build_report(
        &self,
        actions: &[Action],
        actor: Option<&Actor>,
        asciicast: &Asciicast,
    ) -> DecisionReport {
        let builder = actions.iter().fold(
            ReportBuilder::new(actor.map(|a| a.id)),
            |builder, &action| {
                let verdict = match self.authorize(action, actor, asciicast) {
                    Ok(()) => Verdict::allow(action),
                    Err(violation) => violation.to_verdict(),
                };
                builder.verdict(verdict)
            },
        );

        builder
            .attributes(self.permitted_attributes(actor, asciicast))
            .build()
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}
