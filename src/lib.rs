// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
//! Asciicast Policy - authorization decisions for asciicast recordings
//!
//! This crate decides who may update, destroy, feature, unfeature, publish or
//! hide an asciicast, and which attributes an actor may mass-assign. The
//! decision table can be replaced with a policy defined in YAML format.
//!
//! # Example
//!
//! ```rust
//! use asciicast_policy::policy::{Attribute, PolicyEngine};
//! use asciicast_policy::{Actor, Asciicast};
//!
//! let engine = PolicyEngine::new();
//!
//! let author = Actor::new(7);
//! let asciicast = Asciicast::owned_by(7);
//!
//! assert!(engine.can_update(Some(&author), &asciicast));
//! assert!(!engine.can_feature(Some(&author), &asciicast));
//! assert!(!engine.can_destroy(None, &asciicast));
//! assert_eq!(
//!     engine.permitted_attributes(Some(&author), &asciicast),
//!     [
//!         Attribute::Title,
//!         Attribute::Description,
//!         Attribute::ThemeName,
//!         Attribute::Private,
//!     ]
//! );
//! ```

pub mod actor;
pub mod asciicast;
pub mod policy;
pub mod request;

// Re-export commonly used types at the crate root
pub use actor::{Actor, ActorId};
pub use asciicast::Asciicast;
pub use policy::{Action, PolicyConfigError, PolicyEngine, PolicyViolation};
pub use request::{AuthorizationRequest, DecisionReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluate an authorization request against a policy loaded from YAML
///
/// This is a convenience function for simple use cases.
///
/// # Example
///
/// ```rust
/// use asciicast_policy::policy::DEFAULT_POLICY;
/// use asciicast_policy::{evaluate_request, Action, AuthorizationRequest, Asciicast};
///
/// let request = AuthorizationRequest {
///     actor: None,
///     asciicast: Asciicast::owned_by(7),
///     action: Some(Action::Update),
/// };
///
/// let report = evaluate_request(DEFAULT_POLICY, &request).unwrap();
/// assert!(!report.allows(Action::Update));
/// ```
pub fn evaluate_request(
    policies_yaml: &str,
    request: &AuthorizationRequest,
) -> Result<DecisionReport, PolicyConfigError> {
    let engine = PolicyEngine::from_yaml(policies_yaml)?;
    Ok(engine.evaluate(request))
}
