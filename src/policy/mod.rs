// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
pub mod action;
pub mod attribute;
pub mod config;
pub mod engine;
pub mod rule;
pub mod violation;

pub use action::{Action, UnknownAction};
pub use attribute::{Attribute, PermittedAttributes};
pub use config::{AttributeConfig, PolicyConfig, DEFAULT_POLICY};
pub use engine::{PolicyConfigError, PolicyEngine};
pub use rule::Rule;
pub use violation::{DenialReason, PolicyViolation};
