// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::policy::action::Action;
use crate::policy::attribute::Attribute;
use crate::policy::rule::Rule;

/// Built-in asciicast policy
pub const DEFAULT_POLICY: &str = r#"
version: "1.0"
rules:
  update: admin_or_owner
  destroy: admin_or_owner
  feature: admin
  unfeature: admin
  make_public: owner
  make_private: owner
attributes:
  base: [title, description, theme_name]
  admin: [featured]
  owner: [private]
"#;

/// Only supported policy file version
pub const SUPPORTED_VERSION: &str = "1.0";

/// Root configuration structure for policy YAML files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub version: String,
    pub rules: BTreeMap<Action, Rule>,
    #[serde(default)]
    pub attributes: AttributeConfig,
}

/// Which attributes are mass-assignable, per kind of access.
///
/// `base` is granted to anyone with admin or owner access, followed by
/// `admin` for admins or `owner` for non-admin owners. An attribute may not
/// appear twice in `base` + `admin` nor in `base` + `owner`; `admin` and
/// `owner` may overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeConfig {
    #[serde(default = "default_base_attributes")]
    pub base: Vec<Attribute>,
    #[serde(default = "default_admin_attributes")]
    pub admin: Vec<Attribute>,
    #[serde(default = "default_owner_attributes")]
    pub owner: Vec<Attribute>,
}

fn default_base_attributes() -> Vec<Attribute> {
    vec![Attribute::Title, Attribute::Description, Attribute::ThemeName]
}

fn default_admin_attributes() -> Vec<Attribute> {
    vec![Attribute::Featured]
}

fn default_owner_attributes() -> Vec<Attribute> {
    vec![Attribute::Private]
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            base: default_base_attributes(),
            admin: default_admin_attributes(),
            owner: default_owner_attributes(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let rules = [
            (Action::Update, Rule::AdminOrOwner),
            (Action::Destroy, Rule::AdminOrOwner),
            (Action::Feature, Rule::Admin),
            (Action::Unfeature, Rule::Admin),
            (Action::MakePublic, Rule::Owner),
            (Action::MakePrivate, Rule::Owner),
        ]
        .into_iter()
        .collect();

        Self {
            version: SUPPORTED_VERSION.to_string(),
            rules,
            attributes: AttributeConfig::default(),
        }
    }
}

impl PolicyConfig {
    /// Parse a PolicyConfig from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize the PolicyConfig to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
