// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::Deserialize;
use std::path::PathBuf;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Policy file used when `--policies` is not given (default: built-in policy)
    #[serde(default)]
    pub policy_file: Option<PathBuf>,

    /// Log level (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (default: pretty)
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Output format of the log layer
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Example: `POLICY_FILE`, `LOG_LEVEL`, `LOG_FORMAT`.
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
