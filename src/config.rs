//! Runtime configuration for the bridge
//!
//! The browser build talks to its own origin; the command-line build reads
//! its settings from the environment.

use std::env;
use std::time::Duration;

use crate::error::{ErrorKind, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// How strictly response bodies are checked before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Render whatever came back, judging `available` by JavaScript truthiness.
    #[default]
    Permissive,
    /// Reject bodies whose `available`/`result` field is missing or mistyped.
    Strict,
}

impl std::str::FromStr for ResponsePolicy {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(ResponsePolicy::Permissive),
            "strict" => Ok(ResponsePolicy::Strict),
            other => Err(ErrorKind::ParseError(format!("Invalid response policy: {other}")).into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Prefix for the endpoint paths. Empty means same-origin relative paths.
    pub base_url: String,
    pub policy: ResponsePolicy,
    /// Only the reqwest backend honours this.
    pub timeout: Option<Duration>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            policy: ResponsePolicy::default(),
            timeout: None,
        }
    }
}

impl BridgeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn same_origin() -> Self {
        Self::new("")
    }

    pub fn with_policy(mut self, policy: ResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn new_from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("TIMETABLE_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(policy) = lookup("TIMETABLE_RESPONSE_POLICY") {
            config.policy = policy.parse()?;
        }

        if let Some(secs) = lookup("TIMETABLE_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                ErrorKind::ParseError(format!("Invalid TIMETABLE_TIMEOUT_SECS: {e}"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Joins the base URL and an endpoint path without doubling the slash.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
