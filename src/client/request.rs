//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::config::BridgeConfig;
use crate::error::Result;
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::Serialize;
use serde_json::Value;

use crate::interface::{HttpClient, SchedulingApi};
use crate::model::dtos::{ClassAvailabilityQuery, ScheduleRequest, TeacherAvailabilityQuery};
use crate::model::structs::Endpoint;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    config: BridgeConfig,
}

impl HttpClient for NoWasmClient {
    async fn new(config: BridgeConfig) -> Result<Self> {
        let client = create_client(&config)?;
        Ok(Self { client, config })
    }
}

impl NoWasmClient {
    async fn post_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<Value> {
        let url = self.config.url_for(endpoint.path());
        log::debug!("POST {} {}", url, serde_json::to_string(body)?);

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!(
                "{} answered {} {}",
                endpoint.path(),
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
        }

        // Read as text first so a non-JSON body surfaces as a decode error.
        let text = resp.text().await?;
        Ok(serde_json::from_str::<Value>(&text)?)
    }
}

impl SchedulingApi for NoWasmClient {
    async fn check_teacher_availability(&self, query: TeacherAvailabilityQuery<'_>) -> Result<Value> {
        self.post_json(Endpoint::CheckTeacherAvailability, &query).await
    }

    async fn check_class_availability(&self, query: ClassAvailabilityQuery<'_>) -> Result<Value> {
        self.post_json(Endpoint::CheckClassAvailability, &query).await
    }

    async fn schedule_class(&self, request: ScheduleRequest<'_>) -> Result<Value> {
        self.post_json(Endpoint::ScheduleClass, &request).await
    }
}

pub fn create_client(config: &BridgeConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| e.into())
}
