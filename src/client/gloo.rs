//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::config::BridgeConfig;
use crate::error::Result;
use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

use crate::interface::{HttpClient, SchedulingApi};
use crate::model::dtos::{ClassAvailabilityQuery, ScheduleRequest, TeacherAvailabilityQuery};
use crate::model::structs::Endpoint;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    config: BridgeConfig,
}

impl HttpClient for WasmClient {
    async fn new(config: BridgeConfig) -> Result<Self> {
        if config.timeout.is_some() {
            log::debug!("fetch requests ignore the configured timeout");
        }
        Ok(Self { config })
    }
}

impl WasmClient {
    /// Build a POST with the JSON headers every endpoint expects
    fn build_request(url: &str) -> RequestBuilder {
        Request::post(url)
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Content-Type", "application/json")
    }

    async fn post_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<Value> {
        let url = self.config.url_for(endpoint.path());
        log::debug!("POST {} {}", url, serde_json::to_string(body)?);

        let resp = Self::build_request(&url).json(body)?.send().await?;

        if !resp.ok() {
            log::warn!("{} answered {} {}", endpoint.path(), resp.status(), resp.status_text());
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str::<Value>(&text)?)
    }
}

impl SchedulingApi for WasmClient {
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
