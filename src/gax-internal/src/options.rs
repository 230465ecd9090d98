// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resolves the client configuration into the values used by each request.

use gax::client_builder::Error as BuilderError;

/// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<reqwest::Client>;

/// Setting this variable to `true` enables request tracing in all clients.
pub(crate) const LOGGING_VAR: &str = "GOOGLE_APIS_RUST_LOGGING";

/// Returns true if either the client or the environment turn on tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    config.tracing || std::env::var(LOGGING_VAR).is_ok_and(|v| v == "true")
}

/// Picks the configured endpoint, or `default_endpoint`, and validates it.
///
/// The result has no trailing slash, method paths are appended after a `/`.
pub fn resolve_endpoint(
    config: &ClientConfig,
    default_endpoint: &str,
) -> gax::client_builder::Result<String> {
    let endpoint = config.endpoint.as_deref().unwrap_or(default_endpoint);
    let url = url::Url::parse(endpoint).map_err(BuilderError::endpoint)?;
    match url.scheme() {
        "http" | "https" => Ok(endpoint.trim_end_matches('/').to_string()),
        scheme => Err(BuilderError::endpoint(format!(
            "unsupported scheme `{scheme}` in endpoint `{endpoint}`"
        ))),
    }
}
