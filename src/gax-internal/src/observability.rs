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

//! Tracing spans for HTTP requests.
//!
//! The attribute names follow the OpenTelemetry semantic conventions for HTTP
//! client spans. The spans are only created when the client enables tracing.

use gax::error::Error;
use tracing::{Span, field};

pub(crate) mod keys {
    pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
    pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
    pub const URL_FULL: &str = "url.full";
    pub const SERVER_ADDRESS: &str = "server.address";
    pub const ERROR_TYPE: &str = "error.type";
    pub const OTEL_STATUS_CODE: &str = "otel.status_code";
    pub const GCP_CLIENT_METHOD: &str = "gcp.client.method";
    pub const GCP_CLIENT_ARTIFACT: &str = "gcp.client.artifact";
}

/// Classifies errors for the `error.type` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ErrorType {
    HttpStatus(u16),
    ClientTimeout,
    ClientCancelled,
    ClientConnectionError,
    ClientRequestError,
    ClientResponseDecodeError,
    UploadSession,
}

impl ErrorType {
    pub(crate) fn from_gax_error(err: &Error) -> Self {
        match err {
            e if e.is_timeout() => Self::ClientTimeout,
            e if e.is_cancelled() => Self::ClientCancelled,
            e if e.is_deserialization() => Self::ClientResponseDecodeError,
            e if e.is_upload() => Self::UploadSession,
            e => match e.http_status_code() {
                Some(code) => Self::HttpStatus(code),
                None if e.is_io() => Self::ClientConnectionError,
                None => Self::ClientRequestError,
            },
        }
    }

    pub(crate) fn as_str(&self) -> String {
        match self {
            Self::HttpStatus(code) => code.to_string(),
            Self::ClientTimeout => "CLIENT_TIMEOUT".to_string(),
            Self::ClientCancelled => "CLIENT_CANCELLED".to_string(),
            Self::ClientConnectionError => "CLIENT_CONNECTION_ERROR".to_string(),
            Self::ClientRequestError => "CLIENT_REQUEST_ERROR".to_string(),
            Self::ClientResponseDecodeError => "CLIENT_RESPONSE_DECODE_ERROR".to_string(),
            Self::UploadSession => "CLIENT_UPLOAD_SESSION_ERROR".to_string(),
        }
    }
}

/// Creates the span for one HTTP request.
pub(crate) fn create_http_span(
    request: &reqwest::Request,
    method_id: Option<&str>,
    artifact: &'static str,
) -> Span {
    let url = request.url();
    tracing::info_span!(
        "http_request",
        { keys::HTTP_REQUEST_METHOD } = request.method().as_str(),
        { keys::URL_FULL } = url.as_str(),
        { keys::SERVER_ADDRESS } = url.host_str().unwrap_or(""),
        { keys::GCP_CLIENT_METHOD } = method_id,
        { keys::GCP_CLIENT_ARTIFACT } = artifact,
        { keys::OTEL_STATUS_CODE } = "UNSET",
        { keys::HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { keys::ERROR_TYPE } = field::Empty,
    )
}

/// Records the outcome of a request in its span.
pub(crate) fn record_http_response(span: &Span, result: Result<u16, &Error>) {
    match result {
        Ok(code) => {
            span.record(keys::HTTP_RESPONSE_STATUS_CODE, code as i64);
        }
        Err(err) => {
            span.record(keys::OTEL_STATUS_CODE, "ERROR");
            if let Some(code) = err.http_status_code() {
                span.record(keys::HTTP_RESPONSE_STATUS_CODE, code as i64);
            }
            span.record(
                keys::ERROR_TYPE,
                ErrorType::from_gax_error(err).as_str().as_str(),
            );
        }
    }
}
