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

use crate::api_header::XGoogApiClient;
use crate::method::Method;
use crate::observability::{create_http_span, record_http_response};
use crate::query_parameter::QueryParams;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use reqwest::header::{HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// The HTTP invoker shared by all the request builders of one client.
///
/// Each call makes exactly one HTTP request. Errors are returned to the
/// caller as-is, there are no retries.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    endpoint: String,
    user_agent: Option<String>,
    api_client: &'static XGoogApiClient,
    tracing: bool,
}

impl ReqwestClient {
    pub fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
        api_client: &'static XGoogApiClient,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let endpoint = crate::options::resolve_endpoint(&config, default_endpoint)?;
        let inner = match config.http_client {
            Some(c) => c,
            None => reqwest::Client::builder()
                .build()
                .map_err(BuilderError::transport)?,
        };
        if tracing {
            tracing::info!(
                endpoint = %endpoint,
                client = api_client.name,
                "created HTTP client"
            );
        }
        Ok(Self {
            inner,
            endpoint,
            user_agent: config.user_agent,
            api_client,
            tracing,
        })
    }

    /// The root URL for all requests, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Creates a request for `path`, relative to the endpoint.
    pub fn builder(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}/{path}", self.endpoint))
    }

    /// Creates a request for an absolute URL, such as an upload session URI.
    pub fn builder_for_url(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, url)
    }

    /// Expands the path template of `method` and creates the request.
    pub fn request(
        &self,
        method: &Method,
        path_params: &[(&str, &str)],
    ) -> Result<reqwest::RequestBuilder> {
        let path = crate::path_template::expand(method.path, path_params)?;
        Ok(self.builder(method.verb.as_method(), &path))
    }

    /// Expands the upload path template of `method` and creates the request.
    pub fn upload_request(
        &self,
        method: &Method,
        path_params: &[(&str, &str)],
    ) -> Result<reqwest::RequestBuilder> {
        let path = crate::path_template::expand(method.upload_path()?, path_params)?;
        Ok(self.builder(method.verb.as_method(), &path))
    }

    /// Adds the standard query parameters and headers to a request.
    pub fn prepare(
        &self,
        builder: reqwest::RequestBuilder,
        mut query: QueryParams,
        options: &RequestOptions,
    ) -> Result<reqwest::RequestBuilder> {
        query.set("alt", "json");
        query.set("prettyPrint", false);
        if let Some(fields) = options.fields() {
            query.set("fields", fields);
        }
        if let Some(quota_user) = options.quota_user() {
            query.set("quotaUser", quota_user);
        }
        self.prepare_headers(query.apply(builder), options)
    }

    /// Adds the standard headers and the attempt timeout to a request.
    pub fn prepare_headers(
        &self,
        builder: reqwest::RequestBuilder,
        options: &RequestOptions,
    ) -> Result<reqwest::RequestBuilder> {
        self.add_headers(builder, options, true)
    }

    /// Like [prepare_headers()][Self::prepare_headers], for requests to a
    /// resumable upload session.
    ///
    /// Preconditions apply to the initial request only, chunk requests never
    /// carry `If-None-Match`.
    pub fn prepare_session_headers(
        &self,
        builder: reqwest::RequestBuilder,
        options: &RequestOptions,
    ) -> Result<reqwest::RequestBuilder> {
        self.add_headers(builder, options, false)
    }

    fn add_headers(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        conditional: bool,
    ) -> Result<reqwest::RequestBuilder> {
        let suffix = options.user_agent().as_ref().or(self.user_agent.as_ref());
        let user_agent = self.api_client.user_agent(suffix.map(String::as_str));
        builder = builder
            .header(
                reqwest::header::USER_AGENT,
                HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
            )
            .header(
                HeaderName::from_static("x-goog-api-client"),
                HeaderValue::from_str(&self.api_client.header_value()).map_err(Error::ser)?,
            );
        if let Some(etag) = options.if_none_match().as_ref().filter(|_| conditional) {
            builder = builder.header(
                reqwest::header::IF_NONE_MATCH,
                HeaderValue::from_str(etag).map_err(Error::ser)?,
            );
        }
        for (name, value) in options.headers() {
            builder = builder.header(
                HeaderName::from_bytes(name.as_bytes()).map_err(Error::ser)?,
                HeaderValue::from_str(value).map_err(Error::ser)?,
            );
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        Ok(builder)
    }

    /// Sends a request and decodes the JSON response.
    pub async fn execute<I, O>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        method: &Method,
        cancel: &CancellationToken,
    ) -> Result<O>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let builder = with_json_body(builder, body);
        let response = self.send(builder, Some(method.id), cancel).await?;
        if !response.status().is_success() {
            return cancellable(cancel, to_http_error(response)).await;
        }
        cancellable(cancel, to_http_response(response)).await
    }

    /// Sends a request for a method that returns nothing.
    ///
    /// The response body is never parsed.
    pub async fn execute_empty<I>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        method: &Method,
        cancel: &CancellationToken,
    ) -> Result<()>
    where
        I: serde::ser::Serialize,
    {
        let builder = with_json_body(builder, body);
        let response = self.send(builder, Some(method.id), cancel).await?;
        if !response.status().is_success() {
            return cancellable(cancel, to_http_error(response)).await;
        }
        Ok(())
    }

    /// Makes a single HTTP request, without examining the response status.
    ///
    /// Resumable uploads use this directly because `308` is not an error in
    /// that protocol.
    pub async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        method_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<reqwest::Response> {
        let request = builder.build().map_err(Error::ser)?;
        if !self.tracing {
            return cancellable(cancel, self.attempt(request)).await;
        }
        let span = create_http_span(&request, method_id, self.api_client.name);
        let result = cancellable(cancel, self.attempt(request))
            .instrument(span.clone())
            .await;
        record_http_response(&span, result.as_ref().map(|r| r.status().as_u16()));
        result
    }

    async fn attempt(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        self.inner
            .execute(request)
            .await
            .map_err(map_send_error)
    }
}

/// Races `fut` against the cancellation token.
///
/// Dropping the future aborts any in-flight request.
pub async fn cancellable<F, T>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::cancelled("the cancellation token was triggered")),
        r = fut => r,
    }
}

fn with_json_body<I: serde::ser::Serialize>(
    builder: reqwest::RequestBuilder,
    body: Option<I>,
) -> reqwest::RequestBuilder {
    match body {
        Some(b) => builder.json(&b),
        None => builder,
    }
}

pub(crate) fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e if e.is_builder() => Error::ser(e),
        e => Error::io(e),
    }
}

/// An empty request body, for methods without one.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(
            status,
            Some(status_code),
            Some(parts.headers),
            Some(body),
        ),
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

pub async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body and serde_json fails with EOF on empty input.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let body = response.bytes().await.map_err(map_send_error)?;
    match body {
        content if content.is_empty() && no_content_status => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}
