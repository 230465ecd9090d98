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

//! The state shared by all the request builders.
//!
//! A [Call] holds everything needed to issue one request for a [Method]: the
//! path parameters, the query parameters, the optional JSON body, and the
//! per-request options. The generated request builders wrap a `Call` and
//! only add typed setters.

use crate::http::{NoBody, ReqwestClient};
use crate::method::{Method, Payload};
use crate::query_parameter::QueryParams;
use crate::upload::{Upload, UploadConfig};
use gax::Result;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::upload_source::MediaSource;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone, Debug)]
pub struct Call<B> {
    client: Arc<ReqwestClient>,
    method: &'static Method,
    path_params: Vec<(String, String)>,
    query: QueryParams,
    body: Option<B>,
    options: RequestOptions,
}

impl<B> Call<B> {
    pub fn new(client: Arc<ReqwestClient>, method: &'static Method) -> Self {
        Self {
            client,
            method,
            path_params: Vec::new(),
            query: QueryParams::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    pub fn method(&self) -> &'static Method {
        self.method
    }

    /// Sets a path parameter, replacing any previous value.
    pub fn set_path_param<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (name, value) = (name.into(), value.into());
        match self.path_params.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.path_params.push((name, value)),
        }
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v.as_str()))
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    pub fn set_body(&mut self, v: B) {
        self.body = Some(v);
    }

    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> &mut Option<B> {
        &mut self.body
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RequestOptions {
        &mut self.options
    }

    fn params(&self) -> Vec<(&str, &str)> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl<B> Call<B>
where
    B: serde::ser::Serialize,
{
    /// Issues the request and decodes the response.
    ///
    /// Methods without a response payload return `O::default()`, their
    /// response body is never parsed.
    pub async fn send<O>(self, cancel: &CancellationToken) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let builder = self.client.request(self.method, &self.params())?;
        let builder = self
            .client
            .prepare(builder, self.query.clone(), &self.options)?;
        let body = if self.method.has_body {
            self.body
        } else {
            None
        };
        match self.method.response {
            Payload::Json => {
                self.client
                    .execute(builder, body, self.method, cancel)
                    .await
            }
            Payload::Empty => {
                self.client
                    .execute_empty(builder, body, self.method, cancel)
                    .await?;
                Ok(O::default())
            }
        }
    }

    /// Converts the call into a media upload.
    ///
    /// The body, if any, becomes the upload metadata.
    pub fn into_upload<S>(self, source: S, config: UploadConfig) -> Result<Upload<S>>
    where
        S: MediaSource + Send + Sync,
    {
        let metadata = match (&self.body, self.method.has_body) {
            (Some(body), true) => Some(serde_json::to_value(body).map_err(Error::ser)?),
            _ => None,
        };
        let params = self.params();
        Upload::new(
            self.client.as_ref().clone(),
            self.method,
            &params,
            self.query.clone(),
            self.options.clone(),
            metadata,
            source,
            config,
        )
    }
}

impl Call<NoBody> {
    pub fn without_body(client: Arc<ReqwestClient>, method: &'static Method) -> Self {
        Self::new(client, method)
    }
}

/// An untyped request for any method in a dispatch table.
///
/// The path parameters, query parameters, and body use the names in the
/// method descriptor, e.g. `userId` or `pageToken`. The response is returned
/// as a [serde_json::Value], `Null` for methods without a response payload.
#[derive(Clone, Debug)]
pub struct RawCall(Call<serde_json::Value>);

impl RawCall {
    pub fn new(client: Arc<ReqwestClient>, method: &'static Method) -> Self {
        Self(Call::new(client, method))
    }

    pub fn method(&self) -> &'static Method {
        self.0.method()
    }

    /// Sets the value for a `{name}` placeholder in the path template.
    pub fn with_path_param<K, V>(mut self, name: K, v: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.set_path_param(name, v);
        self
    }

    /// Sets a query parameter, replacing any previous values.
    ///
    /// Arrays produce one `name=value` pair per element.
    pub fn with_query<V: Into<serde_json::Value>>(mut self, name: &str, v: V) -> Self {
        use crate::query_parameter::QueryParameter;
        let query = self.0.query_mut();
        query.remove(name);
        v.into().add(query, name);
        self
    }

    /// Sets the JSON request body. Ignored by methods without one.
    pub fn with_body<V: Into<serde_json::Value>>(mut self, v: V) -> Self {
        self.0.set_body(v.into());
        self
    }

    pub async fn send(self) -> Result<serde_json::Value> {
        self.send_with_cancellation(&CancellationToken::new()).await
    }

    pub async fn send_with_cancellation(
        self,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value> {
        self.0.send(cancel).await
    }
}

impl gax::options::internal::RequestBuilder for RawCall {
    fn request_options(&mut self) -> &mut RequestOptions {
        self.0.options_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_header::{GDCL, XGoogApiClient};
    use crate::method::Verb;
    use crate::options::ClientConfig;

    static TEST_API: XGoogApiClient = XGoogApiClient {
        name: "google-apis-test-v1",
        version: "0.0.1",
        library_type: GDCL,
    };

    static GET: Method = Method {
        id: "test.items.get",
        verb: Verb::Get,
        path: "test/v1/items/{id}",
        upload_path: None,
        has_body: false,
        response: Payload::Json,
    };

    fn test_client() -> anyhow::Result<Arc<ReqwestClient>> {
        let client =
            ReqwestClient::new(ClientConfig::default(), "https://test.googleapis.com", &TEST_API)?;
        Ok(Arc::new(client))
    }

    #[test]
    fn last_write_wins() -> anyhow::Result<()> {
        let mut call = Call::<NoBody>::without_body(test_client()?, &GET);
        call.set_path_param("id", "first");
        call.set_path_param("id", "second");
        assert_eq!(call.path_param("id"), Some("second"));
        assert_eq!(call.params(), vec![("id", "second")]);

        call.query_mut().set("limit", 10);
        call.query_mut().set("limit", 20);
        assert_eq!(call.query().get("limit"), Some(&["20".to_string()][..]));

        call.options_mut().set_quota_user("a");
        call.options_mut().set_quota_user("b");
        assert_eq!(call.options().quota_user().as_deref(), Some("b"));
        Ok(())
    }

    #[test]
    fn body() -> anyhow::Result<()> {
        let mut call = Call::<serde_json::Value>::new(test_client()?, &GET);
        assert!(call.body().is_none());
        call.set_body(serde_json::json!({"a": 1}));
        call.set_body(serde_json::json!({"b": 2}));
        assert_eq!(call.body(), Some(&serde_json::json!({"b": 2})));
        *call.body_mut() = None;
        assert!(call.body().is_none());
        assert_eq!(call.method().id, "test.items.get");
        Ok(())
    }

    #[test]
    fn raw_call() -> anyhow::Result<()> {
        use gax::options::RequestOptionsBuilder;
        let call = RawCall::new(test_client()?, &GET)
            .with_path_param("id", "abc")
            .with_query("tags", serde_json::json!(["a", "b"]))
            .with_query("tags", serde_json::json!(["c"]))
            .with_query("limit", 10)
            .with_fields(["id"]);
        assert_eq!(call.0.path_param("id"), Some("abc"));
        assert_eq!(call.0.query().get("tags"), Some(&["c".to_string()][..]));
        assert_eq!(call.0.query().get("limit"), Some(&["10".to_string()][..]));
        assert_eq!(call.0.options().fields().as_deref(), Some("id"));
        assert_eq!(call.method().id, "test.items.get");
        Ok(())
    }

    #[tokio::test]
    async fn upload_requires_media_method() -> anyhow::Result<()> {
        let call = Call::<NoBody>::without_body(test_client()?, &GET);
        let err = call
            .into_upload(gax::upload_source::Media::from("abc"), UploadConfig::default())
            .expect_err("method has no upload path");
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
