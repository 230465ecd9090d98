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

//! Per request options.
//!
//! Applications may need to customize the behavior of some calls made via a
//! client. Applications sometimes request a partial response, make a read
//! conditional on the current ETag of a resource, or change the timeout for
//! a specific call. The `*Builder` returned by each client method implements
//! the [RequestOptionsBuilder] trait where applications can override these
//! defaults.
//!
//! # Example
//! ```
//! # use google_apis_gax::options::{RequestOptions, RequestOptionsBuilder};
//! # use google_apis_gax::options::internal::RequestBuilder;
//! # #[derive(Default)] struct GetTable(RequestOptions);
//! # impl RequestBuilder for GetTable {
//! #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
//! # }
//! let builder = GetTable::default()
//!     .with_fields(["id", "name", "etag"])
//!     .with_if_none_match("\"etag-from-a-previous-read\"");
//! ```

use std::time::Duration;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
/// Setting the same option twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    fields: Option<String>,
    if_none_match: Option<String>,
    quota_user: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Appends this suffix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent suffix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    ///
    /// The client libraries never retry, this is the deadline for the only
    /// attempt. For resumable uploads the timeout applies to each request in
    /// the upload session.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets the partial response field mask.
    ///
    /// The service returns only the listed fields. Nested fields use `/` and
    /// sub-selections use parenthesis, e.g. `items(id,name)`.
    pub fn set_fields<T, I>(&mut self, v: T)
    where
        T: IntoIterator<Item = I>,
        I: Into<String>,
    {
        let fields = v.into_iter().map(|f| f.into()).collect::<Vec<_>>();
        self.fields = Some(fields.join(","));
    }

    /// Gets the current field mask, formatted as a comma separated list.
    pub fn fields(&self) -> &Option<String> {
        &self.fields
    }

    /// Makes the request conditional on the resource ETag.
    ///
    /// The service responds with `304 Not Modified` if the current ETag of
    /// the resource matches this value.
    pub fn set_if_none_match<T: Into<String>>(&mut self, v: T) {
        self.if_none_match = Some(v.into());
    }

    /// Gets the current ETag for conditional requests.
    pub fn if_none_match(&self) -> &Option<String> {
        &self.if_none_match
    }

    /// Sets the `quotaUser` parameter.
    ///
    /// Services use this value to apply per-user quotas for server-side
    /// applications.
    pub fn set_quota_user<T: Into<String>>(&mut self, v: T) {
        self.quota_user = Some(v.into());
    }

    /// Gets the current `quotaUser` parameter.
    pub fn quota_user(&self) -> &Option<String> {
        &self.quota_user
    }

    /// Sets an additional request header.
    ///
    /// A second call with the same (case-insensitive) name replaces the
    /// previous value.
    pub fn set_header<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }

    /// Gets the additional request headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each method. These builders can
/// be used to set the request parameters, e.g., the id of the resource targeted
/// by the method, as well as any options affecting the request, such as field
/// masks, additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent suffix.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the request timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Requests a partial response with only the given fields.
    fn with_fields<T, I>(self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<String>;

    /// Makes the request conditional, see [RequestOptions::set_if_none_match].
    fn with_if_none_match<V: Into<String>>(self, v: V) -> Self;

    /// Sets the `quotaUser` parameter.
    fn with_quota_user<V: Into<String>>(self, v: V) -> Self;

    /// Adds a request header, e.g. per-request credentials.
    fn with_header<K: Into<String>, V: Into<String>>(self, name: K, value: V) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_fields<F, I>(mut self, v: F) -> Self
    where
        F: IntoIterator<Item = I>,
        I: Into<String>,
    {
        self.request_options().set_fields(v);
        self
    }

    fn with_if_none_match<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_if_none_match(v);
        self
    }

    fn with_quota_user<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_quota_user(v);
        self
    }

    fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.request_options().set_header(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert_eq!(opts.fields(), &None);
        assert_eq!(opts.if_none_match(), &None);
        assert_eq!(opts.quota_user(), &None);
        assert!(opts.headers().is_empty(), "{opts:?}");

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.set_fields(["id", "name"]);
        assert_eq!(opts.fields().as_deref(), Some("id,name"));

        opts.set_if_none_match("\"abc\"");
        assert_eq!(opts.if_none_match().as_deref(), Some("\"abc\""));

        opts.set_quota_user("user-123");
        assert_eq!(opts.quota_user().as_deref(), Some("user-123"));
    }

    #[test]
    fn last_write_wins() {
        let mut builder = TestBuilder::default()
            .with_fields(["id"])
            .with_fields(["name", "etag"])
            .with_if_none_match("v1")
            .with_if_none_match("v2")
            .with_quota_user("a")
            .with_quota_user("b")
            .with_user_agent("ua-1")
            .with_user_agent("ua-2");
        let opts = builder.request_options();
        assert_eq!(opts.fields().as_deref(), Some("name,etag"));
        assert_eq!(opts.if_none_match().as_deref(), Some("v2"));
        assert_eq!(opts.quota_user().as_deref(), Some("b"));
        assert_eq!(opts.user_agent().as_deref(), Some("ua-2"));
    }

    #[test]
    fn headers_replace_case_insensitive() {
        let mut builder = TestBuilder::default()
            .with_header("authorization", "Bearer 1")
            .with_header("x-test-only", "value")
            .with_header("Authorization", "Bearer 2");
        let got = builder.request_options().headers().to_vec();
        let want = vec![
            ("x-test-only".to_string(), "value".to_string()),
            ("Authorization".to_string(), "Bearer 2".to_string()),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn request_options_builder() {
        let d = Duration::from_secs(123);
        let mut builder = TestBuilder::default().with_attempt_timeout(d);
        assert_eq!(builder.request_options().user_agent(), &None);
        assert_eq!(builder.request_options().attempt_timeout(), &Some(d));

        let mut builder = TestBuilder::default().with_fields(Vec::<String>::new());
        assert_eq!(builder.request_options().fields().as_deref(), Some(""));
    }
}
