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

//! Request builders for the Fitness API.
//!
//! Each builder holds the required parameters, set when the builder is
//! created, and the optional parameters, set with the `with_*` methods.
//! Setting the same parameter twice keeps the last value. All the builders
//! implement [RequestOptionsBuilder][gax::options::RequestOptionsBuilder].

pub use gaxi::call::RawCall;

pub mod data_sources {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `fitness.users.dataSources.create`.
    #[derive(Clone, Debug)]
    pub struct Create(pub(crate) Call<model::DataSource>);

    impl Create {
        pub(crate) fn new<U: Into<String>>(
            inner: Arc<ReqwestClient>,
            user_id: U,
            body: model::DataSource,
        ) -> Self {
            let mut call = Call::new(inner, &methods::DATA_SOURCES_CREATE);
            call.set_path_param("userId", user_id);
            call.set_body(body);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::DataSource> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::DataSource> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.dataSources.get`.
    #[derive(Clone, Debug)]
    pub struct Get(pub(crate) Call<NoBody>);

    impl Get {
        pub(crate) fn new<U, D>(inner: Arc<ReqwestClient>, user_id: U, data_source_id: D) -> Self
        where
            U: Into<String>,
            D: Into<String>,
        {
            let mut call = Call::without_body(inner, &methods::DATA_SOURCES_GET);
            call.set_path_param("userId", user_id);
            call.set_path_param("dataSourceId", data_source_id);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::DataSource> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::DataSource> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.dataSources.list`.
    #[derive(Clone, Debug)]
    pub struct List(pub(crate) Call<NoBody>);

    impl List {
        pub(crate) fn new<U: Into<String>>(inner: Arc<ReqwestClient>, user_id: U) -> Self {
            let mut call = Call::without_body(inner, &methods::DATA_SOURCES_LIST);
            call.set_path_param("userId", user_id);
            Self(call)
        }

        /// Returns only the data sources for these data types.
        ///
        /// Each value is sent as a separate `dataTypeName` parameter.
        pub fn with_data_type_name<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0
                .query_mut()
                .set_repeated("dataTypeName", v.into_iter().map(Into::<String>::into));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::ListDataSourcesResponse> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::ListDataSourcesResponse> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.dataSources.update`.
    #[derive(Clone, Debug)]
    pub struct Update(pub(crate) Call<model::DataSource>);

    impl Update {
        pub(crate) fn new<U, D>(
            inner: Arc<ReqwestClient>,
            user_id: U,
            data_source_id: D,
            body: model::DataSource,
        ) -> Self
        where
            U: Into<String>,
            D: Into<String>,
        {
            let mut call = Call::new(inner, &methods::DATA_SOURCES_UPDATE);
            call.set_path_param("userId", user_id);
            call.set_path_param("dataSourceId", data_source_id);
            call.set_body(body);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::DataSource> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::DataSource> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.dataSources.patch`.
    #[derive(Clone, Debug)]
    pub struct Patch(pub(crate) Call<model::DataSource>);

    impl Patch {
        pub(crate) fn new<U, D>(
            inner: Arc<ReqwestClient>,
            user_id: U,
            data_source_id: D,
            body: model::DataSource,
        ) -> Self
        where
            U: Into<String>,
            D: Into<String>,
        {
            let mut call = Call::new(inner, &methods::DATA_SOURCES_PATCH);
            call.set_path_param("userId", user_id);
            call.set_path_param("dataSourceId", data_source_id);
            call.set_body(body);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::DataSource> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::DataSource> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Patch {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.dataSources.delete`.
    #[derive(Clone, Debug)]
    pub struct Delete(pub(crate) Call<NoBody>);

    impl Delete {
        pub(crate) fn new<U, D>(inner: Arc<ReqwestClient>, user_id: U, data_source_id: D) -> Self
        where
            U: Into<String>,
            D: Into<String>,
        {
            let mut call = Call::without_body(inner, &methods::DATA_SOURCES_DELETE);
            call.set_path_param("userId", user_id);
            call.set_path_param("dataSourceId", data_source_id);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::DataSource> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::DataSource> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod datasets {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    fn call<B, U, D, I>(
        inner: Arc<ReqwestClient>,
        method: &'static gaxi::method::Method,
        user_id: U,
        data_source_id: D,
        dataset_id: I,
    ) -> Call<B>
    where
        U: Into<String>,
        D: Into<String>,
        I: Into<String>,
    {
        let mut call = Call::new(inner, method);
        call.set_path_param("userId", user_id);
        call.set_path_param("dataSourceId", data_source_id);
        call.set_path_param("datasetId", dataset_id);
        call
    }

    /// The request builder for `fitness.users.dataSources.datasets.get`.
    #[derive(Clone, Debug)]
    pub struct Get(pub(crate) Call<NoBody>);

    impl Get {
        pub(crate) fn new<U, D, I>(
            inner: Arc<ReqwestClient>,
            user_id: U,
            data_source_id: D,
            dataset_id: I,
        ) -> Self
        where
            U: Into<String>,
            D: Into<String>,
            I: Into<String>,
        {
            Self(call(
                inner,
                &methods::DATASETS_GET,
                user_id,
                data_source_id,
                dataset_id,
            ))
        }

        /// Limits the number of points in the response.
        ///
        /// The response includes a `next_page_token` if more points remain.
        pub fn with_limit<V: Into<i32>>(mut self, v: V) -> Self {
            self.0.query_mut().set("limit", Into::<i32>::into(v));
            self
        }

        /// Continues a previous request, using its `next_page_token`.
        pub fn with_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("pageToken", Into::<String>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Dataset> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Dataset> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.dataSources.datasets.patch`.
    #[derive(Clone, Debug)]
    pub struct Patch(pub(crate) Call<model::Dataset>);

    impl Patch {
        pub(crate) fn new<U, D, I>(
            inner: Arc<ReqwestClient>,
            user_id: U,
            data_source_id: D,
            dataset_id: I,
            body: model::Dataset,
        ) -> Self
        where
            U: Into<String>,
            D: Into<String>,
            I: Into<String>,
        {
            let mut call = call(
                inner,
                &methods::DATASETS_PATCH,
                user_id,
                data_source_id,
                dataset_id,
            );
            call.set_body(body);
            Self(call)
        }

        /// The client's current time, in milliseconds since the epoch.
        pub fn with_current_time_millis<V: Into<i64>>(mut self, v: V) -> Self {
            self.0.query_mut().set("currentTimeMillis", Into::<i64>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Dataset> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Dataset> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Patch {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.dataSources.datasets.delete`.
    #[derive(Clone, Debug)]
    pub struct Delete(pub(crate) Call<NoBody>);

    impl Delete {
        pub(crate) fn new<U, D, I>(
            inner: Arc<ReqwestClient>,
            user_id: U,
            data_source_id: D,
            dataset_id: I,
        ) -> Self
        where
            U: Into<String>,
            D: Into<String>,
            I: Into<String>,
        {
            Self(call(
                inner,
                &methods::DATASETS_DELETE,
                user_id,
                data_source_id,
                dataset_id,
            ))
        }

        /// The client's current time, in milliseconds since the epoch.
        pub fn with_current_time_millis<V: Into<i64>>(mut self, v: V) -> Self {
            self.0.query_mut().set("currentTimeMillis", Into::<i64>::into(v));
            self
        }

        /// When the data was deleted, in milliseconds since the epoch.
        pub fn with_modified_time_millis<V: Into<i64>>(mut self, v: V) -> Self {
            self.0.query_mut().set("modifiedTimeMillis", Into::<i64>::into(v));
            self
        }

        /// Sends the request. The response body is never parsed.
        pub async fn send(self) -> crate::Result<()> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(self, cancel: &CancellationToken) -> crate::Result<()> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod sessions {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `fitness.users.sessions.list`.
    #[derive(Clone, Debug)]
    pub struct List(pub(crate) Call<NoBody>);

    impl List {
        pub(crate) fn new<U: Into<String>>(inner: Arc<ReqwestClient>, user_id: U) -> Self {
            let mut call = Call::without_body(inner, &methods::SESSIONS_LIST);
            call.set_path_param("userId", user_id);
            Self(call)
        }

        /// Returns only sessions of these activity types.
        pub fn with_activity_type<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<i32>,
        {
            self.0
                .query_mut()
                .set_repeated("activityType", v.into_iter().map(Into::<i32>::into));
            self
        }

        /// The start of the interval, as an RFC 3339 timestamp.
        pub fn with_start_time<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("startTime", Into::<String>::into(v));
            self
        }

        /// The end of the interval, as an RFC 3339 timestamp.
        pub fn with_end_time<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("endTime", Into::<String>::into(v));
            self
        }

        /// Includes the deleted sessions in the response.
        pub fn with_include_deleted<V: Into<bool>>(mut self, v: V) -> Self {
            self.0.query_mut().set("includeDeleted", Into::<bool>::into(v));
            self
        }

        /// Continues a previous request, using its `next_page_token`.
        pub fn with_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("pageToken", Into::<String>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::ListSessionsResponse> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::ListSessionsResponse> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.sessions.update`.
    #[derive(Clone, Debug)]
    pub struct Update(pub(crate) Call<model::Session>);

    impl Update {
        pub(crate) fn new<U, S>(
            inner: Arc<ReqwestClient>,
            user_id: U,
            session_id: S,
            body: model::Session,
        ) -> Self
        where
            U: Into<String>,
            S: Into<String>,
        {
            let mut call = Call::new(inner, &methods::SESSIONS_UPDATE);
            call.set_path_param("userId", user_id);
            call.set_path_param("sessionId", session_id);
            call.set_body(body);
            Self(call)
        }

        /// The client's current time, in milliseconds since the epoch.
        pub fn with_current_time_millis<V: Into<i64>>(mut self, v: V) -> Self {
            self.0.query_mut().set("currentTimeMillis", Into::<i64>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Session> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Session> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `fitness.users.sessions.delete`.
    #[derive(Clone, Debug)]
    pub struct Delete(pub(crate) Call<NoBody>);

    impl Delete {
        pub(crate) fn new<U, S>(inner: Arc<ReqwestClient>, user_id: U, session_id: S) -> Self
        where
            U: Into<String>,
            S: Into<String>,
        {
            let mut call = Call::without_body(inner, &methods::SESSIONS_DELETE);
            call.set_path_param("userId", user_id);
            call.set_path_param("sessionId", session_id);
            Self(call)
        }

        /// The client's current time, in milliseconds since the epoch.
        pub fn with_current_time_millis<V: Into<i64>>(mut self, v: V) -> Self {
            self.0.query_mut().set("currentTimeMillis", Into::<i64>::into(v));
            self
        }

        /// Sends the request. The response body is never parsed.
        pub async fn send(self) -> crate::Result<()> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(self, cancel: &CancellationToken) -> crate::Result<()> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}
