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

//! Request builders for the Maps Engine API.
//!
//! Each builder holds the required parameters, set when the builder is
//! created, and the optional parameters, set with the `with_*` methods.
//! Setting the same parameter twice keeps the last value. All the builders
//! implement [RequestOptionsBuilder][gax::options::RequestOptionsBuilder].
//!
//! The builders for media methods ([files::Insert] and [icons::Create]) also
//! configure the upload. They can be converted into an [UploadSession] to
//! inspect the upload state and the resumable session URI after sending.

pub use gaxi::call::RawCall;
pub use gaxi::upload::UploadSession;

/// Formats a bounding box as the `bbox` query parameter.
fn bbox_param(v: crate::model::LatLngBox) -> String {
    format!("{},{},{},{}", v.west, v.south, v.east, v.north)
}

/// Formats a list of tags as the `tags` query parameter.
fn tags_param<T, V>(v: T) -> String
where
    T: IntoIterator<Item = V>,
    V: Into<String>,
{
    v.into_iter().map(Into::into).collect::<Vec<String>>().join(",")
}

pub mod assets {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.assets.get`.
    #[derive(Clone, Debug)]
    pub struct Get(pub(crate) Call<NoBody>);

    impl Get {
        pub(crate) fn new<I: Into<String>>(inner: Arc<ReqwestClient>, id: I) -> Self {
            let mut call = Call::without_body(inner, &methods::ASSETS_GET);
            call.set_path_param("id", id);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Asset> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Asset> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `mapsengine.assets.list`.
    ///
    /// All the filters are optional. Filters on different fields must all
    /// match.
    #[derive(Clone, Debug)]
    pub struct List(pub(crate) Call<NoBody>);

    impl List {
        pub(crate) fn new(inner: Arc<ReqwestClient>) -> Self {
            Self(Call::without_body(inner, &methods::ASSETS_LIST))
        }

        /// Returns only assets intersecting this bounding box.
        pub fn with_bbox(mut self, v: model::LatLngBox) -> Self {
            self.0.query_mut().set("bbox", super::bbox_param(v));
            self
        }

        /// Returns only assets created after this RFC 3339 timestamp.
        pub fn with_created_after<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("createdAfter", Into::<String>::into(v));
            self
        }

        /// Returns only assets created before this RFC 3339 timestamp.
        pub fn with_created_before<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("createdBefore", Into::<String>::into(v));
            self
        }

        pub fn with_creator_email<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("creatorEmail", Into::<String>::into(v));
            self
        }

        /// The maximum number of items in each page.
        pub fn with_max_results<V: Into<i32>>(mut self, v: V) -> Self {
            self.0.query_mut().set("maxResults", Into::<i32>::into(v));
            self
        }

        pub fn with_modified_after<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("modifiedAfter", Into::<String>::into(v));
            self
        }

        pub fn with_modified_before<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("modifiedBefore", Into::<String>::into(v));
            self
        }

        pub fn with_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("pageToken", Into::<String>::into(v));
            self
        }

        pub fn with_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("projectId", Into::<String>::into(v));
            self
        }

        /// Returns only assets where the caller has this role, e.g. `owner`.
        pub fn with_role<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("role", Into::<String>::into(v));
            self
        }

        /// Returns only assets whose name, description, or tags match.
        pub fn with_search<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("search", Into::<String>::into(v));
            self
        }

        /// Returns only assets with all these tags.
        ///
        /// The tags are sent as a single comma-separated value.
        pub fn with_tags<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.query_mut().set("tags", super::tags_param(v));
            self
        }

        /// Returns only assets of this type, e.g. `table`.
        pub fn with_type<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("type", Into::<String>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::AssetsListResponse> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::AssetsListResponse> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod tables {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.tables.get`.
    #[derive(Clone, Debug)]
    pub struct Get(pub(crate) Call<NoBody>);

    impl Get {
        pub(crate) fn new<I: Into<String>>(inner: Arc<ReqwestClient>, id: I) -> Self {
            let mut call = Call::without_body(inner, &methods::TABLES_GET);
            call.set_path_param("id", id);
            Self(call)
        }

        /// Selects the `draft` or the `published` version of the table.
        pub fn with_version<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("version", Into::<String>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Table> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Table> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `mapsengine.tables.list`.
    #[derive(Clone, Debug)]
    pub struct List(pub(crate) Call<NoBody>);

    impl List {
        pub(crate) fn new(inner: Arc<ReqwestClient>) -> Self {
            Self(Call::without_body(inner, &methods::TABLES_LIST))
        }

        /// Returns only tables intersecting this bounding box.
        pub fn with_bbox(mut self, v: model::LatLngBox) -> Self {
            self.0.query_mut().set("bbox", super::bbox_param(v));
            self
        }

        pub fn with_max_results<V: Into<i32>>(mut self, v: V) -> Self {
            self.0.query_mut().set("maxResults", Into::<i32>::into(v));
            self
        }

        pub fn with_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("pageToken", Into::<String>::into(v));
            self
        }

        pub fn with_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("projectId", Into::<String>::into(v));
            self
        }

        pub fn with_search<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("search", Into::<String>::into(v));
            self
        }

        /// Returns only tables with all these tags, sent comma-separated.
        pub fn with_tags<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.query_mut().set("tags", super::tags_param(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::TablesListResponse> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::TablesListResponse> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `mapsengine.tables.create`.
    ///
    /// The table must have a name, a project id, and a schema.
    #[derive(Clone, Debug)]
    pub struct Create(pub(crate) Call<model::Table>);

    impl Create {
        pub(crate) fn new(inner: Arc<ReqwestClient>, body: model::Table) -> Self {
            let mut call = Call::new(inner, &methods::TABLES_CREATE);
            call.set_body(body);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Table> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Table> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `mapsengine.tables.upload`.
    ///
    /// Creates a table whose contents come from files. The body lists the
    /// file names, each file is then sent with
    /// [files().insert()][crate::client::Tables::files].
    #[derive(Clone, Debug)]
    pub struct Upload(pub(crate) Call<model::Table>);

    impl Upload {
        pub(crate) fn new(inner: Arc<ReqwestClient>, body: model::Table) -> Self {
            let mut call = Call::new(inner, &methods::TABLES_UPLOAD);
            call.set_body(body);
            Self(call)
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Table> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Table> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Upload {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod files {
    use super::UploadSession;
    use crate::methods;
    use gax::options::RequestOptions;
    use gax::upload_source::{Media, MediaSource, UploadProgress};
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use gaxi::upload::UploadConfig;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.tables.files.insert`.
    ///
    /// Uploads one of the files named when the table was created with
    /// [tables().upload()][crate::client::Tables::upload]. The method has no
    /// metadata, small files use a single `uploadType=media` request.
    ///
    /// # Example
    /// ```
    /// # use google_apis_mapsengine_v1::client::MapsEngine;
    /// # async fn sample(client: &MapsEngine) -> anyhow::Result<()> {
    /// let file = tokio::fs::File::open("cities.csv").await?;
    /// client
    ///     .tables()
    ///     .files()
    ///     .insert("table-id", "cities.csv", file)
    ///     .with_content_type("text/csv")
    ///     .with_progress_callback(|p| println!("{}/{}", p.bytes_sent, p.total))
    ///     .send()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    #[derive(Debug)]
    pub struct Insert<S> {
        pub(crate) call: Call<NoBody>,
        pub(crate) media: Media<S>,
        pub(crate) config: UploadConfig,
    }

    impl<S> Insert<S>
    where
        S: MediaSource + Send + Sync,
    {
        pub(crate) fn new<I, F, M>(inner: Arc<ReqwestClient>, id: I, filename: F, media: M) -> Self
        where
            I: Into<String>,
            F: Into<String>,
            M: Into<Media<S>>,
        {
            let mut call = Call::without_body(inner, &methods::TABLES_FILES_INSERT);
            call.set_path_param("id", id);
            call.query_mut()
                .set("filename", Into::<String>::into(filename));
            Self {
                call,
                media: media.into(),
                config: UploadConfig::default(),
            }
        }

        /// The size of each chunk in resumable uploads, rounded up to a
        /// multiple of 256 KiB.
        pub fn with_chunk_size(mut self, v: usize) -> Self {
            self.config.set_chunk_size(v);
            self
        }

        /// Files smaller than this value are sent in a single request. Use
        /// `0` to always use a resumable upload.
        pub fn with_resumable_threshold(mut self, v: u64) -> Self {
            self.config.set_resumable_threshold(v);
            self
        }

        /// The media type of the file. By default it is guessed from the
        /// first bytes of the file.
        pub fn with_content_type<V: Into<String>>(mut self, v: V) -> Self {
            self.config.set_content_type(v);
            self
        }

        /// Called after each acknowledged chunk and once on completion.
        pub fn with_progress_callback<F>(mut self, f: F) -> Self
        where
            F: Fn(UploadProgress) + Send + Sync + 'static,
        {
            self.config.set_progress_callback(f);
            self
        }

        /// Prepares the upload without sending any request.
        ///
        /// Fails if the path parameters are invalid.
        pub fn into_session(self) -> crate::Result<UploadSession<Media<S>, ()>> {
            let upload = self.call.into_upload(self.media, self.config)?;
            Ok(UploadSession::new(upload))
        }

        /// Uploads the file.
        pub async fn send(self) -> crate::Result<()> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Uploads the file, aborting the upload if `cancel` fires first.
        pub async fn send_with_cancellation(self, cancel: &CancellationToken) -> crate::Result<()> {
            self.into_session()?.send_with_cancellation(cancel).await
        }
    }

    impl<S> gax::options::internal::RequestBuilder for Insert<S> {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.call.options_mut()
        }
    }
}

pub mod features {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.tables.features.list`.
    #[derive(Clone, Debug)]
    pub struct List(pub(crate) Call<NoBody>);

    impl List {
        pub(crate) fn new<I: Into<String>>(inner: Arc<ReqwestClient>, id: I) -> Self {
            let mut call = Call::without_body(inner, &methods::FEATURES_LIST);
            call.set_path_param("id", id);
            Self(call)
        }

        /// Set to `geometry` to include the geometry of each feature.
        pub fn with_include<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("include", Into::<String>::into(v));
            self
        }

        /// Returns only features intersecting this geometry, in WKT.
        pub fn with_intersects<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("intersects", Into::<String>::into(v));
            self
        }

        /// The maximum number of features in the response.
        pub fn with_limit<V: Into<i32>>(mut self, v: V) -> Self {
            self.0.query_mut().set("limit", Into::<i32>::into(v));
            self
        }

        /// The maximum number of features in each page.
        pub fn with_max_results<V: Into<i32>>(mut self, v: V) -> Self {
            self.0.query_mut().set("maxResults", Into::<i32>::into(v));
            self
        }

        /// A SQL-like ordering, e.g. `population DESC`.
        pub fn with_order_by<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("orderBy", Into::<String>::into(v));
            self
        }

        pub fn with_page_token<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("pageToken", Into::<String>::into(v));
            self
        }

        /// A SQL-like projection, e.g. `name, ST_DISTANCE(geometry, ST_POINT(0, 0))`.
        pub fn with_select<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("select", Into::<String>::into(v));
            self
        }

        /// Selects the `draft` or the `published` version of the table.
        pub fn with_version<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("version", Into::<String>::into(v));
            self
        }

        /// A SQL-like predicate, e.g. `population > 100000`.
        pub fn with_where<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("where", Into::<String>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::FeaturesListResponse> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::FeaturesListResponse> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `mapsengine.tables.features.batchInsert`.
    #[derive(Clone, Debug)]
    pub struct BatchInsert(pub(crate) Call<model::FeaturesBatchInsertRequest>);

    impl BatchInsert {
        pub(crate) fn new<I: Into<String>>(
            inner: Arc<ReqwestClient>,
            id: I,
            body: model::FeaturesBatchInsertRequest,
        ) -> Self {
            let mut call = Call::new(inner, &methods::FEATURES_BATCH_INSERT);
            call.set_path_param("id", id);
            call.set_body(body);
            Self(call)
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

    impl gax::options::internal::RequestBuilder for BatchInsert {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `mapsengine.tables.features.batchDelete`.
    #[derive(Clone, Debug)]
    pub struct BatchDelete(pub(crate) Call<model::FeaturesBatchDeleteRequest>);

    impl BatchDelete {
        pub(crate) fn new<I: Into<String>>(
            inner: Arc<ReqwestClient>,
            id: I,
            body: model::FeaturesBatchDeleteRequest,
        ) -> Self {
            let mut call = Call::new(inner, &methods::FEATURES_BATCH_DELETE);
            call.set_path_param("id", id);
            call.set_body(body);
            Self(call)
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

    impl gax::options::internal::RequestBuilder for BatchDelete {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod maps {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.maps.get`.
    #[derive(Clone, Debug)]
    pub struct Get(pub(crate) Call<NoBody>);

    impl Get {
        pub(crate) fn new<I: Into<String>>(inner: Arc<ReqwestClient>, id: I) -> Self {
            let mut call = Call::without_body(inner, &methods::MAPS_GET);
            call.set_path_param("id", id);
            Self(call)
        }

        /// Selects the `draft` or the `published` version of the map.
        pub fn with_version<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("version", Into::<String>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Map> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Map> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod layers {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.layers.get`.
    #[derive(Clone, Debug)]
    pub struct Get(pub(crate) Call<NoBody>);

    impl Get {
        pub(crate) fn new<I: Into<String>>(inner: Arc<ReqwestClient>, id: I) -> Self {
            let mut call = Call::without_body(inner, &methods::LAYERS_GET);
            call.set_path_param("id", id);
            Self(call)
        }

        /// Selects the `draft` or the `published` version of the layer.
        pub fn with_version<V: Into<String>>(mut self, v: V) -> Self {
            self.0.query_mut().set("version", Into::<String>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::Layer> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Layer> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }

    /// The request builder for `mapsengine.layers.publish`.
    #[derive(Clone, Debug)]
    pub struct Publish(pub(crate) Call<NoBody>);

    impl Publish {
        pub(crate) fn new<I: Into<String>>(inner: Arc<ReqwestClient>, id: I) -> Self {
            let mut call = Call::without_body(inner, &methods::LAYERS_PUBLISH);
            call.set_path_param("id", id);
            Self(call)
        }

        /// Publishes even if the layer has unpublished datasources.
        pub fn with_force<V: Into<bool>>(mut self, v: V) -> Self {
            self.0.query_mut().set("force", Into::<bool>::into(v));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::PublishResponse> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::PublishResponse> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for Publish {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod projects {
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gaxi::call::Call;
    use gaxi::http::{NoBody, ReqwestClient};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.projects.list`.
    #[derive(Clone, Debug)]
    pub struct List(pub(crate) Call<NoBody>);

    impl List {
        pub(crate) fn new(inner: Arc<ReqwestClient>) -> Self {
            Self(Call::without_body(inner, &methods::PROJECTS_LIST))
        }

        /// Sends the request.
        pub async fn send(self) -> crate::Result<model::ProjectsListResponse> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Sends the request, aborting it if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::ProjectsListResponse> {
            self.0.send(cancel).await
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.0.options_mut()
        }
    }
}

pub mod icons {
    use super::UploadSession;
    use crate::methods;
    use crate::model;
    use gax::options::RequestOptions;
    use gax::upload_source::{Media, MediaSource, UploadProgress};
    use gaxi::call::Call;
    use gaxi::http::ReqwestClient;
    use gaxi::upload::UploadConfig;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// The request builder for `mapsengine.projects.icons.create`.
    ///
    /// The icon metadata is sent with the image, as a `multipart/related`
    /// request for small images, or in the request starting a resumable
    /// upload.
    #[derive(Debug)]
    pub struct Create<S> {
        pub(crate) call: Call<model::Icon>,
        pub(crate) media: Media<S>,
        pub(crate) config: UploadConfig,
    }

    impl<S> Create<S>
    where
        S: MediaSource + Send + Sync,
    {
        pub(crate) fn new<P, M>(
            inner: Arc<ReqwestClient>,
            project_id: P,
            metadata: model::Icon,
            media: M,
        ) -> Self
        where
            P: Into<String>,
            M: Into<Media<S>>,
        {
            let mut call = Call::new(inner, &methods::ICONS_CREATE);
            call.set_path_param("projectId", project_id);
            call.set_body(metadata);
            Self {
                call,
                media: media.into(),
                config: UploadConfig::default(),
            }
        }

        /// The size of each chunk in resumable uploads, rounded up to a
        /// multiple of 256 KiB.
        pub fn with_chunk_size(mut self, v: usize) -> Self {
            self.config.set_chunk_size(v);
            self
        }

        /// Images smaller than this value are sent in a single request.
        pub fn with_resumable_threshold(mut self, v: u64) -> Self {
            self.config.set_resumable_threshold(v);
            self
        }

        /// The media type of the image, e.g. `image/png`. By default it is
        /// guessed from the first bytes of the image.
        pub fn with_content_type<V: Into<String>>(mut self, v: V) -> Self {
            self.config.set_content_type(v);
            self
        }

        pub fn with_progress_callback<F>(mut self, f: F) -> Self
        where
            F: Fn(UploadProgress) + Send + Sync + 'static,
        {
            self.config.set_progress_callback(f);
            self
        }

        /// Prepares the upload without sending any request.
        pub fn into_session(self) -> crate::Result<UploadSession<Media<S>, model::Icon>> {
            let upload = self.call.into_upload(self.media, self.config)?;
            Ok(UploadSession::new(upload))
        }

        /// Uploads the image and returns the new icon.
        pub async fn send(self) -> crate::Result<model::Icon> {
            self.send_with_cancellation(&CancellationToken::new())
                .await
        }

        /// Uploads the image, aborting the upload if `cancel` fires first.
        pub async fn send_with_cancellation(
            self,
            cancel: &CancellationToken,
        ) -> crate::Result<model::Icon> {
            self.into_session()?.send_with_cancellation(cancel).await
        }
    }

    impl<S> gax::options::internal::RequestBuilder for Create<S> {
        fn request_options(&mut self) -> &mut RequestOptions {
            self.call.options_mut()
        }
    }
}
