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

use crate::builder;
use crate::methods;
use crate::model;
use gaxi::http::ReqwestClient;
use std::sync::Arc;

/// Implements a client for the Fitness API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_apis_fitness_v1::client::Fitness;
/// let client = Fitness::builder().build().await?;
/// // use `client` to make requests to the Fitness API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Fitness` use the `with_*` methods in the type returned
/// by [builder()][Fitness::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://www.googleapis.com`).
/// * [with_http_client()]: the client does not authenticate requests,
///   applications provide a [reqwest::Client] with the right default
///   headers.
///
/// # Pooling and Cloning
///
/// `Fitness` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Fitness` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_http_client()]: gax::client_builder::ClientBuilder::with_http_client
#[derive(Clone, Debug)]
pub struct Fitness {
    inner: Arc<ReqwestClient>,
}

/// A builder for [Fitness].
///
/// ```
/// # tokio_test::block_on(async {
/// # use google_apis_fitness_v1::client::Fitness;
/// let client = Fitness::builder()
///     .with_endpoint("https://private.googleapis.com")
///     .with_user_agent("my-app/1.0")
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, reqwest::Client>;

pub(crate) mod client_builder {
    use super::Fitness;

    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Fitness;
        type HttpClient = reqwest::Client;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

impl Fitness {
    /// Returns a builder for [Fitness].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(
            config,
            crate::info::DEFAULT_HOST,
            &crate::info::X_GOOG_API_CLIENT,
        )?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// The `users.dataSources` resource.
    pub fn data_sources(&self) -> DataSources {
        DataSources {
            inner: self.inner.clone(),
        }
    }

    /// The `users.dataSources.datasets` resource.
    pub fn datasets(&self) -> Datasets {
        Datasets {
            inner: self.inner.clone(),
        }
    }

    /// The `users.sessions` resource.
    pub fn sessions(&self) -> Sessions {
        Sessions {
            inner: self.inner.clone(),
        }
    }

    /// Creates an untyped request for the method `id`.
    ///
    /// Fails if `id` is not a method of this client.
    ///
    /// # Example
    /// ```
    /// # use google_apis_fitness_v1::client::Fitness;
    /// # async fn sample(client: &Fitness) -> anyhow::Result<()> {
    /// let response = client
    ///     .raw_call("fitness.users.sessions.list")?
    ///     .with_path_param("userId", "me")
    ///     .with_query("includeDeleted", true)
    ///     .send()
    ///     .await?;
    /// println!("{response}");
    /// # Ok(()) }
    /// ```
    pub fn raw_call(&self, id: &str) -> crate::Result<builder::RawCall> {
        let method = methods::DISPATCH.find(id)?;
        Ok(builder::RawCall::new(self.inner.clone(), method))
    }

    /// The ids of all the methods supported by [raw_call()][Self::raw_call],
    /// in lexicographic order.
    pub fn method_ids() -> Vec<&'static str> {
        methods::DISPATCH.ids()
    }
}

/// Manages the data sources of a user.
///
/// A data source is a unique stream of data points, produced by one
/// application or device.
#[derive(Clone, Debug)]
pub struct DataSources {
    inner: Arc<ReqwestClient>,
}

impl DataSources {
    /// Creates a new data source.
    ///
    /// # Parameters
    /// * `user_id` - the user, `me` for the authenticated user.
    /// * `body` - the data source. Do not set the `data_stream_id`, the
    ///   service computes it.
    pub fn create<U>(&self, user_id: U, body: model::DataSource) -> builder::data_sources::Create
    where
        U: Into<String>,
    {
        builder::data_sources::Create::new(self.inner.clone(), user_id, body)
    }

    /// Gets a data source.
    pub fn get<U, D>(&self, user_id: U, data_source_id: D) -> builder::data_sources::Get
    where
        U: Into<String>,
        D: Into<String>,
    {
        builder::data_sources::Get::new(self.inner.clone(), user_id, data_source_id)
    }

    /// Lists the data sources visible to the caller.
    pub fn list<U: Into<String>>(&self, user_id: U) -> builder::data_sources::List {
        builder::data_sources::List::new(self.inner.clone(), user_id)
    }

    /// Replaces a data source.
    ///
    /// Only the application version, the device version, and the data
    /// stream name may change.
    pub fn update<U, D>(
        &self,
        user_id: U,
        data_source_id: D,
        body: model::DataSource,
    ) -> builder::data_sources::Update
    where
        U: Into<String>,
        D: Into<String>,
    {
        builder::data_sources::Update::new(self.inner.clone(), user_id, data_source_id, body)
    }

    /// Updates a data source, with patch semantics.
    pub fn patch<U, D>(
        &self,
        user_id: U,
        data_source_id: D,
        body: model::DataSource,
    ) -> builder::data_sources::Patch
    where
        U: Into<String>,
        D: Into<String>,
    {
        builder::data_sources::Patch::new(self.inner.clone(), user_id, data_source_id, body)
    }

    /// Deletes a data source, returning the deleted resource.
    pub fn delete<U, D>(&self, user_id: U, data_source_id: D) -> builder::data_sources::Delete
    where
        U: Into<String>,
        D: Into<String>,
    {
        builder::data_sources::Delete::new(self.inner.clone(), user_id, data_source_id)
    }
}

/// Manages the data points of a data source.
///
/// Datasets are identified by a [DatasetId][model::DatasetId], the time
/// interval covering their points.
#[derive(Clone, Debug)]
pub struct Datasets {
    inner: Arc<ReqwestClient>,
}

impl Datasets {
    /// Gets the points of a data source in a time interval.
    ///
    /// # Example
    /// ```
    /// # use google_apis_fitness_v1::client::Fitness;
    /// # use google_apis_fitness_v1::model::DatasetId;
    /// # async fn sample(client: &Fitness) -> anyhow::Result<()> {
    /// let dataset = client
    ///     .datasets()
    ///     .get("me", "derived:com.google.step_count.delta:merged", DatasetId::new(0, 1_000_000))
    ///     .with_limit(100)
    ///     .send()
    ///     .await?;
    /// println!("{} points", dataset.point.len());
    /// # Ok(()) }
    /// ```
    pub fn get<U, D, I>(&self, user_id: U, data_source_id: D, dataset_id: I) -> builder::datasets::Get
    where
        U: Into<String>,
        D: Into<String>,
        I: Into<String>,
    {
        builder::datasets::Get::new(self.inner.clone(), user_id, data_source_id, dataset_id)
    }

    /// Adds points to a dataset.
    pub fn patch<U, D, I>(
        &self,
        user_id: U,
        data_source_id: D,
        dataset_id: I,
        body: model::Dataset,
    ) -> builder::datasets::Patch
    where
        U: Into<String>,
        D: Into<String>,
        I: Into<String>,
    {
        builder::datasets::Patch::new(
            self.inner.clone(),
            user_id,
            data_source_id,
            dataset_id,
            body,
        )
    }

    /// Deletes the points of a data source in a time interval.
    pub fn delete<U, D, I>(
        &self,
        user_id: U,
        data_source_id: D,
        dataset_id: I,
    ) -> builder::datasets::Delete
    where
        U: Into<String>,
        D: Into<String>,
        I: Into<String>,
    {
        builder::datasets::Delete::new(self.inner.clone(), user_id, data_source_id, dataset_id)
    }
}

/// Manages the sessions of a user.
#[derive(Clone, Debug)]
pub struct Sessions {
    inner: Arc<ReqwestClient>,
}

impl Sessions {
    /// Lists the sessions of a user.
    pub fn list<U: Into<String>>(&self, user_id: U) -> builder::sessions::List {
        builder::sessions::List::new(self.inner.clone(), user_id)
    }

    /// Creates or replaces a session.
    pub fn update<U, S>(
        &self,
        user_id: U,
        session_id: S,
        body: model::Session,
    ) -> builder::sessions::Update
    where
        U: Into<String>,
        S: Into<String>,
    {
        builder::sessions::Update::new(self.inner.clone(), user_id, session_id, body)
    }

    /// Deletes a session.
    pub fn delete<U, S>(&self, user_id: U, session_id: S) -> builder::sessions::Delete
    where
        U: Into<String>,
        S: Into<String>,
    {
        builder::sessions::Delete::new(self.inner.clone(), user_id, session_id)
    }
}
