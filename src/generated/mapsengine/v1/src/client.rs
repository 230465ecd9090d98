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
use gax::upload_source::{Media, MediaSource};
use gaxi::http::ReqwestClient;
use std::sync::Arc;

/// Implements a client for the Maps Engine API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_apis_mapsengine_v1::client::MapsEngine;
/// let client = MapsEngine::builder().build().await?;
/// // use `client` to make requests to the Maps Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `MapsEngine` use the `with_*` methods in the type returned
/// by [builder()][MapsEngine::builder]. The default configuration should
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
/// `MapsEngine` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `MapsEngine` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_http_client()]: gax::client_builder::ClientBuilder::with_http_client
#[derive(Clone, Debug)]
pub struct MapsEngine {
    inner: Arc<ReqwestClient>,
}

/// A builder for [MapsEngine].
///
/// ```
/// # tokio_test::block_on(async {
/// # use google_apis_mapsengine_v1::client::MapsEngine;
/// let client = MapsEngine::builder()
///     .with_endpoint("https://private.googleapis.com")
///     .with_tracing()
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, reqwest::Client>;

pub(crate) mod client_builder {
    use super::MapsEngine;

    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = MapsEngine;
        type HttpClient = reqwest::Client;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

impl MapsEngine {
    /// Returns a builder for [MapsEngine].
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

    /// The `assets` resource, a read-only view over all the resource types.
    pub fn assets(&self) -> Assets {
        Assets {
            inner: self.inner.clone(),
        }
    }

    /// The `tables` resource, including its files and features.
    pub fn tables(&self) -> Tables {
        Tables {
            inner: self.inner.clone(),
        }
    }

    pub fn maps(&self) -> Maps {
        Maps {
            inner: self.inner.clone(),
        }
    }

    pub fn layers(&self) -> Layers {
        Layers {
            inner: self.inner.clone(),
        }
    }

    /// The `projects` resource, including the project icons.
    pub fn projects(&self) -> Projects {
        Projects {
            inner: self.inner.clone(),
        }
    }

    /// Creates an untyped request for the method `id`.
    ///
    /// Fails if `id` is not a method of this client. Media methods cannot be
    /// called this way, their upload paths are only used by the typed
    /// builders.
    ///
    /// # Example
    /// ```
    /// # use google_apis_mapsengine_v1::client::MapsEngine;
    /// # async fn sample(client: &MapsEngine) -> anyhow::Result<()> {
    /// let response = client
    ///     .raw_call("mapsengine.tables.features.list")?
    ///     .with_path_param("id", "table-id")
    ///     .with_query("where", "population > 100000")
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

/// Searches and reads assets of any type.
#[derive(Clone, Debug)]
pub struct Assets {
    inner: Arc<ReqwestClient>,
}

impl Assets {
    pub fn get<I: Into<String>>(&self, id: I) -> builder::assets::Get {
        builder::assets::Get::new(self.inner.clone(), id)
    }

    /// Lists the assets visible to the caller.
    ///
    /// # Example
    /// ```
    /// # use google_apis_mapsengine_v1::client::MapsEngine;
    /// # async fn sample(client: &MapsEngine) -> anyhow::Result<()> {
    /// let response = client
    ///     .assets()
    ///     .list()
    ///     .with_project_id("12345")
    ///     .with_tags(["roads", "2014"])
    ///     .send()
    ///     .await?;
    /// for asset in response.assets {
    ///     println!("{} {}", asset.r#type, asset.name);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list(&self) -> builder::assets::List {
        builder::assets::List::new(self.inner.clone())
    }
}

/// Manages vector tables.
#[derive(Clone, Debug)]
pub struct Tables {
    inner: Arc<ReqwestClient>,
}

impl Tables {
    pub fn get<I: Into<String>>(&self, id: I) -> builder::tables::Get {
        builder::tables::Get::new(self.inner.clone(), id)
    }

    pub fn list(&self) -> builder::tables::List {
        builder::tables::List::new(self.inner.clone())
    }

    /// Creates an empty table with the given schema.
    pub fn create(&self, body: model::Table) -> builder::tables::Create {
        builder::tables::Create::new(self.inner.clone(), body)
    }

    /// Creates a table populated from files.
    ///
    /// The files listed in `body` must then be uploaded using
    /// [files()][Self::files].
    pub fn upload(&self, body: model::Table) -> builder::tables::Upload {
        builder::tables::Upload::new(self.inner.clone(), body)
    }

    /// The files of a table created with [upload()][Self::upload].
    pub fn files(&self) -> TableFiles {
        TableFiles {
            inner: self.inner.clone(),
        }
    }

    /// The features, or rows, of a table.
    pub fn features(&self) -> Features {
        Features {
            inner: self.inner.clone(),
        }
    }
}

/// Uploads the source files of a table.
#[derive(Clone, Debug)]
pub struct TableFiles {
    inner: Arc<ReqwestClient>,
}

impl TableFiles {
    /// Uploads the file `filename` into the table `id`.
    ///
    /// `media` is any type convertible to [Media], e.g. a
    /// [bytes::Bytes](https://docs.rs/bytes), a `String`, or a
    /// [tokio::fs::File](https://docs.rs/tokio).
    pub fn insert<I, F, M, S>(&self, id: I, filename: F, media: M) -> builder::files::Insert<S>
    where
        I: Into<String>,
        F: Into<String>,
        M: Into<Media<S>>,
        S: MediaSource + Send + Sync,
    {
        builder::files::Insert::new(self.inner.clone(), id, filename, media)
    }
}

/// Reads and writes the features of a table.
#[derive(Clone, Debug)]
pub struct Features {
    inner: Arc<ReqwestClient>,
}

impl Features {
    /// Lists the features of the table `id`.
    pub fn list<I: Into<String>>(&self, id: I) -> builder::features::List {
        builder::features::List::new(self.inner.clone(), id)
    }

    /// Appends features to the table `id`.
    pub fn batch_insert<I: Into<String>>(
        &self,
        id: I,
        body: model::FeaturesBatchInsertRequest,
    ) -> builder::features::BatchInsert {
        builder::features::BatchInsert::new(self.inner.clone(), id, body)
    }

    /// Deletes features from the table `id`.
    pub fn batch_delete<I: Into<String>>(
        &self,
        id: I,
        body: model::FeaturesBatchDeleteRequest,
    ) -> builder::features::BatchDelete {
        builder::features::BatchDelete::new(self.inner.clone(), id, body)
    }
}

#[derive(Clone, Debug)]
pub struct Maps {
    inner: Arc<ReqwestClient>,
}

impl Maps {
    pub fn get<I: Into<String>>(&self, id: I) -> builder::maps::Get {
        builder::maps::Get::new(self.inner.clone(), id)
    }
}

#[derive(Clone, Debug)]
pub struct Layers {
    inner: Arc<ReqwestClient>,
}

impl Layers {
    pub fn get<I: Into<String>>(&self, id: I) -> builder::layers::Get {
        builder::layers::Get::new(self.inner.clone(), id)
    }

    /// Publishes the layer, making it visible to its viewers.
    pub fn publish<I: Into<String>>(&self, id: I) -> builder::layers::Publish {
        builder::layers::Publish::new(self.inner.clone(), id)
    }
}

#[derive(Clone, Debug)]
pub struct Projects {
    inner: Arc<ReqwestClient>,
}

impl Projects {
    /// Lists the projects visible to the caller.
    pub fn list(&self) -> builder::projects::List {
        builder::projects::List::new(self.inner.clone())
    }

    /// The icons of a project.
    pub fn icons(&self) -> Icons {
        Icons {
            inner: self.inner.clone(),
        }
    }
}

/// Manages the icons used to style point features.
#[derive(Clone, Debug)]
pub struct Icons {
    inner: Arc<ReqwestClient>,
}

impl Icons {
    /// Creates an icon in the project `project_id` from an image.
    ///
    /// # Example
    /// ```
    /// # use google_apis_mapsengine_v1::client::MapsEngine;
    /// # use google_apis_mapsengine_v1::model::Icon;
    /// # async fn sample(client: &MapsEngine, png: Vec<u8>) -> anyhow::Result<()> {
    /// let icon = client
    ///     .projects()
    ///     .icons()
    ///     .create("12345", Icon::new().set_name("pin"), png)
    ///     .send()
    ///     .await?;
    /// println!("created icon {}", icon.id);
    /// # Ok(()) }
    /// ```
    pub fn create<P, M, S>(
        &self,
        project_id: P,
        metadata: model::Icon,
        media: M,
    ) -> builder::icons::Create<S>
    where
        P: Into<String>,
        M: Into<Media<S>>,
        S: MediaSource + Send + Sync,
    {
        builder::icons::Create::new(self.inner.clone(), project_id, metadata, media)
    }
}
