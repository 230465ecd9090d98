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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or supply an HTTP client
//! that is already configured to authenticate requests. The client libraries
//! use a generic builder type to provide such functionality. The types in this
//! module implement the client builders.
//!
//! The configuration is immutable once the client is built. Applications
//! should not create builders directly, instead each client type defines a
//! `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use google_apis_gax::client_builder::examples;
//! # use google_apis_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use google_apis_gax::client_builder::examples;
//! # use google_apis_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use google_apis_gax::client_builder::examples;
/// use google_apis_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().with_endpoint("not a URL").build().await {
///     Ok(c) => c,
///     Err(e) if e.is_endpoint() => {
///         println!("the endpoint is invalid: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the configured endpoint is not a valid URL.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Endpoint(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the configured endpoint is invalid")]
    Endpoint(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the client libraries a "client" represents a connection to a specific
/// service. Each client library defines one or more client types. All the
/// clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use google_apis_gax::client_builder::examples;
/// # use google_apis_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several method to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use google_apis_gax::client_builder::examples;
/// # use google_apis_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://private.googleapis.com")
///     .with_user_agent("my-application/1.0")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, H> {
    config: internal::ClientConfig<H>,
    factory: F,
}

impl<F, H> ClientBuilder<F, H> {
    /// Creates a new client.
    ///
    /// Fails if the configuration is invalid, for example, if the endpoint is
    /// not a valid URL.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, HttpClient = H>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// ```
    /// # use google_apis_gax::client_builder::examples;
    /// # use google_apis_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("http://private.googleapis.com")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use google_apis_gax::client_builder::examples;
    /// # use google_apis_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Appends a suffix to the `User-Agent` header on every request.
    ///
    /// Individual requests can override this value with
    /// [with_user_agent][crate::options::RequestOptionsBuilder::with_user_agent].
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Configure the HTTP client used to send requests.
    ///
    /// The client libraries do not manage credentials. Applications that need
    /// to authenticate their requests provide an HTTP client configured with
    /// the right default headers, or set the headers on each request.
    ///
    /// ```
    /// # use google_apis_gax::client_builder::examples;
    /// # use google_apis_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// // Placeholder, normally use `reqwest::Client`
    /// use examples::HttpClient;
    /// let client = Client::builder()
    ///     .with_http_client(HttpClient::new("Bearer placeholder-token"))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_http_client<T: Into<H>>(mut self, v: T) -> Self {
        self.config.http_client = Some(v.into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type HttpClient;
        fn build(
            self,
            config: internal::ClientConfig<Self::HttpClient>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, H, C>(factory: F) -> super::ClientBuilder<F, H>
    where
        F: ClientFactory<Client = C, HttpClient = H>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to a Google API. The default
    /// configuration for each client should work for most applications. But
    /// some applications may need to override the default endpoint, the HTTP
    /// client, and/or other behaviors of the client.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<H> {
        pub endpoint: Option<String>,
        pub http_client: Option<H>,
        pub user_agent: Option<String>,
        pub tracing: bool,
    }

    impl<H> std::default::Default for ClientConfig<H> {
        fn default() -> Self {
            Self {
                endpoint: None,
                http_client: None,
                user_agent: None,
                tracing: false,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<HttpClient>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            if let Some(e) = config.endpoint.as_deref() {
                if !e.starts_with("http://") && !e.starts_with("https://") {
                    return Err(super::Error::endpoint(format!("unsupported endpoint {e}")));
                }
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::HttpClient>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type HttpClient = super::HttpClient;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::HttpClient>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// A placeholder for `reqwest::Client`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct HttpClient {
        pub authorization: String,
    }

    impl HttpClient {
        pub fn new<V: Into<String>>(authorization: V) -> Self {
            Self {
                authorization: authorization.into(),
            }
        }
    }

}
