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

//! Google APIs Client Libraries for Rust - Fitness API v1
//!
//! This crate contains REST bindings for a subset of the [Fitness API]:
//! data sources, their datasets, and sessions.
//!
//! The client libraries do not manage credentials. Configure the
//! [reqwest::Client] passed to
//! [with_http_client()][gax::client_builder::ClientBuilder::with_http_client]
//! with the right `Authorization` header, or set the header on each request.
//!
//! # Example
//! ```
//! # use google_apis_fitness_v1::client::Fitness;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = Fitness::builder().build().await?;
//! let response = client
//!     .data_sources()
//!     .list("me")
//!     .with_data_type_name(["com.google.step_count.delta"])
//!     .send()
//!     .await?;
//! for source in response.data_source {
//!     println!("{source:?}");
//! }
//! # Ok(()) }
//! ```
//!
//! [Fitness API]: https://developers.google.com/fit/rest

/// The error type for this crate.
pub use gax::error::Error;

/// The result type for this crate.
pub use gax::Result;

/// The request builders.
pub mod builder;

/// The client and the per-resource services.
pub mod client;

/// The messages and enums that are part of this client library.
pub mod model;

pub(crate) mod methods;

pub(crate) mod info {
    use gaxi::api_header::{GDCL, XGoogApiClient};

    /// The root URL, the method paths include the `fitness/v1/users/` prefix.
    pub(crate) const DEFAULT_HOST: &str = "https://www.googleapis.com";

    pub(crate) static X_GOOG_API_CLIENT: XGoogApiClient = XGoogApiClient {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        library_type: GDCL,
    };
}
