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

//! Google APIs Client Libraries for Rust - Maps Engine API v1
//!
//! This crate contains REST bindings for a subset of the [Maps Engine API]:
//! assets, vector tables and their features, maps, layers, and projects.
//! Table files and project icons are uploaded as media, using a single
//! request for small sources and a resumable session for large ones.
//!
//! The client libraries do not manage credentials. Configure the
//! [reqwest::Client] passed to
//! [with_http_client()][gax::client_builder::ClientBuilder::with_http_client]
//! with the right `Authorization` header, or set the header on each request.
//!
//! # Example
//! ```
//! # use google_apis_mapsengine_v1::client::MapsEngine;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = MapsEngine::builder().build().await?;
//! let response = client
//!     .tables()
//!     .features()
//!     .list("12345678901234567890-12345678901234567890")
//!     .with_where("population > 100000")
//!     .with_limit(50)
//!     .send()
//!     .await?;
//! for feature in response.features {
//!     println!("{:?}", feature.geometry);
//! }
//! # Ok(()) }
//! ```
//!
//! [Maps Engine API]: https://developers.google.com/maps-engine

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

    /// The root URL, the method paths include the `mapsengine/v1/` prefix.
    pub(crate) const DEFAULT_HOST: &str = "https://www.googleapis.com";

    pub(crate) static X_GOOG_API_CLIENT: XGoogApiClient = XGoogApiClient {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        library_type: GDCL,
    };
}
