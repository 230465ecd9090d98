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

//! Telemetry and `User-Agent` header helpers.

/// Generated libraries create one static instance of this struct and use it
/// to initialize the `x-goog-api-client` and `User-Agent` header values.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

/// The library type for clients generated from discovery documents.
pub const GDCL: &str = "gdcl";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// The product token at the start of every `User-Agent` header.
pub fn default_user_agent() -> String {
    format!("google-apis-rust/{}", build_info::PKG_VERSION)
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    pub fn header_value(&self) -> String {
        // Strip out the initial "rustc " string from `RUSTC_VERSION`. If not
        // found, leave RUSTC_VERSION unchanged.
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        let gax_version = build_info::PKG_VERSION;

        format!(
            "gl-rust/{rustc_version} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            self.library_type, self.version
        )
    }

    /// Format the `User-Agent` header, with an optional application suffix.
    pub fn user_agent(&self, suffix: Option<&str>) -> String {
        let base = format!("{} {}/{}", default_user_agent(), self.name, self.version);
        match suffix {
            Some(s) if !s.is_empty() => format!("{base} {s}"),
            _ => base,
        }
    }
}
