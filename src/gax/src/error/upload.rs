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

/// Problems detected while driving a resumable upload session.
///
/// These errors are always wrapped in an [Error][super::Error] where
/// [is_upload()][super::Error::is_upload] returns `true`. Use
/// [std::error::Error::source] and `downcast_ref()` to examine the details.
///
/// # Example
/// ```
/// # use google_apis_gax::error::{Error, UploadError};
/// use std::error::Error as _;
/// fn handle(e: Error) {
///     match e.source().and_then(|s| s.downcast_ref::<UploadError>()) {
///         Some(UploadError::MissingSessionUri) => println!("cannot start the upload"),
///         Some(u) => println!("the upload session failed: {u}"),
///         None => println!("some other error: {e}"),
///     }
/// }
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum UploadError {
    /// The initiating response did not include a usable session URI.
    ///
    /// # Troubleshoot
    ///
    /// The service returns the session URI in the `Location` header. A
    /// successful response without this header may indicate that a proxy
    /// between the application and the service is stripping headers.
    #[error("the upload session response is missing a valid `Location` header")]
    MissingSessionUri,

    /// The service has "uncommitted" previously persisted bytes.
    ///
    /// # Troubleshoot
    ///
    /// In the resumable upload protocol the service reports how many bytes
    /// are persisted. This error indicates that the service previously
    /// reported more bytes as persisted than in the latest report. This
    /// indicates a corrupted message or a bug, in either the client or the
    /// service.
    #[error(
        "the service previously persisted {offset} bytes, but now reports only {persisted} as persisted"
    )]
    UnexpectedRewind { offset: u64, persisted: u64 },

    /// The service reports more bytes persisted than sent.
    ///
    /// # Troubleshoot
    ///
    /// Most likely this indicates that two concurrent uploads are using the
    /// same session URI.
    #[error("the service reports {persisted} bytes as persisted, but we only sent {sent} bytes")]
    TooMuchProgress { sent: u64, persisted: u64 },

    /// The service returned a `Range` header that cannot be parsed.
    #[error("cannot parse the `Range` header in the upload response: {0:?}")]
    InvalidRange(String),

    /// The media source produced a different number of bytes than declared.
    ///
    /// # Troubleshoot
    ///
    /// The upload declares the total size before sending any data. Verify
    /// the media source is not modified while the upload is in progress.
    #[error("the media source declared {expected} bytes, but produced {got}")]
    SizeMismatch { expected: u64, got: u64 },

    /// The upload already completed or failed.
    ///
    /// # Troubleshoot
    ///
    /// An upload runs at most once. Use the session URI to resume a failed
    /// upload with a different tool, or create a new upload.
    #[error("the upload session is already closed")]
    SessionClosed,
}
