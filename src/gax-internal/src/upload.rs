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

//! Media uploads, using either a single request or a resumable session.
//!
//! A resumable upload starts with a POST to the method's upload path. The
//! service returns the session URI in the `Location` header. The client then
//! sends the media in sequential chunks, each a PUT to the session URI with a
//! `Content-Range` header. The service replies `308` while the upload is
//! incomplete, with a `Range` header reporting the bytes persisted so far,
//! and a `2xx` with the method's response once all the bytes are received.

use crate::http::{ReqwestClient, cancellable, to_http_error, to_http_response};
use crate::method::{Method, Payload};
use crate::query_parameter::QueryParams;
use gax::Result;
use gax::error::{Error, UploadError};
use gax::options::RequestOptions;
use gax::upload_source::{MediaSource, UploadProgress, UploadState};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Chunk sizes must be a multiple of this value.
pub const RESUMABLE_UPLOAD_QUANTUM: usize = 256 * 1024;

pub const DEFAULT_CHUNK_SIZE: usize = 32 * RESUMABLE_UPLOAD_QUANTUM;

/// Sources smaller than this value use a single request.
pub const DEFAULT_RESUMABLE_THRESHOLD: u64 = 16 * 1024 * 1024;

/// The number of bytes examined to guess the media type.
const SNIFF_SIZE: usize = 512;

const RESUME_INCOMPLETE: reqwest::StatusCode = reqwest::StatusCode::PERMANENT_REDIRECT;

pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// The application configuration for one upload.
#[derive(Clone)]
pub struct UploadConfig {
    chunk_size: usize,
    resumable_threshold: u64,
    content_type: Option<String>,
    progress: Option<ProgressCallback>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            resumable_threshold: DEFAULT_RESUMABLE_THRESHOLD,
            content_type: None,
            progress: None,
        }
    }
}

impl std::fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadConfig")
            .field("chunk_size", &self.chunk_size)
            .field("resumable_threshold", &self.resumable_threshold)
            .field("content_type", &self.content_type)
            .field("progress", &self.progress.as_ref().map(|_| "..."))
            .finish()
    }
}

impl UploadConfig {
    /// Sets the chunk size, rounded up to a multiple of
    /// [RESUMABLE_UPLOAD_QUANTUM].
    pub fn set_chunk_size(&mut self, v: usize) {
        self.chunk_size = v
            .div_ceil(RESUMABLE_UPLOAD_QUANTUM)
            .max(1)
            .saturating_mul(RESUMABLE_UPLOAD_QUANTUM);
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Sets the size below which uploads use a single request. `0` forces a
    /// resumable upload.
    pub fn set_resumable_threshold(&mut self, v: u64) {
        self.resumable_threshold = v;
    }

    pub fn resumable_threshold(&self) -> u64 {
        self.resumable_threshold
    }

    /// Sets the media type. Without it the media type is guessed from the
    /// first bytes of the source.
    pub fn set_content_type<V: Into<String>>(&mut self, v: V) {
        self.content_type = Some(v.into());
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Sets a callback invoked after each chunk.
    ///
    /// The callback runs in the task driving the upload, it must not block.
    pub fn set_progress_callback<F>(&mut self, f: F)
    where
        F: Fn(UploadProgress) + Send + Sync + 'static,
    {
        self.progress = Some(Arc::new(f));
    }
}

/// Tracks the bytes persisted by the service.
///
/// The cursor never moves backwards and never exceeds the total size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressCursor {
    committed: u64,
    total: u64,
}

impl ProgressCursor {
    pub fn new(total: u64) -> Self {
        Self {
            committed: 0,
            total,
        }
    }

    pub fn committed(&self) -> u64 {
        self.committed
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Records a `308` reply after sending the bytes up to `sent`.
    ///
    /// `persisted` is the total number of bytes the service reports as
    /// persisted. A reply confirming no new bytes leaves the cursor in
    /// place, the next chunk starts again at the same offset.
    pub fn acknowledge(&mut self, sent: u64, persisted: u64) -> std::result::Result<(), UploadError> {
        if persisted < self.committed {
            return Err(UploadError::UnexpectedRewind {
                offset: self.committed,
                persisted,
            });
        }
        if persisted > sent || persisted > self.total {
            return Err(UploadError::TooMuchProgress { sent, persisted });
        }
        self.committed = persisted;
        Ok(())
    }

    /// Records the final reply.
    pub fn complete(&mut self) {
        self.committed = self.total;
    }

    pub fn progress(&self) -> UploadProgress {
        UploadProgress {
            bytes_sent: self.committed,
            total: self.total,
        }
    }
}

/// A single media upload.
///
/// The upload runs at most once, [state()][Self::state] and
/// [session_uri()][Self::session_uri] remain available afterwards.
pub struct Upload<S> {
    client: ReqwestClient,
    method: &'static Method,
    path: String,
    query: QueryParams,
    options: RequestOptions,
    metadata: Option<serde_json::Value>,
    source: S,
    config: UploadConfig,
    state: UploadState,
    session_uri: Option<String>,
    cursor: ProgressCursor,
}

impl<S> std::fmt::Debug for Upload<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("method", &self.method.id)
            .field("path", &self.path)
            .field("state", &self.state)
            .field("session_uri", &self.session_uri)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<S> Upload<S>
where
    S: MediaSource + Send + Sync,
{
    /// Prepares an upload for `method`.
    ///
    /// Fails if the method does not accept media or the path parameters do
    /// not match the upload path template.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        client: ReqwestClient,
        method: &'static Method,
        path_params: &[(&str, &str)],
        query: QueryParams,
        options: RequestOptions,
        metadata: Option<serde_json::Value>,
        source: S,
        config: UploadConfig,
    ) -> Result<Self> {
        let path = crate::path_template::expand(method.upload_path()?, path_params)?;
        Ok(Self {
            client,
            method,
            path,
            query,
            options,
            metadata,
            source,
            config,
            state: UploadState::Initiating,
            session_uri: None,
            cursor: ProgressCursor::new(0),
        })
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    /// The resumable session URI, once the service has returned it.
    pub fn session_uri(&self) -> Option<&str> {
        self.session_uri.as_deref()
    }

    pub fn progress(&self) -> UploadProgress {
        self.cursor.progress()
    }

    /// Runs the upload and returns the decoded response.
    ///
    /// The response is decoded exactly once, when the service reports the
    /// upload as complete.
    pub async fn send<O>(&mut self, cancel: &CancellationToken) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        if self.state != UploadState::Initiating {
            return Err(Error::upload(UploadError::SessionClosed));
        }
        let result = self.run::<O>(cancel).await;
        match &result {
            Ok(_) => self.transition(UploadState::Completed),
            Err(e) => {
                tracing::debug!(method = self.method.id, "upload failed: {e}");
                self.transition(UploadState::Failed);
            }
        }
        result
    }

    async fn run<O>(&mut self, cancel: &CancellationToken) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let total = self.source.size().await.map_err(Error::ser)?;
        self.cursor = ProgressCursor::new(total);
        let content_type = match self.config.content_type.clone() {
            Some(c) => c,
            None => self.sniff_content_type().await?,
        };
        if total < self.config.resumable_threshold {
            return self.single_shot(&content_type, cancel).await;
        }
        let session_uri = self.start_session(&content_type, cancel).await?;
        self.transition(UploadState::ChunkUploading);
        self.upload_chunks(&session_uri, cancel).await
    }

    fn transition(&mut self, state: UploadState) {
        tracing::debug!(
            method = self.method.id,
            from = ?self.state,
            to = ?state,
            "upload state transition"
        );
        self.state = state;
    }

    fn notify(&self) {
        if let Some(callback) = &self.config.progress {
            callback(self.cursor.progress());
        }
    }

    async fn sniff_content_type(&mut self) -> Result<String> {
        let prefix = read_up_to(&mut self.source, SNIFF_SIZE).await?;
        self.source.seek(0).await.map_err(Error::ser)?;
        Ok(sniff(&prefix))
    }

    async fn single_shot<O>(&mut self, content_type: &str, cancel: &CancellationToken) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let total = self.cursor.total();
        let media = read_range(&mut self.source, 0, total, total).await?;
        let mut query = self.query.clone();
        let builder = self
            .client
            .builder(self.method.verb.as_method(), &self.path);
        let builder = match &self.metadata {
            Some(metadata) => {
                query.set("uploadType", "multipart");
                let json = serde_json::to_string(metadata).map_err(Error::ser)?;
                let metadata = reqwest::multipart::Part::text(json)
                    .mime_str("application/json; charset=UTF-8")
                    .map_err(Error::ser)?;
                let media = reqwest::multipart::Part::bytes(media.to_vec())
                    .mime_str(content_type)
                    .map_err(Error::ser)?;
                let form = reqwest::multipart::Form::new()
                    .part("metadata", metadata)
                    .part("media", media);
                builder
                    .header(
                        reqwest::header::CONTENT_TYPE,
                        format!("multipart/related; boundary={}", form.boundary()),
                    )
                    .body(reqwest::Body::wrap_stream(form.into_stream()))
            }
            None => {
                query.set("uploadType", "media");
                builder
                    .header(reqwest::header::CONTENT_TYPE, content_type)
                    .body(media)
            }
        };
        let builder = self.client.prepare(builder, query, &self.options)?;
        let response = self
            .client
            .send(builder, Some(self.method.id), cancel)
            .await?;
        if !response.status().is_success() {
            return cancellable(cancel, to_http_error(response)).await;
        }
        self.finish(response, cancel).await
    }

    async fn start_session(
        &mut self,
        content_type: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let mut query = self.query.clone();
        query.set("uploadType", "resumable");
        let builder = self
            .client
            .builder(self.method.verb.as_method(), &self.path)
            .header("x-upload-content-type", content_type)
            .header("x-upload-content-length", self.cursor.total());
        let builder = match &self.metadata {
            Some(metadata) => builder.json(metadata),
            None => builder.header(reqwest::header::CONTENT_LENGTH, 0),
        };
        let builder = self.client.prepare(builder, query, &self.options)?;
        let response = self
            .client
            .send(builder, Some(self.method.id), cancel)
            .await?;
        if !response.status().is_success() {
            return cancellable(cancel, to_http_error(response)).await;
        }
        let session_uri = session_uri(response.headers())?;
        tracing::debug!(method = self.method.id, "upload session started");
        self.session_uri = Some(session_uri.clone());
        Ok(session_uri)
    }

    async fn upload_chunks<O>(&mut self, session_uri: &str, cancel: &CancellationToken) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let total = self.cursor.total();
        loop {
            if cancel.is_cancelled() {
                return Err(Error::cancelled("the upload was cancelled between chunks"));
            }
            let offset = self.cursor.committed();
            let len = std::cmp::min(self.config.chunk_size as u64, total - offset);
            let chunk = read_range(&mut self.source, offset, len, total).await?;
            let end = offset + len;
            let builder = self
                .client
                .builder_for_url(reqwest::Method::PUT, session_uri)
                .header(reqwest::header::CONTENT_RANGE, content_range(offset, len, total))
                .body(chunk);
            let builder = self.client.prepare_session_headers(builder, &self.options)?;
            let response = self
                .client
                .send(builder, Some(self.method.id), cancel)
                .await?;
            if response.status() == RESUME_INCOMPLETE {
                let persisted = persisted_size(response.headers())?;
                self.cursor
                    .acknowledge(end, persisted)
                    .map_err(Error::upload)?;
                tracing::debug!(
                    method = self.method.id,
                    persisted,
                    total,
                    "upload chunk acknowledged"
                );
                self.notify();
                continue;
            }
            if !response.status().is_success() {
                return cancellable(cancel, to_http_error(response)).await;
            }
            return self.finish(response, cancel).await;
        }
    }

    async fn finish<O>(&mut self, response: reqwest::Response, cancel: &CancellationToken) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        self.cursor.complete();
        self.notify();
        match self.method.response {
            Payload::Empty => Ok(O::default()),
            Payload::Json => cancellable(cancel, to_http_response(response)).await,
        }
    }
}

/// An [Upload] bound to the response type of its method.
///
/// The request builders for media methods return this type, so applications
/// can query [session_uri()][Self::session_uri] after a failed upload and
/// resume it by other means.
pub struct UploadSession<S, O> {
    inner: Upload<S>,
    response: std::marker::PhantomData<fn() -> O>,
}

impl<S, O> std::fmt::Debug for UploadSession<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl<S, O> UploadSession<S, O>
where
    S: MediaSource + Send + Sync,
    O: serde::de::DeserializeOwned + Default,
{
    pub fn new(inner: Upload<S>) -> Self {
        Self {
            inner,
            response: std::marker::PhantomData,
        }
    }

    pub fn state(&self) -> UploadState {
        self.inner.state()
    }

    pub fn session_uri(&self) -> Option<&str> {
        self.inner.session_uri()
    }

    pub fn progress(&self) -> UploadProgress {
        self.inner.progress()
    }

    /// Runs the upload, see [Upload::send].
    pub async fn send(&mut self) -> Result<O> {
        self.inner.send(&CancellationToken::new()).await
    }

    pub async fn send_with_cancellation(&mut self, cancel: &CancellationToken) -> Result<O> {
        self.inner.send(cancel).await
    }
}

/// Formats the `Content-Range` header for the chunk `[offset, offset + len)`.
fn content_range(offset: u64, len: u64, total: u64) -> String {
    match len {
        0 => format!("bytes */{total}"),
        n => format!("bytes {offset}-{}/{total}", offset + n - 1),
    }
}

fn session_uri(headers: &reqwest::header::HeaderMap) -> Result<String> {
    headers
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| url::Url::parse(v).is_ok())
        .map(str::to_string)
        .ok_or_else(|| Error::upload(UploadError::MissingSessionUri))
}

/// Returns the number of bytes persisted according to a `308` reply.
fn persisted_size(headers: &reqwest::header::HeaderMap) -> Result<u64> {
    let Some(range) = headers.get(reqwest::header::RANGE) else {
        // A missing `Range:` header indicates that no bytes are persisted.
        return Ok(0);
    };
    let invalid = || Error::upload(UploadError::InvalidRange(format!("{range:?}")));
    // Uploads are sequential, the persisted range always starts at zero and
    // the end is inclusive.
    let end = range
        .to_str()
        .ok()
        .and_then(|r| r.strip_prefix("bytes=0-"))
        .ok_or_else(invalid)?;
    let end = end.parse::<u64>().map_err(|_| invalid())?;
    Ok(end + 1)
}

/// Guesses the media type from the first bytes of the media.
fn sniff(prefix: &[u8]) -> String {
    if let Some(kind) = infer::get(prefix) {
        return kind.mime_type().to_string();
    }
    if prefix.is_empty() {
        return "application/octet-stream".to_string();
    }
    match std::str::from_utf8(prefix) {
        Ok(_) => "text/plain; charset=utf-8".to_string(),
        // The prefix may end in the middle of a UTF-8 sequence.
        Err(e) if e.error_len().is_none() => "text/plain; charset=utf-8".to_string(),
        Err(_) => "application/octet-stream".to_string(),
    }
}

/// Reads up to `limit` bytes from the current position of the source.
async fn read_up_to<S: MediaSource>(source: &mut S, limit: usize) -> Result<bytes::Bytes> {
    let mut buffer = bytes::BytesMut::with_capacity(limit);
    while buffer.len() < limit {
        match source.next().await.transpose().map_err(Error::ser)? {
            Some(b) => buffer.extend_from_slice(&b),
            None => break,
        }
    }
    buffer.truncate(limit);
    Ok(buffer.freeze())
}

/// Reads exactly the bytes `[offset, offset + len)` from the source.
async fn read_range<S: MediaSource>(
    source: &mut S,
    offset: u64,
    len: u64,
    total: u64,
) -> Result<bytes::Bytes> {
    source.seek(offset).await.map_err(Error::ser)?;
    let want = usize::try_from(len).map_err(Error::ser)?;
    let got = read_up_to(source, want).await?;
    if got.len() < want {
        return Err(Error::upload(UploadError::SizeMismatch {
            expected: total,
            got: offset + got.len() as u64,
        }));
    }
    Ok(got)
}
