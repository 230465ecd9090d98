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

//! Defines the data sources for media uploads.
//!
//! Methods that upload media (e.g. adding files to a Maps Engine table)
//! consume any type that can be converted to [Media]. That includes simple
//! buffers, files, and any type implementing [MediaSource].

/// The payload for media uploads.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// use google_apis_gax::upload_source::{Media, MediaSource};
/// let buffer : &[u8] = b"the quick brown fox jumps over the lazy dog";
/// let mut size = 0_usize;
/// let mut media = Media::from(bytes::Bytes::from_static(buffer));
/// assert_eq!(media.size().await?, buffer.len() as u64);
/// while let Some(bytes) = media.next().await.transpose()? {
///     size += bytes.len();
/// }
/// assert_eq!(size, buffer.len());
/// # anyhow::Result::<()>::Ok(()) });
/// ```
#[derive(Debug)]
pub struct Media<T> {
    source: T,
}

impl<T> Media<T>
where
    T: MediaSource,
{
    /// Wraps a custom [MediaSource].
    pub fn from_source(source: T) -> Self {
        Self { source }
    }
}

impl<T> MediaSource for Media<T>
where
    T: MediaSource + Send + Sync,
{
    type Error = T::Error;

    async fn next(&mut self) -> Option<Result<bytes::Bytes, Self::Error>> {
        self.source.next().await
    }

    async fn size(&self) -> Result<u64, Self::Error> {
        self.source.size().await
    }

    async fn seek(&mut self, offset: u64) -> Result<(), Self::Error> {
        self.source.seek(offset).await
    }
}

impl From<bytes::Bytes> for Media<BytesSource> {
    fn from(value: bytes::Bytes) -> Self {
        Self {
            source: BytesSource::new(value),
        }
    }
}

impl From<Vec<u8>> for Media<BytesSource> {
    fn from(value: Vec<u8>) -> Self {
        Media::from(bytes::Bytes::from(value))
    }
}

impl From<&'static str> for Media<BytesSource> {
    fn from(value: &'static str) -> Self {
        Media::from(bytes::Bytes::from_static(value.as_bytes()))
    }
}

impl From<String> for Media<BytesSource> {
    fn from(value: String) -> Self {
        Media::from(bytes::Bytes::from(value))
    }
}

impl From<tokio::fs::File> for Media<FileSource> {
    fn from(value: tokio::fs::File) -> Self {
        Self {
            source: FileSource::new(value),
        }
    }
}

/// Provides the bytes for a media upload.
///
/// A media source is a finite sequence of bytes `[0, size)`. The client
/// library reads sub-ranges by calling [seek()][MediaSource::seek] followed by
/// one or more calls to [next()][MediaSource::next]. Implementations must
/// return the same data for the same offsets, and the size must not change
/// while the upload is in progress.
pub trait MediaSource {
    /// The error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Gets the next set of data to upload, `None` at the end of the source.
    fn next(&mut self) -> impl Future<Output = Option<Result<bytes::Bytes, Self::Error>>> + Send;

    /// The total number of bytes in the source.
    fn size(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Resets the source to start from `offset`.
    fn seek(&mut self, offset: u64) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// The state of a media upload.
///
/// Uploads start in `Initiating` and end in either `Completed` or `Failed`.
/// Simple (single request) uploads never enter `ChunkUploading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadState {
    Initiating,
    ChunkUploading,
    Completed,
    Failed,
}

impl UploadState {
    /// Returns true if the upload completed or failed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// A snapshot of the upload progress, reported to progress callbacks.
///
/// `bytes_sent` counts the bytes confirmed by the service. It never
/// decreases and never exceeds `total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub bytes_sent: u64,
    pub total: u64,
}

const READ_SIZE: usize = 256 * 1024;

/// Implements [MediaSource] for a [tokio::fs::File].
///
/// # Example
/// ```
/// # use google_apis_gax::upload_source::Media;
/// # async fn sample() -> anyhow::Result<()> {
/// let media = Media::from(tokio::fs::File::open("my-data.csv").await?);
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct FileSource {
    inner: tokio::fs::File,
}

impl FileSource {
    fn new(inner: tokio::fs::File) -> Self {
        Self { inner }
    }
}

impl MediaSource for FileSource {
    type Error = std::io::Error;

    async fn next(&mut self) -> Option<Result<bytes::Bytes, Self::Error>> {
        let mut buffer = vec![0_u8; READ_SIZE];
        match tokio::io::AsyncReadExt::read(&mut self.inner, &mut buffer).await {
            Err(e) => Some(Err(e)),
            Ok(0) => None,
            Ok(n) => {
                buffer.truncate(n);
                Some(Ok(bytes::Bytes::from(buffer)))
            }
        }
    }

    async fn size(&self) -> Result<u64, Self::Error> {
        Ok(self.inner.metadata().await?.len())
    }

    async fn seek(&mut self, offset: u64) -> Result<(), Self::Error> {
        use tokio::io::AsyncSeekExt;
        let _ = self.inner.seek(std::io::SeekFrom::Start(offset)).await?;
        Ok(())
    }
}

/// Implements [MediaSource] for [bytes::Bytes].
#[derive(Debug)]
pub struct BytesSource {
    contents: bytes::Bytes,
    current: Option<bytes::Bytes>,
}

impl BytesSource {
    fn new(contents: bytes::Bytes) -> Self {
        let current = Some(contents.clone()).filter(|b| !b.is_empty());
        Self { contents, current }
    }
}

impl MediaSource for BytesSource {
    type Error = std::convert::Infallible;

    async fn next(&mut self) -> Option<Result<bytes::Bytes, Self::Error>> {
        self.current.take().map(Ok)
    }

    async fn size(&self) -> Result<u64, Self::Error> {
        Ok(self.contents.len() as u64)
    }

    async fn seek(&mut self, offset: u64) -> Result<(), Self::Error> {
        let pos = std::cmp::min(offset as usize, self.contents.len());
        self.current = Some(self.contents.slice(pos..)).filter(|b| !b.is_empty());
        Ok(())
    }
}
