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

use super::UploadError;
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error type for all the Google APIs client libraries.
///
/// A request can fail before it is sent (a required path parameter is
/// empty), while it is in flight (a broken connection, a timeout, an
/// application cancellation), or in the service (the service returns an
/// error payload). Use the `is_*()` predicates to classify an error, and the
/// accessors to examine the service or HTTP details, if any.
///
/// # Example
/// ```
/// use google_apis_gax::error::Error;
/// # use google_apis_gax::error::rpc::{Code, Status};
/// fn report(e: Error) {
///     if let Some(status) = e.status() {
///         println!("the service rejected the request: {status:?}");
///     } else if e.is_timeout() || e.is_cancelled() {
///         println!("the request did not complete: {e}");
///     } else {
///         println!("{e}");
///     }
/// }
/// report(Error::service(Status::default().set_code(Code::NotFound)));
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error from a service error payload.
    ///
    /// # Example
    /// ```
    /// use google_apis_gax::error::Error;
    /// use google_apis_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::PermissionDenied);
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None, None)
    }

    /// Creates an error for a request that did not complete in time.
    ///
    /// ```
    /// use google_apis_gax::error::Error;
    /// assert!(Error::timeout("took too long").is_timeout());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// The request did not complete before the per-request timeout.
    ///
    /// The service may or may not have received, and processed, the request.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error for a request cancelled by the application.
    ///
    /// ```
    /// use google_apis_gax::error::Error;
    /// assert!(Error::cancelled("shutting down").is_cancelled());
    /// ```
    pub fn cancelled<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Cancelled, source)
    }

    /// The application cancelled the request.
    ///
    /// The in-flight request, if any, was dropped. Like timeouts, the service
    /// may have processed the request anyway.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The response payload is not valid for the method.
    ///
    /// The request succeeded in the service. Typical causes are a truncated
    /// body, or a tagged value (e.g. a GeoJSON geometry) with a `type` that
    /// this version of the library does not know.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The request could not be encoded.
    ///
    /// Nothing was sent. Besides JSON encoding problems, this covers header
    /// values that are not valid in HTTP, and media sources that fail to
    /// read.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn upload(source: UploadError) -> Self {
        Self::with_source(ErrorKind::Upload, source)
    }

    /// A resumable upload session reached an inconsistent state.
    ///
    /// The [source][StdError::source] is an [UploadError].
    pub fn is_upload(&self) -> bool {
        matches!(self.kind, ErrorKind::Upload)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Binding, source)
    }

    /// The request URL could not be composed.
    ///
    /// Nothing was sent. A required path parameter is empty, or a raw call
    /// names a method the client does not have.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A non-success HTTP response without a service error payload.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = HttpDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Protocol(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A transport failure without any HTTP response.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Transport, source)
    }

    /// The request failed in the transport layer, no response arrived.
    ///
    /// Responses with an error status code are never transport errors, see
    /// [is_protocol()][Error::is_protocol].
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport)
    }

    /// The request failed without an HTTP response.
    ///
    /// The connection could not be established, or broke before the
    /// response arrived. The libraries never retry, applications may retry
    /// idempotent requests.
    pub fn is_io(&self) -> bool {
        self.is_transport()
    }

    /// The service, or an intermediary, answered with a non-2xx status.
    ///
    /// This includes `304 Not Modified` replies to conditional requests.
    /// [status()][Error::status] returns the parsed error payload, if the
    /// response had one. Proxies and load balancers often reply without it,
    /// use [http_payload()][Error::http_payload] to examine those.
    pub fn is_protocol(&self) -> bool {
        matches!(self.kind, ErrorKind::Protocol(_) | ErrorKind::Service(_))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A service error payload and the HTTP response carrying it.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
        payload: Option<bytes::Bytes>,
    ) -> Self {
        let http = HttpDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Service(Box::new(ServiceDetails { status, http })),
            source: None,
        }
    }

    /// The service error payload, if any.
    ///
    /// # Example
    /// ```
    /// use google_apis_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     for item in &status.errors {
    ///         println!("{}: {}", item.reason, item.message);
    ///     }
    /// }
    /// ```
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The HTTP status code of the response, if any.
    ///
    /// ```
    /// use google_apis_gax::error::Error;
    /// let error = Error::http(502, http::HeaderMap::new(), bytes::Bytes::from_static(b"bad gateway"));
    /// assert_eq!(error.http_status_code(), Some(502));
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_details().and_then(|d| d.status_code)
    }

    /// The HTTP headers of the response, if any.
    ///
    /// Useful to find request ids, such as `x-guploader-uploadid`, for
    /// support cases.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.http_details().and_then(|d| d.headers.as_ref())
    }

    /// The raw HTTP payload of the response, if any.
    ///
    /// Service errors keep the raw payload too, the parsed version is
    /// returned by [status()][Error::status].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.http_details().and_then(|d| d.payload.as_ref())
    }

    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    fn http_details(&self) -> Option<&HttpDetails> {
        match &self.kind {
            ErrorKind::Protocol(d) => Some(d),
            ErrorKind::Service(d) => Some(&d.http),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match &self.kind {
            ErrorKind::Binding => "cannot compose the request URL",
            ErrorKind::Serialization => "cannot serialize the request",
            ErrorKind::Deserialization => "cannot deserialize the response",
            ErrorKind::Timeout => "the request exceeded its timeout",
            ErrorKind::Cancelled => "the request was cancelled by the application",
            ErrorKind::Upload => "the resumable upload session failed",
            ErrorKind::Service(d) => {
                return write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                );
            }
            ErrorKind::Transport => "the transport reports an error",
            ErrorKind::Protocol(d) => {
                let code = d.status_code.unwrap_or_default();
                return match d.payload.as_ref().map(|p| (p, std::str::from_utf8(p))) {
                    Some((_, Ok(text))) => write!(f, "the HTTP response has a [{code}] status: {text}"),
                    Some((p, Err(_))) => write!(f, "the HTTP response has a [{code}] status: {p:?}"),
                    None => write!(f, "the HTTP response has a [{code}] status"),
                };
            }
        };
        match &self.source {
            Some(e) => write!(f, "{prefix}: {e}"),
            None => f.write_str(prefix),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Timeout,
    Cancelled,
    Upload,
    Transport,
    Protocol(Box<HttpDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug, Default)]
struct HttpDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

#[derive(Debug)]
struct ServiceDetails {
    status: Status,
    http: HttpDetails,
}
