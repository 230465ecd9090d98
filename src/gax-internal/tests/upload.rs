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

#[cfg(test)]
mod tests {
    use gax::error::UploadError;
    use gax::options::RequestOptions;
    use gax::upload_source::{Media, MediaSource, UploadProgress, UploadState};
    use google_apis_gax_internal::api_header::{GDCL, XGoogApiClient};
    use google_apis_gax_internal::http::ReqwestClient;
    use google_apis_gax_internal::method::{Method, Payload, Verb};
    use google_apis_gax_internal::options::ClientConfig;
    use google_apis_gax_internal::query_parameter::QueryParams;
    use google_apis_gax_internal::upload::{RESUMABLE_UPLOAD_QUANTUM, Upload, UploadConfig};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::error::Error as _;
    use std::sync::{Arc, Mutex};
    use tokio_util::sync::CancellationToken;

    type Result = anyhow::Result<()>;

    const QUANTUM: u64 = RESUMABLE_UPLOAD_QUANTUM as u64;
    const SESSION_PATH: &str = "/upload-session/test-001";

    static TEST_API: XGoogApiClient = XGoogApiClient {
        name: "google-apis-test-v1",
        version: "0.0.1",
        library_type: GDCL,
    };

    static INSERT_FILE: Method = Method {
        id: "test.items.files.insert",
        verb: Verb::Post,
        path: "test/v1/items/{id}/files",
        upload_path: Some("upload/test/v1/items/{id}/files"),
        has_body: false,
        response: Payload::Empty,
    };

    static CREATE_ICON: Method = Method {
        id: "test.items.icons.create",
        verb: Verb::Post,
        path: "test/v1/items/{id}/icons",
        upload_path: Some("upload/test/v1/items/{id}/icons"),
        has_body: true,
        response: Payload::Json,
    };

    mockall::mock! {
        Source {}
        impl MediaSource for Source {
            type Error = std::io::Error;
            async fn next(&mut self) -> Option<std::result::Result<bytes::Bytes, std::io::Error>>;
            async fn size(&self) -> std::result::Result<u64, std::io::Error>;
            async fn seek(&mut self, offset: u64) -> std::result::Result<(), std::io::Error>;
        }
    }

    fn test_client(server: &Server) -> anyhow::Result<ReqwestClient> {
        let config = ClientConfig {
            endpoint: Some(format!("http://{}", server.addr())),
            ..Default::default()
        };
        Ok(ReqwestClient::new(
            config,
            "https://test.googleapis.com",
            &TEST_API,
        )?)
    }

    fn new_upload<S>(
        server: &Server,
        method: &'static Method,
        metadata: Option<Value>,
        source: S,
        config: UploadConfig,
    ) -> anyhow::Result<Upload<S>>
    where
        S: MediaSource + Send + Sync,
    {
        Ok(Upload::new(
            test_client(server)?,
            method,
            &[("id", "item-1")],
            QueryParams::new(),
            RequestOptions::default(),
            metadata,
            source,
            config,
        )?)
    }

    fn resumable_config() -> (UploadConfig, Arc<Mutex<Vec<UploadProgress>>>) {
        let progress = Arc::new(Mutex::new(Vec::new()));
        let mut config = UploadConfig::default();
        config.set_chunk_size(RESUMABLE_UPLOAD_QUANTUM);
        config.set_resumable_threshold(0);
        config.set_content_type("text/csv");
        let captured = progress.clone();
        config.set_progress_callback(move |p| captured.lock().unwrap().push(p));
        (config, progress)
    }

    fn expect_start(server: &Server, path: &str, total: u64) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", path.to_string()),
                request::query(url_decoded(contains(("uploadType", "resumable")))),
                request::headers(contains(("x-upload-content-type", "text/csv"))),
                request::headers(contains(("x-upload-content-length", total.to_string()))),
            ])
            .times(1)
            .respond_with(
                status_code(200).append_header("location", server.url_str(SESSION_PATH)),
            ),
        );
    }

    fn expect_chunk(server: &Server, range: String, responder: impl Responder + 'static) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", SESSION_PATH),
                request::headers(contains(("content-range", range))),
            ])
            .times(1)
            .respond_with(responder),
        );
    }

    #[tokio::test]
    async fn resumable_multiple_chunks() -> Result {
        let total = 2 * QUANTUM + 1000;
        let data = vec![b'a'; total as usize];
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", total);
        expect_chunk(
            &server,
            format!("bytes 0-{}/{total}", QUANTUM - 1),
            status_code(308).append_header("range", format!("bytes=0-{}", QUANTUM - 1)),
        );
        expect_chunk(
            &server,
            format!("bytes {QUANTUM}-{}/{total}", 2 * QUANTUM - 1),
            status_code(308).append_header("range", format!("bytes=0-{}", 2 * QUANTUM - 1)),
        );
        expect_chunk(
            &server,
            format!("bytes {}-{}/{total}", 2 * QUANTUM, total - 1),
            status_code(200),
        );

        let (config, progress) = resumable_config();
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from(data), config)?;
        assert_eq!(upload.state(), UploadState::Initiating);
        upload.send::<()>(&CancellationToken::new()).await?;
        assert_eq!(upload.state(), UploadState::Completed);
        assert_eq!(
            upload.session_uri(),
            Some(server.url_str(SESSION_PATH).as_str())
        );
        let got = progress.lock().unwrap().clone();
        let want = [QUANTUM, 2 * QUANTUM, total]
            .map(|bytes_sent| UploadProgress { bytes_sent, total })
            .to_vec();
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test]
    async fn resumable_partial_persistence() -> Result {
        let total = QUANTUM + 100;
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", total);
        // The service persists only 100 bytes of the first chunk.
        expect_chunk(
            &server,
            format!("bytes 0-{}/{total}", QUANTUM - 1),
            status_code(308).append_header("range", "bytes=0-99"),
        );
        expect_chunk(
            &server,
            format!("bytes 100-{}/{total}", total - 1),
            status_code(200),
        );

        let (config, progress) = resumable_config();
        let data = vec![b'b'; total as usize];
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from(data), config)?;
        upload.send::<()>(&CancellationToken::new()).await?;
        let got = progress.lock().unwrap().clone();
        let sent = got.iter().map(|p| p.bytes_sent).collect::<Vec<_>>();
        assert_eq!(sent, vec![100, total]);
        Ok(())
    }

    #[tokio::test]
    async fn resumable_with_metadata() -> Result {
        let total = 1000;
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/test/v1/items/item-1/icons"),
                request::query(url_decoded(contains(("uploadType", "resumable")))),
                request::body(json_decoded(eq(json!({"name": "marker"})))),
            ])
            .times(1)
            .respond_with(
                status_code(200).append_header("location", server.url_str(SESSION_PATH)),
            ),
        );
        expect_chunk(
            &server,
            format!("bytes 0-999/{total}"),
            json_encoded(json!({"id": "icon-1", "name": "marker"})),
        );

        let (config, _) = resumable_config();
        let data = vec![b'c'; total as usize];
        let mut upload = new_upload(
            &server,
            &CREATE_ICON,
            Some(json!({"name": "marker"})),
            Media::from(data),
            config,
        )?;
        let got = upload.send::<Value>(&CancellationToken::new()).await?;
        assert_eq!(got, json!({"id": "icon-1", "name": "marker"}));
        Ok(())
    }

    #[tokio::test]
    async fn resumable_empty_media() -> Result {
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", 0);
        expect_chunk(&server, "bytes */0".to_string(), status_code(200));

        let (config, progress) = resumable_config();
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from(""), config)?;
        upload.send::<()>(&CancellationToken::new()).await?;
        assert_eq!(upload.state(), UploadState::Completed);
        let got = progress.lock().unwrap().clone();
        assert_eq!(
            got,
            vec![UploadProgress {
                bytes_sent: 0,
                total: 0
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_location() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/upload/test/v1/items/item-1/files",
            ))
            .times(1)
            .respond_with(status_code(200)),
        );

        let (config, progress) = resumable_config();
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from("abc"), config)?;
        let err = upload
            .send::<()>(&CancellationToken::new())
            .await
            .expect_err("upload should fail");
        assert!(err.is_upload(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<UploadError>());
        assert!(
            matches!(source, Some(UploadError::MissingSessionUri)),
            "{err:?}"
        );
        assert_eq!(upload.state(), UploadState::Failed);
        assert_eq!(upload.session_uri(), None);
        assert!(progress.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn start_service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/upload/test/v1/items/item-1/files",
            ))
            .times(1)
            .respond_with(status_code(404).body("NOT FOUND")),
        );

        let (config, _) = resumable_config();
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from("abc"), config)?;
        let err = upload
            .send::<()>(&CancellationToken::new())
            .await
            .expect_err("upload should fail");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(upload.state(), UploadState::Failed);
        Ok(())
    }

    #[tokio::test]
    async fn unexpected_rewind() -> Result {
        let total = 3 * QUANTUM;
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", total);
        expect_chunk(
            &server,
            format!("bytes 0-{}/{total}", QUANTUM - 1),
            status_code(308).append_header("range", format!("bytes=0-{}", QUANTUM - 1)),
        );
        expect_chunk(
            &server,
            format!("bytes {QUANTUM}-{}/{total}", 2 * QUANTUM - 1),
            status_code(308).append_header("range", "bytes=0-99"),
        );

        let (config, progress) = resumable_config();
        let data = vec![b'd'; total as usize];
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from(data), config)?;
        let err = upload
            .send::<()>(&CancellationToken::new())
            .await
            .expect_err("upload should fail");
        let source = err.source().and_then(|e| e.downcast_ref::<UploadError>());
        assert!(
            matches!(
                source,
                Some(UploadError::UnexpectedRewind { persisted: 100, .. })
            ),
            "{err:?}"
        );
        assert_eq!(upload.state(), UploadState::Failed);
        assert!(upload.session_uri().is_some());
        // The cursor never moves backwards.
        assert_eq!(upload.progress().bytes_sent, QUANTUM);
        assert_eq!(progress.lock().unwrap().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn acknowledgment_without_progress() -> Result {
        let total = QUANTUM + 100;
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", total);
        expect_chunk(
            &server,
            format!("bytes 0-{}/{total}", QUANTUM - 1),
            status_code(308).append_header("range", "bytes=0-99"),
        );
        // The second chunk is sent twice, the first reply persists nothing new.
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", SESSION_PATH),
                request::headers(contains((
                    "content-range",
                    format!("bytes 100-{}/{total}", total - 1)
                ))),
            ])
            .times(2)
            .respond_with(httptest::cycle![
                status_code(308).append_header("range", "bytes=0-99"),
                status_code(200),
            ]),
        );

        let (config, progress) = resumable_config();
        let data = vec![b'e'; total as usize];
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from(data), config)?;
        upload.send::<()>(&CancellationToken::new()).await?;
        assert_eq!(upload.state(), UploadState::Completed);
        let got: Vec<u64> = progress
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.bytes_sent)
            .collect();
        assert_eq!(got, vec![100, 100, total]);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_during_chunk() -> Result {
        let total = 2 * QUANTUM;
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", total);
        // Only the first chunk reaches the service.
        expect_chunk(
            &server,
            format!("bytes 0-{}/{total}", QUANTUM - 1),
            delay_and_then(
                std::time::Duration::from_secs(2),
                status_code(308).append_header("range", format!("bytes=0-{}", QUANTUM - 1)),
            ),
        );

        let (config, progress) = resumable_config();
        let data = vec![b'g'; total as usize];
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from(data), config)?;
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let canceller = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            trigger.cancel();
        });
        let err = upload
            .send::<()>(&cancel)
            .await
            .expect_err("upload should be cancelled");
        canceller.await?;
        assert!(err.is_cancelled(), "{err:?}");
        assert_eq!(upload.state(), UploadState::Failed);
        assert!(upload.session_uri().is_some());
        assert_eq!(upload.progress().bytes_sent, 0);
        assert!(progress.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn cancel_between_chunks() -> Result {
        let total = 3 * QUANTUM;
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", total);
        expect_chunk(
            &server,
            format!("bytes 0-{}/{total}", QUANTUM - 1),
            status_code(308).append_header("range", format!("bytes=0-{}", QUANTUM - 1)),
        );

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let mut config = UploadConfig::default();
        config.set_chunk_size(RESUMABLE_UPLOAD_QUANTUM);
        config.set_resumable_threshold(0);
        config.set_content_type("text/csv");
        config.set_progress_callback(move |_| trigger.cancel());

        let data = vec![b'f'; total as usize];
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from(data), config)?;
        let err = upload
            .send::<()>(&cancel)
            .await
            .expect_err("upload should be cancelled");
        assert!(err.is_cancelled(), "{err:?}");
        assert_eq!(upload.state(), UploadState::Failed);
        assert_eq!(upload.progress().bytes_sent, QUANTUM);
        Ok(())
    }

    #[tokio::test]
    async fn chunks_are_unconditional() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/test/v1/items/item-1/files"),
                request::headers(contains(("if-none-match", "\"etag-1\""))),
                request::headers(contains(("x-custom", "value"))),
            ])
            .times(1)
            .respond_with(
                status_code(200).append_header("location", server.url_str(SESSION_PATH)),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", SESSION_PATH),
                request::headers(not(contains(key("if-none-match")))),
                request::headers(contains(("x-custom", "value"))),
            ])
            .times(1)
            .respond_with(status_code(200)),
        );

        let mut options = RequestOptions::default();
        options.set_if_none_match("\"etag-1\"");
        options.set_header("x-custom", "value");
        let (config, _) = resumable_config();
        let mut upload = Upload::new(
            test_client(&server)?,
            &INSERT_FILE,
            &[("id", "item-1")],
            QueryParams::new(),
            options,
            None,
            Media::from("abc"),
            config,
        )?;
        upload.send::<()>(&CancellationToken::new()).await?;
        assert_eq!(upload.state(), UploadState::Completed);
        Ok(())
    }

    #[tokio::test]
    async fn runs_at_most_once() -> Result {
        let server = Server::run();
        expect_start(&server, "/upload/test/v1/items/item-1/files", 3);
        expect_chunk(&server, "bytes 0-2/3".to_string(), status_code(200));

        let (config, _) = resumable_config();
        let mut upload = new_upload(&server, &INSERT_FILE, None, Media::from("abc"), config)?;
        upload.send::<()>(&CancellationToken::new()).await?;
        let err = upload
            .send::<()>(&CancellationToken::new())
            .await
            .expect_err("second run should fail");
        let source = err.source().and_then(|e| e.downcast_ref::<UploadError>());
        assert!(
            matches!(source, Some(UploadError::SessionClosed)),
            "{err:?}"
        );
        assert_eq!(upload.state(), UploadState::Completed);
        Ok(())
    }

    #[tokio::test]
    async fn simple_media_upload() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/test/v1/items/item-1/files"),
                request::query(url_decoded(contains(("uploadType", "media")))),
                request::headers(contains(("content-type", "text/plain; charset=utf-8"))),
            ])
            .times(1)
            .respond_with(status_code(200)),
        );

        let progress = Arc::new(Mutex::new(Vec::new()));
        let captured = progress.clone();
        let mut config = UploadConfig::default();
        config.set_progress_callback(move |p| captured.lock().unwrap().push(p));
        let mut upload = new_upload(
            &server,
            &INSERT_FILE,
            None,
            Media::from("name,population\nParis,2100000\n"),
            config,
        )?;
        upload.send::<()>(&CancellationToken::new()).await?;
        assert_eq!(upload.state(), UploadState::Completed);
        assert_eq!(upload.session_uri(), None);
        let got = progress.lock().unwrap().clone();
        assert_eq!(
            got,
            vec![UploadProgress {
                bytes_sent: 29,
                total: 29
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn simple_multipart_upload() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/test/v1/items/item-1/icons"),
                request::query(url_decoded(contains(("uploadType", "multipart")))),
                request::headers(contains((
                    "content-type",
                    matches("^multipart/related; boundary=")
                ))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "icon-1"}))),
        );

        let png: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        let mut upload = new_upload(
            &server,
            &CREATE_ICON,
            Some(json!({"name": "marker"})),
            Media::from(png.to_vec()),
            UploadConfig::default(),
        )?;
        let got = upload.send::<Value>(&CancellationToken::new()).await?;
        assert_eq!(got, json!({"id": "icon-1"}));
        Ok(())
    }

    #[tokio::test]
    async fn sniffed_content_type() -> Result {
        let png: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/test/v1/items/item-1/files"),
                request::query(url_decoded(contains(("uploadType", "resumable")))),
                request::headers(contains(("x-upload-content-type", "image/png"))),
            ])
            .times(1)
            .respond_with(
                status_code(200).append_header("location", server.url_str(SESSION_PATH)),
            ),
        );
        expect_chunk(
            &server,
            format!("bytes 0-{}/{}", png.len() - 1, png.len()),
            status_code(200),
        );

        let mut config = UploadConfig::default();
        config.set_resumable_threshold(0);
        let mut upload =
            new_upload(&server, &INSERT_FILE, None, Media::from(png.to_vec()), config)?;
        upload.send::<()>(&CancellationToken::new()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn source_error() -> Result {
        // The server has no expectations, any request fails the test.
        let server = Server::run();
        let mut source = MockSource::new();
        source.expect_size().returning(|| Ok(100));
        source.expect_seek().returning(|_| Ok(()));
        source.expect_next().returning(|| {
            Some(Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionAborted,
                "test-only",
            )))
        });

        let mut config = UploadConfig::default();
        config.set_content_type("text/csv");
        let mut upload = new_upload(&server, &INSERT_FILE, None, source, config)?;
        let err = upload
            .send::<()>(&CancellationToken::new())
            .await
            .expect_err("upload should fail");
        assert!(err.is_serialization(), "{err:?}");
        assert_eq!(upload.state(), UploadState::Failed);
        Ok(())
    }

    #[tokio::test]
    async fn source_size_mismatch() -> Result {
        let server = Server::run();
        let mut source = MockSource::new();
        source.expect_size().returning(|| Ok(100));
        source.expect_seek().returning(|_| Ok(()));
        let mut chunks = vec![bytes::Bytes::from_static(b"0123456789")];
        source.expect_next().returning(move || chunks.pop().map(Ok));

        let mut config = UploadConfig::default();
        config.set_content_type("text/csv");
        let mut upload = new_upload(&server, &INSERT_FILE, None, source, config)?;
        let err = upload
            .send::<()>(&CancellationToken::new())
            .await
            .expect_err("upload should fail");
        let source = err.source().and_then(|e| e.downcast_ref::<UploadError>());
        assert!(
            matches!(
                source,
                Some(UploadError::SizeMismatch {
                    expected: 100,
                    got: 10
                })
            ),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn no_upload_path() -> Result {
        let server = Server::run();
        static GET: Method = Method {
            id: "test.items.get",
            verb: Verb::Get,
            path: "test/v1/items/{id}",
            upload_path: None,
            has_body: false,
            response: Payload::Json,
        };
        let err = new_upload(
            &server,
            &GET,
            None,
            Media::from("abc"),
            UploadConfig::default(),
        )
        .expect_err("method without media upload");
        let err = err.downcast::<gax::error::Error>()?;
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
