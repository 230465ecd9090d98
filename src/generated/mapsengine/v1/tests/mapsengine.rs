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
    use gax::options::RequestOptionsBuilder;
    use gax::upload_source::{UploadProgress, UploadState};
    use google_apis_mapsengine_v1::client::MapsEngine;
    use google_apis_mapsengine_v1::model::{
        FeaturesBatchDeleteRequest, FeaturesBatchInsertRequest, Feature, GeoJsonGeometry, Icon,
        LatLngBox, MapItem, Table,
    };
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tokio_util::sync::CancellationToken;

    type Result = anyhow::Result<()>;

    const QUANTUM: u64 = 256 * 1024;
    const SESSION_PATH: &str = "/upload-session/mapsengine-001";

    async fn test_client(server: &Server) -> anyhow::Result<MapsEngine> {
        let client = MapsEngine::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn list_assets() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/mapsengine/v1/assets"),
                request::query(url_decoded(contains(("tags", "roads,2014")))),
                request::query(url_decoded(contains(("projectId", "12345")))),
                request::query(url_decoded(contains(("bbox", "-10,-20,10,20")))),
                request::query(url_decoded(contains(("type", "table")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "assets": [{
                    "id": "asset-1",
                    "type": "table",
                    "bbox": [-1.5, -2.5, 1.5, 2.5],
                    "tags": ["roads", "2014"],
                }],
                "nextPageToken": "next",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .assets()
            .list()
            .with_tags(["roads", "2014"])
            .with_project_id("12345")
            .with_bbox(LatLngBox::new(-10.0, -20.0, 10.0, 20.0))
            .with_type("table")
            .send()
            .await?;
        assert_eq!(got.next_page_token, "next");
        assert_eq!(got.assets[0].id, "asset-1");
        assert_eq!(got.assets[0].bbox, Some(LatLngBox::new(-1.5, -2.5, 1.5, 2.5)));
        Ok(())
    }

    #[tokio::test]
    async fn get_asset() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/mapsengine/v1/assets/asset-1"))
                .times(1)
                .respond_with(json_encoded(json!({"id": "asset-1", "name": "Roads"}))),
        );

        let client = test_client(&server).await?;
        let got = client.assets().get("asset-1").send().await?;
        assert_eq!(got.name, "Roads");
        Ok(())
    }

    #[tokio::test]
    async fn get_table() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/mapsengine/v1/tables/table-1"),
                request::query(url_decoded(contains(("version", "published")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "id": "table-1",
                "schema": {"columns": [{"name": "geometry", "type": "points"}]},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .tables()
            .get("table-1")
            .with_version("draft")
            .with_version("published")
            .send()
            .await?;
        let schema = got.schema.expect("table has a schema");
        assert_eq!(schema.columns[0].r#type, "points");
        Ok(())
    }

    #[tokio::test]
    async fn create_and_list_tables() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/mapsengine/v1/tables"),
                request::body(json_decoded(eq(json!({
                    "name": "cities",
                    "projectId": "12345",
                })))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "table-1", "name": "cities"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/mapsengine/v1/tables/upload"),
                request::body(json_decoded(eq(json!({
                    "name": "towns",
                    "projectId": "12345",
                    "files": [{"filename": "towns.csv"}],
                })))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "table-2", "name": "towns"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/mapsengine/v1/tables"),
                request::query(url_decoded(contains(("maxResults", "2")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "tables": [{"id": "table-1"}, {"id": "table-2"}],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .tables()
            .create(Table::new().set_name("cities").set_project_id("12345"))
            .send()
            .await?;
        assert_eq!(got.id, "table-1");
        let got = client
            .tables()
            .upload(
                Table::new()
                    .set_name("towns")
                    .set_project_id("12345")
                    .set_files([google_apis_mapsengine_v1::model::File::new("towns.csv")]),
            )
            .send()
            .await?;
        assert_eq!(got.id, "table-2");
        let got = client.tables().list().with_max_results(2).send().await?;
        assert_eq!(got.tables.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn list_features() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/mapsengine/v1/tables/table-1/features"),
                request::query(url_decoded(contains(("where", "population > 100000")))),
                request::query(url_decoded(contains(("select", "name")))),
                request::query(url_decoded(contains(("limit", "5")))),
                request::query(url_decoded(contains(("pageToken", "abc")))),
                request::query(url_decoded(contains(("include", "geometry")))),
                request::query(url_decoded(contains(("version", "draft")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [-122.1, 37.4]},
                        "properties": {"name": "Mountain View"},
                    },
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[0.0, 0.0], [1.0, 1.0]],
                        },
                    },
                ],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .tables()
            .features()
            .list("table-1")
            .with_where("population > 100000")
            .with_select("name")
            .with_limit(5)
            .with_page_token("abc")
            .with_include("geometry")
            .with_version("draft")
            .send()
            .await?;
        assert_eq!(got.features.len(), 2);
        assert_eq!(
            got.features[0].geometry,
            Some(GeoJsonGeometry::point(-122.1, 37.4))
        );
        assert_eq!(got.features[0].properties["name"], json!("Mountain View"));
        assert_eq!(
            got.features[1].geometry.as_ref().map(GeoJsonGeometry::kind),
            Some("LineString")
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_geometry_is_a_decode_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/mapsengine/v1/tables/table-1/features",
            ))
            .times(1)
            .respond_with(json_encoded(json!({
                "features": [{"type": "Feature", "geometry": {"type": "Circle", "radius": 5}}],
            }))),
        );

        let client = test_client(&server).await?;
        let err = client
            .tables()
            .features()
            .list("table-1")
            .send()
            .await
            .expect_err("Circle is not a GeoJSON geometry");
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn batch_features() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/mapsengine/v1/tables/table-1/features/batchInsert"
                ),
                request::body(json_decoded(eq(json!({
                    "features": [{
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                        "properties": {"id": 1},
                    }],
                    "normalizeGeometries": true,
                })))),
            ])
            .times(1)
            .respond_with(status_code(200).body("{ not json")),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/mapsengine/v1/tables/table-1/features/batchDelete"
                ),
                request::body(json_decoded(eq(json!({"primaryKeys": ["1"]})))),
            ])
            .times(1)
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let body = FeaturesBatchInsertRequest::new()
            .set_features([Feature::new()
                .set_geometry(GeoJsonGeometry::point(1.0, 2.0))
                .set_property("id", 1)])
            .set_normalize_geometries(true);
        client
            .tables()
            .features()
            .batch_insert("table-1", body)
            .send()
            .await?;
        client
            .tables()
            .features()
            .batch_delete(
                "table-1",
                FeaturesBatchDeleteRequest::new().set_primary_keys(["1"]),
            )
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_map() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/mapsengine/v1/maps/map-1"))
                .times(1)
                .respond_with(json_encoded(json!({
                    "id": "map-1",
                    "contents": [
                        {"type": "layer", "id": "layer-1"},
                        {"type": "folder", "name": "empty"},
                    ],
                }))),
        );

        let client = test_client(&server).await?;
        let got = client.maps().get("map-1").send().await?;
        assert!(
            matches!(&got.contents[0], MapItem::Layer(l) if l.id == "layer-1"),
            "{got:?}"
        );
        assert!(matches!(&got.contents[1], MapItem::Folder(_)), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn layers() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/mapsengine/v1/layers/layer-1"))
                .times(1)
                .respond_with(json_encoded(json!({
                    "id": "layer-1",
                    "datasourceType": "table",
                    "datasources": [{"id": "table-1"}],
                }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/mapsengine/v1/layers/layer-1/publish"),
                request::query(url_decoded(contains(("force", "true")))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "layer-1"}))),
        );

        let client = test_client(&server).await?;
        let got = client.layers().get("layer-1").send().await?;
        assert_eq!(got.datasources[0].id, "table-1");
        let got = client
            .layers()
            .publish("layer-1")
            .with_force(true)
            .send()
            .await?;
        assert_eq!(got.id, "layer-1");
        Ok(())
    }

    #[tokio::test]
    async fn list_projects() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/mapsengine/v1/projects"))
                .times(1)
                .respond_with(json_encoded(json!({
                    "projects": [{"id": "12345", "name": "Demo"}],
                }))),
        );

        let client = test_client(&server).await?;
        let got = client.projects().list().send().await?;
        assert_eq!(got.projects[0].name, "Demo");
        Ok(())
    }

    #[tokio::test]
    async fn insert_file_simple() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/mapsengine/v1/tables/table-1/files"),
                request::query(url_decoded(contains(("uploadType", "media")))),
                request::query(url_decoded(contains(("filename", "cities.csv")))),
                request::headers(contains(("content-type", "text/csv"))),
                request::body("name,population\nParis,2100000\n"),
            ])
            .times(1)
            .respond_with(status_code(200).body("ignored")),
        );

        let client = test_client(&server).await?;
        client
            .tables()
            .files()
            .insert("table-1", "cities.csv", "name,population\nParis,2100000\n")
            .with_content_type("text/csv")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn insert_file_resumable() -> Result {
        let _guard = google_apis_test_utils::tracing::enable_tracing();
        let total = QUANTUM + 10;
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(&vec![b'x'; total as usize])?;
        file.flush()?;

        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/mapsengine/v1/tables/table-1/files"),
                request::query(url_decoded(contains(("uploadType", "resumable")))),
                request::query(url_decoded(contains(("filename", "big.csv")))),
                request::headers(contains(("x-upload-content-type", "text/csv"))),
                request::headers(contains(("x-upload-content-length", total.to_string()))),
            ])
            .times(1)
            .respond_with(
                status_code(200).append_header("location", server.url_str(SESSION_PATH)),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", SESSION_PATH),
                request::headers(contains((
                    "content-range",
                    format!("bytes 0-{}/{total}", QUANTUM - 1)
                ))),
            ])
            .times(1)
            .respond_with(
                status_code(308).append_header("range", format!("bytes=0-{}", QUANTUM - 1)),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", SESSION_PATH),
                request::headers(contains((
                    "content-range",
                    format!("bytes {QUANTUM}-{}/{total}", total - 1)
                ))),
            ])
            .times(1)
            .respond_with(status_code(200)),
        );

        let progress = Arc::new(Mutex::new(Vec::new()));
        let captured = progress.clone();
        let client = test_client(&server).await?;
        let media = tokio::fs::File::open(file.path()).await?;
        let mut session = client
            .tables()
            .files()
            .insert("table-1", "big.csv", media)
            .with_resumable_threshold(0)
            .with_chunk_size(QUANTUM as usize)
            .with_content_type("text/csv")
            .with_progress_callback(move |p| captured.lock().unwrap().push(p))
            .into_session()?;
        assert_eq!(session.state(), UploadState::Initiating);
        session.send().await?;
        assert_eq!(session.state(), UploadState::Completed);
        assert_eq!(
            session.session_uri(),
            Some(server.url_str(SESSION_PATH).as_str())
        );
        let got = progress.lock().unwrap().clone();
        let want = [QUANTUM, total]
            .map(|bytes_sent| UploadProgress { bytes_sent, total })
            .to_vec();
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test]
    async fn insert_file_failure_keeps_session_uri() -> Result {
        let total = 100_u64;
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/upload/mapsengine/v1/tables/table-1/files",
            ))
            .times(1)
            .respond_with(
                status_code(200).append_header("location", server.url_str(SESSION_PATH)),
            ),
        );
        server.expect(
            Expectation::matching(request::method_path("PUT", SESSION_PATH))
                .times(1)
                .respond_with(status_code(503)),
        );

        let client = test_client(&server).await?;
        let mut session = client
            .tables()
            .files()
            .insert("table-1", "a.bin", vec![0_u8; total as usize])
            .with_resumable_threshold(0)
            .into_session()?;
        let err = session.send().await.expect_err("the service is unavailable");
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(session.state(), UploadState::Failed);
        assert_eq!(
            session.session_uri(),
            Some(server.url_str(SESSION_PATH).as_str())
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_icon_multipart() -> Result {
        // The PNG signature is enough to guess the media type.
        let png = [
            0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D, b'I', b'H', b'D', b'R',
        ]
        .to_vec();
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/mapsengine/v1/projects/12345/icons"),
                request::query(url_decoded(contains(("uploadType", "multipart")))),
                request::headers(contains((
                    "content-type",
                    matches("^multipart/related; boundary=")
                ))),
                request::body(matches("\"name\":\"pin\"")),
                request::body(matches("image/png")),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "icon-1", "name": "pin"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .projects()
            .icons()
            .create("12345", Icon::new().set_name("pin"), png)
            .send()
            .await?;
        assert_eq!(got.id, "icon-1");
        Ok(())
    }

    #[tokio::test]
    async fn create_icon_resumable() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/upload/mapsengine/v1/projects/12345/icons"),
                request::query(url_decoded(contains(("uploadType", "resumable")))),
                request::headers(contains(("x-upload-content-type", "image/png"))),
                request::body(json_decoded(eq(json!({"name": "pin"})))),
            ])
            .times(1)
            .respond_with(
                status_code(200).append_header("location", server.url_str(SESSION_PATH)),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", SESSION_PATH),
                request::headers(contains(("content-range", "bytes 0-3/4"))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({"id": "icon-1", "name": "pin"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .projects()
            .icons()
            .create("12345", Icon::new().set_name("pin"), "abcd")
            .with_resumable_threshold(0)
            .with_content_type("image/png")
            .send()
            .await?;
        assert_eq!(got.name, "pin");
        Ok(())
    }

    #[tokio::test]
    async fn upload_cancelled() -> Result {
        let server = Server::run();
        let client = test_client(&server).await?;
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = client
            .tables()
            .files()
            .insert("table-1", "a.csv", "a,b\n")
            .with_resumable_threshold(0)
            .send_with_cancellation(&cancel)
            .await
            .expect_err("the upload was cancelled");
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/mapsengine/v1/maps/missing"))
                .times(1)
                .respond_with(status_code(403).body(
                    json!({
                        "error": {
                            "code": 403,
                            "message": "The caller does not have permission",
                            "errors": [{"domain": "global", "reason": "forbidden", "message": "The caller does not have permission"}],
                        }
                    })
                    .to_string(),
                )),
        );

        let client = test_client(&server).await?;
        let err = client
            .maps()
            .get("missing")
            .with_quota_user("user-1")
            .send()
            .await
            .expect_err("permission denied");
        assert_eq!(err.http_status_code(), Some(403));
        let status = err.status().expect("the error has a status");
        assert_eq!(status.code, gax::error::rpc::Code::PermissionDenied);
        assert_eq!(status.errors[0].reason, "forbidden");
        Ok(())
    }

    #[tokio::test]
    async fn raw_call() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/mapsengine/v1/tables/table-1/features/batchDelete"),
                request::body(json_decoded(eq(json!({"gx_ids": ["gx-1"]})))),
            ])
            .times(1)
            .respond_with(status_code(200).body("ignored")),
        );

        let client = test_client(&server).await?;
        let got = client
            .raw_call("mapsengine.tables.features.batchDelete")?
            .with_path_param("id", "table-1")
            .with_body(json!({"gx_ids": ["gx-1"]}))
            .send()
            .await?;
        assert_eq!(got, serde_json::Value::Null);
        Ok(())
    }
}
