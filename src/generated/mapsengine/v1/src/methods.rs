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

use gaxi::method::{Dispatch, Method, Payload, Verb};
use std::sync::LazyLock;

pub(crate) static ASSETS_GET: Method = Method {
    id: "mapsengine.assets.get",
    verb: Verb::Get,
    path: "mapsengine/v1/assets/{id}",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static ASSETS_LIST: Method = Method {
    id: "mapsengine.assets.list",
    verb: Verb::Get,
    path: "mapsengine/v1/assets",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static TABLES_GET: Method = Method {
    id: "mapsengine.tables.get",
    verb: Verb::Get,
    path: "mapsengine/v1/tables/{id}",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static TABLES_LIST: Method = Method {
    id: "mapsengine.tables.list",
    verb: Verb::Get,
    path: "mapsengine/v1/tables",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static TABLES_CREATE: Method = Method {
    id: "mapsengine.tables.create",
    verb: Verb::Post,
    path: "mapsengine/v1/tables",
    upload_path: None,
    has_body: true,
    response: Payload::Json,
};

pub(crate) static TABLES_UPLOAD: Method = Method {
    id: "mapsengine.tables.upload",
    verb: Verb::Post,
    path: "mapsengine/v1/tables/upload",
    upload_path: None,
    has_body: true,
    response: Payload::Json,
};

pub(crate) static TABLES_FILES_INSERT: Method = Method {
    id: "mapsengine.tables.files.insert",
    verb: Verb::Post,
    path: "mapsengine/v1/tables/{id}/files",
    upload_path: Some("upload/mapsengine/v1/tables/{id}/files"),
    has_body: false,
    response: Payload::Empty,
};

pub(crate) static FEATURES_LIST: Method = Method {
    id: "mapsengine.tables.features.list",
    verb: Verb::Get,
    path: "mapsengine/v1/tables/{id}/features",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static FEATURES_BATCH_INSERT: Method = Method {
    id: "mapsengine.tables.features.batchInsert",
    verb: Verb::Post,
    path: "mapsengine/v1/tables/{id}/features/batchInsert",
    upload_path: None,
    has_body: true,
    response: Payload::Empty,
};

pub(crate) static FEATURES_BATCH_DELETE: Method = Method {
    id: "mapsengine.tables.features.batchDelete",
    verb: Verb::Post,
    path: "mapsengine/v1/tables/{id}/features/batchDelete",
    upload_path: None,
    has_body: true,
    response: Payload::Empty,
};

pub(crate) static MAPS_GET: Method = Method {
    id: "mapsengine.maps.get",
    verb: Verb::Get,
    path: "mapsengine/v1/maps/{id}",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static LAYERS_GET: Method = Method {
    id: "mapsengine.layers.get",
    verb: Verb::Get,
    path: "mapsengine/v1/layers/{id}",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static LAYERS_PUBLISH: Method = Method {
    id: "mapsengine.layers.publish",
    verb: Verb::Post,
    path: "mapsengine/v1/layers/{id}/publish",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static PROJECTS_LIST: Method = Method {
    id: "mapsengine.projects.list",
    verb: Verb::Get,
    path: "mapsengine/v1/projects",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static ICONS_CREATE: Method = Method {
    id: "mapsengine.projects.icons.create",
    verb: Verb::Post,
    path: "mapsengine/v1/projects/{projectId}/icons",
    upload_path: Some("upload/mapsengine/v1/projects/{projectId}/icons"),
    has_body: true,
    response: Payload::Json,
};

static METHODS: &[&Method] = &[
    &ASSETS_GET,
    &ASSETS_LIST,
    &TABLES_GET,
    &TABLES_LIST,
    &TABLES_CREATE,
    &TABLES_UPLOAD,
    &TABLES_FILES_INSERT,
    &FEATURES_LIST,
    &FEATURES_BATCH_INSERT,
    &FEATURES_BATCH_DELETE,
    &MAPS_GET,
    &LAYERS_GET,
    &LAYERS_PUBLISH,
    &PROJECTS_LIST,
    &ICONS_CREATE,
];

pub(crate) static DISPATCH: LazyLock<Dispatch> = LazyLock::new(|| Dispatch::new(METHODS));

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn unique_ids() {
        assert_eq!(DISPATCH.len(), METHODS.len());
    }

    #[test]
    fn resolve() -> anyhow::Result<()> {
        for method in METHODS {
            let got = DISPATCH.find(method.id)?;
            assert_eq!(got, *method);
            assert!(got.path.starts_with("mapsengine/v1/"), "{got:?}");
        }
        Ok(())
    }

    #[test]
    fn upload_paths() {
        for method in METHODS {
            let Some(upload_path) = method.upload_path else {
                continue;
            };
            let suffix = method.path.strip_prefix("mapsengine/v1/");
            assert_eq!(
                upload_path.strip_prefix("upload/mapsengine/v1/"),
                suffix,
                "{method:?}"
            );
        }
    }

    #[test_case(&TABLES_FILES_INSERT, false, Payload::Empty)]
    #[test_case(&ICONS_CREATE, true, Payload::Json)]
    fn media_methods(method: &Method, has_body: bool, response: Payload) {
        assert!(method.upload_path.is_some(), "{method:?}");
        assert_eq!(method.has_body, has_body, "{method:?}");
        assert_eq!(method.response, response, "{method:?}");
    }

    #[test_case(&FEATURES_BATCH_INSERT)]
    #[test_case(&FEATURES_BATCH_DELETE)]
    fn batch_methods_return_nothing(method: &Method) {
        assert!(method.has_body, "{method:?}");
        assert_eq!(method.response, Payload::Empty, "{method:?}");
    }
}
