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

pub(crate) static DATA_SOURCES_CREATE: Method = Method {
    id: "fitness.users.dataSources.create",
    verb: Verb::Post,
    path: "fitness/v1/users/{userId}/dataSources",
    upload_path: None,
    has_body: true,
    response: Payload::Json,
};

pub(crate) static DATA_SOURCES_GET: Method = Method {
    id: "fitness.users.dataSources.get",
    verb: Verb::Get,
    path: "fitness/v1/users/{userId}/dataSources/{dataSourceId}",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static DATA_SOURCES_LIST: Method = Method {
    id: "fitness.users.dataSources.list",
    verb: Verb::Get,
    path: "fitness/v1/users/{userId}/dataSources",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static DATA_SOURCES_UPDATE: Method = Method {
    id: "fitness.users.dataSources.update",
    verb: Verb::Put,
    path: "fitness/v1/users/{userId}/dataSources/{dataSourceId}",
    upload_path: None,
    has_body: true,
    response: Payload::Json,
};

pub(crate) static DATA_SOURCES_PATCH: Method = Method {
    id: "fitness.users.dataSources.patch",
    verb: Verb::Patch,
    path: "fitness/v1/users/{userId}/dataSources/{dataSourceId}",
    upload_path: None,
    has_body: true,
    response: Payload::Json,
};

pub(crate) static DATA_SOURCES_DELETE: Method = Method {
    id: "fitness.users.dataSources.delete",
    verb: Verb::Delete,
    path: "fitness/v1/users/{userId}/dataSources/{dataSourceId}",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static DATASETS_GET: Method = Method {
    id: "fitness.users.dataSources.datasets.get",
    verb: Verb::Get,
    path: "fitness/v1/users/{userId}/dataSources/{dataSourceId}/datasets/{datasetId}",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static DATASETS_PATCH: Method = Method {
    id: "fitness.users.dataSources.datasets.patch",
    verb: Verb::Patch,
    path: "fitness/v1/users/{userId}/dataSources/{dataSourceId}/datasets/{datasetId}",
    upload_path: None,
    has_body: true,
    response: Payload::Json,
};

pub(crate) static DATASETS_DELETE: Method = Method {
    id: "fitness.users.dataSources.datasets.delete",
    verb: Verb::Delete,
    path: "fitness/v1/users/{userId}/dataSources/{dataSourceId}/datasets/{datasetId}",
    upload_path: None,
    has_body: false,
    response: Payload::Empty,
};

pub(crate) static SESSIONS_LIST: Method = Method {
    id: "fitness.users.sessions.list",
    verb: Verb::Get,
    path: "fitness/v1/users/{userId}/sessions",
    upload_path: None,
    has_body: false,
    response: Payload::Json,
};

pub(crate) static SESSIONS_UPDATE: Method = Method {
    id: "fitness.users.sessions.update",
    verb: Verb::Put,
    path: "fitness/v1/users/{userId}/sessions/{sessionId}",
    upload_path: None,
    has_body: true,
    response: Payload::Json,
};

pub(crate) static SESSIONS_DELETE: Method = Method {
    id: "fitness.users.sessions.delete",
    verb: Verb::Delete,
    path: "fitness/v1/users/{userId}/sessions/{sessionId}",
    upload_path: None,
    has_body: false,
    response: Payload::Empty,
};

static METHODS: &[&Method] = &[
    &DATA_SOURCES_CREATE,
    &DATA_SOURCES_GET,
    &DATA_SOURCES_LIST,
    &DATA_SOURCES_UPDATE,
    &DATA_SOURCES_PATCH,
    &DATA_SOURCES_DELETE,
    &DATASETS_GET,
    &DATASETS_PATCH,
    &DATASETS_DELETE,
    &SESSIONS_LIST,
    &SESSIONS_UPDATE,
    &SESSIONS_DELETE,
];

pub(crate) static DISPATCH: LazyLock<Dispatch> = LazyLock::new(|| Dispatch::new(METHODS));
