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

//! Method descriptors and the per-API dispatch table.
//!
//! Every API method is described by one static [Method]. The typed request
//! builders and the untyped raw calls both resolve their descriptor through
//! a [Dispatch] table keyed by the method id, e.g. `mapsengine.tables.get`.

use gax::error::Error;
use std::collections::HashMap;

/// The HTTP verbs used by the Google APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_method(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// What the method returns in a successful response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    /// A JSON document.
    Json,
    /// Nothing. The response body, if any, is never parsed.
    Empty,
}

/// Describes a single API method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Method {
    /// The method id, e.g. `fitness.users.sessions.list`.
    pub id: &'static str,
    pub verb: Verb,
    /// The path template, relative to the endpoint.
    pub path: &'static str,
    /// The path template for media uploads, relative to the endpoint.
    pub upload_path: Option<&'static str>,
    /// The method accepts a JSON request body.
    pub has_body: bool,
    pub response: Payload,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown method id `{0}`")]
pub struct UnknownMethod(pub String);

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("method `{0}` does not support media uploads")]
pub struct NoMediaUpload(pub &'static str);

impl Method {
    /// Returns the upload path template, or fails if the method does not
    /// accept media.
    pub fn upload_path(&self) -> gax::Result<&'static str> {
        self.upload_path
            .ok_or_else(|| Error::binding(NoMediaUpload(self.id)))
    }
}

/// Maps method ids to their descriptors.
#[derive(Debug)]
pub struct Dispatch {
    by_id: HashMap<&'static str, &'static Method>,
}

impl Dispatch {
    /// Creates the table, with later entries replacing earlier entries with
    /// the same id.
    pub fn new(methods: &[&'static Method]) -> Self {
        let by_id = methods.iter().map(|m| (m.id, *m)).collect();
        Self { by_id }
    }

    /// Finds the descriptor for `id`.
    pub fn find(&self, id: &str) -> gax::Result<&'static Method> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| Error::binding(UnknownMethod(id.to_string())))
    }

    /// The known method ids, in lexicographic order.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.by_id.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    static GET: Method = Method {
        id: "test.items.get",
        verb: Verb::Get,
        path: "test/v1/items/{id}",
        upload_path: None,
        has_body: false,
        response: Payload::Json,
    };

    static INSERT: Method = Method {
        id: "test.items.insert",
        verb: Verb::Post,
        path: "test/v1/items",
        upload_path: Some("upload/test/v1/items"),
        has_body: true,
        response: Payload::Empty,
    };

    static METHODS: &[&Method] = &[&GET, &INSERT];

    #[test]
    fn find() -> anyhow::Result<()> {
        let dispatch = Dispatch::new(METHODS);
        assert_eq!(dispatch.len(), 2);
        assert!(!dispatch.is_empty());
        let got = dispatch.find("test.items.get")?;
        assert_eq!(got, &GET);
        assert_eq!(dispatch.ids(), vec!["test.items.get", "test.items.insert"]);
        Ok(())
    }

    #[test]
    fn unknown() {
        let dispatch = Dispatch::new(METHODS);
        let err = dispatch.find("test.items.list").expect_err("should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<UnknownMethod>());
        assert_eq!(source, Some(&UnknownMethod("test.items.list".to_string())));
    }

    #[test]
    fn upload_path() -> anyhow::Result<()> {
        assert_eq!(INSERT.upload_path()?, "upload/test/v1/items");
        let err = GET.upload_path().expect_err("should fail");
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[test_case(Verb::Get, reqwest::Method::GET)]
    #[test_case(Verb::Post, reqwest::Method::POST)]
    #[test_case(Verb::Put, reqwest::Method::PUT)]
    #[test_case(Verb::Patch, reqwest::Method::PATCH)]
    #[test_case(Verb::Delete, reqwest::Method::DELETE)]
    fn verbs(input: Verb, want: reqwest::Method) {
        assert_eq!(input.as_method(), want);
    }
}
