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
    use google_apis_gax::client_builder;
    use google_apis_gax::error::rpc::{Code, Status};
    use google_apis_gax::error::{Error, UploadError};
    use static_assertions::assert_impl_all;
    use std::error::Error as _;

    assert_impl_all!(Error: std::error::Error, Send, Sync);
    assert_impl_all!(UploadError: std::error::Error, Send, Sync);
    assert_impl_all!(client_builder::Error: std::error::Error, Send, Sync);
    assert_impl_all!(Status: Clone, Send, Sync);

    #[derive(Debug)]
    struct LeafError;

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf error")
        }
    }

    impl std::error::Error for LeafError {}

    #[test]
    fn downcast_source() {
        let error = Error::io(LeafError);
        let leaf = error.source().and_then(|e| e.downcast_ref::<LeafError>());
        assert!(leaf.is_some(), "{error:?}");
    }

    #[test]
    fn taxonomy_is_disjoint() {
        let errors = [
            Error::binding(LeafError),
            Error::ser(LeafError),
            Error::deser(LeafError),
            Error::timeout(LeafError),
            Error::cancelled(LeafError),
            Error::upload(UploadError::MissingSessionUri),
            Error::io(LeafError),
            Error::http(502, http::HeaderMap::new(), bytes::Bytes::from_static(b"bad gateway")),
            Error::service(Status::default().set_code(Code::NotFound)),
        ];
        for e in &errors {
            let predicates = [
                e.is_binding(),
                e.is_serialization(),
                e.is_deserialization(),
                e.is_timeout(),
                e.is_cancelled(),
                e.is_upload(),
                e.is_transport(),
                e.is_protocol(),
            ];
            let count = predicates.into_iter().filter(|p| *p).count();
            assert_eq!(count, 1, "{e:?}");
        }
    }
}
