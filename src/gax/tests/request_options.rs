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
    use google_apis_gax::options::internal::RequestBuilder;
    use google_apis_gax::options::{RequestOptions, RequestOptionsBuilder};
    use std::time::Duration;

    /// Simulates a generated request builder.
    #[derive(Clone, Debug, Default)]
    struct GetTable {
        id: String,
        version: Option<String>,
        options: RequestOptions,
    }

    impl GetTable {
        fn new<V: Into<String>>(id: V) -> Self {
            Self {
                id: id.into(),
                ..Default::default()
            }
        }

        fn with_version<V: Into<String>>(mut self, v: V) -> Self {
            self.version = Some(v.into());
            self
        }
    }

    impl RequestBuilder for GetTable {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn mixed_options() {
        let builder = GetTable::new("table-001")
            .with_version("draft")
            .with_fields(["id", "name"])
            .with_attempt_timeout(Duration::from_secs(5))
            .with_version("published")
            .with_if_none_match("etag-1");

        let mut copy = builder.clone();
        assert_eq!(copy.id, "table-001");
        assert_eq!(copy.version.as_deref(), Some("published"));
        let options = copy.request_options();
        assert_eq!(options.fields().as_deref(), Some("id,name"));
        assert_eq!(options.if_none_match().as_deref(), Some("etag-1"));
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(5)));

        // Changing the copy does not affect the original.
        let mut copy = copy.with_fields(["etag"]);
        assert_eq!(copy.request_options().fields().as_deref(), Some("etag"));
        assert_eq!(builder.options.fields().as_deref(), Some("id,name"));
    }
}
