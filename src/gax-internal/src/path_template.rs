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

//! Expands the path templates used in the method descriptors.
//!
//! The templates follow the subset of RFC 6570 used by the Google APIs:
//! `{name}` expands to the percent-encoded value, and `{+name}` expands to
//! the value with reserved characters (notably `/`) left as-is.

use gax::error::Error;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved characters.
const SIMPLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Like [SIMPLE], but the reserved characters valid in a path are kept.
const RESERVED: &AsciiSet = &SIMPLE
    .remove(b'/')
    .remove(b':')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    #[error("missing value for path parameter `{0}` in template `{1}`")]
    MissingParameter(String, String),
    #[error("empty value for required path parameter `{0}`")]
    EmptyParameter(String),
    #[error("unterminated placeholder in template `{0}`")]
    Unterminated(String),
}

/// Expands `template` using the values in `params`.
///
/// Each placeholder must have exactly one matching entry. The function fails
/// on the first placeholder without a (non-empty) value, before any request
/// is made.
pub fn expand(template: &str, params: &[(&str, &str)]) -> gax::Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let end = tail
            .find('}')
            .ok_or_else(|| Error::binding(PathError::Unterminated(template.to_string())))?;
        let placeholder = &tail[..end];
        let (name, set) = match placeholder.strip_prefix('+') {
            Some(name) => (name, RESERVED),
            None => (placeholder, SIMPLE),
        };
        let value = params
            .iter()
            .find_map(|(k, v)| (*k == name).then_some(*v))
            .ok_or_else(|| {
                Error::binding(PathError::MissingParameter(
                    name.to_string(),
                    template.to_string(),
                ))
            })?;
        if value.is_empty() {
            return Err(Error::binding(PathError::EmptyParameter(name.to_string())));
        }
        path.extend(utf8_percent_encode(value, set));
        rest = &tail[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test_case("tables/{id}", &[("id", "abc-123")], "tables/abc-123")]
    #[test_case("tables/{id}/features", &[("id", "t1")], "tables/t1/features")]
    #[test_case("{userId}/dataSources/{dataSourceId}", &[("userId", "me"), ("dataSourceId", "raw:com.google.step_count.delta:x")], "me/dataSources/raw%3Acom.google.step_count.delta%3Ax")]
    #[test_case("{+name}/objects", &[("name", "a/b:c")], "a/b:c/objects")]
    #[test_case("items/{name}", &[("name", "a/b c")], "items/a%2Fb%20c")]
    #[test_case("no/placeholders", &[], "no/placeholders")]
    fn expand_success(template: &str, params: &[(&str, &str)], want: &str) -> Result {
        let got = expand(template, params)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn extra_parameters_are_ignored() -> Result {
        let got = expand("tables/{id}", &[("id", "t1"), ("unused", "x")])?;
        assert_eq!(got, "tables/t1");
        Ok(())
    }

    #[test]
    fn missing() {
        let err = expand("tables/{id}/files", &[("tableId", "t1")]).expect_err("should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert!(
            matches!(source, Some(PathError::MissingParameter(name, _)) if name == "id"),
            "{err:?}"
        );
    }

    #[test]
    fn empty() {
        let err = expand("tables/{id}", &[("id", "")]).expect_err("should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert_eq!(source, Some(&PathError::EmptyParameter("id".to_string())));
    }

    #[test]
    fn unterminated() {
        let err = expand("tables/{id", &[("id", "t1")]).expect_err("should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert!(
            matches!(source, Some(PathError::Unterminated(_))),
            "{err:?}"
        );
    }
}
