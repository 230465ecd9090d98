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

//! Defines types and helpers to serialize query parameters.
//!
//! Query parameters in the Google APIs can be types other than strings and
//! integers, and may be repeated. The request builders record each optional
//! parameter in a [QueryParams] collection, which produces the query string
//! in a stable order: keys in lexicographic order, and the values for each
//! key in insertion order.

use std::collections::BTreeMap;

/// The query parameters for one request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single-valued parameter, replacing any previous values.
    pub fn set<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values.insert(name.into(), vec![value.to_string()]);
    }

    /// Replaces a repeated parameter with the given values.
    ///
    /// An empty iterator removes the parameter.
    pub fn set_repeated<K, I, V>(&mut self, name: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        let name = name.into();
        if values.is_empty() {
            self.values.remove(&name);
        } else {
            self.values.insert(name, values);
        }
    }

    /// Appends one value to a (possibly repeated) parameter.
    pub fn push<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.to_string());
    }

    /// Removes a parameter.
    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Returns the values for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Copies all the parameters from `other`, replacing existing keys.
    pub fn merge(&mut self, other: QueryParams) {
        self.values.extend(other.values);
    }

    /// The parameters as `(name, value)` pairs, in the order they are sent.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.values
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
            .collect()
    }

    /// Adds the parameters to an HTTP request.
    pub fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let pairs = self.pairs();
        if pairs.is_empty() {
            return builder;
        }
        builder.query(&pairs)
    }
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, params: &mut QueryParams, name: &str);
}

impl QueryParameter for serde_json::Value {
    fn add(self, params: &mut QueryParams, name: &str) {
        match self {
            Self::Object(object) => object
                .into_iter()
                .for_each(|(k, v)| v.add(params, format!("{name}.{k}").as_str())),
            Self::Array(array) => array.into_iter().for_each(|v| v.add(params, name)),
            Self::Null => {}
            Self::String(s) => params.push(name, s),
            Self::Number(n) => params.push(name, n),
            Self::Bool(b) => params.push(name, b),
        }
    }
}
