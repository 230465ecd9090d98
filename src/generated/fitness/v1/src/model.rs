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

//! The resources and messages of the Fitness API.
//!
//! Fields that the service encodes as `int64` are strings on the wire, they
//! are `i64` in these types.

use serde_with::{DisplayFromStr, serde_as};

/// A unique identifier for the data stream produced by an application or
/// device.
///
/// Data sources are immutable once created, except for the application
/// version, the device version, and the data stream name.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,

    /// Not populated for new data sources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_quality_standard: Vec<String>,

    /// A unique identifier, assigned by the service on creation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_stream_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_stream_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Either `raw` or `derived`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

impl DataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_application<T: Into<Application>>(mut self, v: T) -> Self {
        self.application = Some(v.into());
        self
    }

    pub fn set_data_stream_id<T: Into<String>>(mut self, v: T) -> Self {
        self.data_stream_id = v.into();
        self
    }

    pub fn set_data_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.data_stream_name = v.into();
        self
    }

    pub fn set_data_type<T: Into<DataType>>(mut self, v: T) -> Self {
        self.data_type = Some(v.into());
        self
    }

    pub fn set_device<T: Into<Device>>(mut self, v: T) -> Self {
        self.device = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }
}

/// The application that produced a data source or a session.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Application {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub details_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The Android package name, for Android applications.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub package_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_package_name<T: Into<String>>(mut self, v: T) -> Self {
        self.package_name = v.into();
        self
    }

    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataType {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field: Vec<DataTypeField>,

    /// The namespaced name, e.g. `com.google.step_count.delta`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl DataType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_field<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DataTypeField>,
    {
        self.field = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataTypeField {
    /// One of `integer`, `floatPoint`, `string`, `map`, `integerList`,
    /// `floatList`, or `blob`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl DataTypeField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_format<T: Into<String>>(mut self, v: T) -> Self {
        self.format = v.into();
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The device that collected the data.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Device {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,

    /// One of `phone`, `tablet`, `watch`, `chestStrap`, `scale`, or
    /// `headMounted`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,

    /// The serial number or other unique id for the hardware.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl Device {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_manufacturer<T: Into<String>>(mut self, v: T) -> Self {
        self.manufacturer = v.into();
        self
    }

    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = v.into();
        self
    }

    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
        self.uid = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDataSourcesResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_source: Vec<DataSource>,
}

/// The data points of one data source in a time interval.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Dataset {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_source_id: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_end_time_ns: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_start_time_ns: Option<i64>,

    /// Only set in responses, use it to fetch the next page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub point: Vec<DataPoint>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data_source_id<T: Into<String>>(mut self, v: T) -> Self {
        self.data_source_id = v.into();
        self
    }

    pub fn set_max_end_time_ns<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_end_time_ns = Some(v.into());
        self
    }

    pub fn set_min_start_time_ns<T: Into<i64>>(mut self, v: T) -> Self {
        self.min_start_time_ns = Some(v.into());
        self
    }

    pub fn set_point<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DataPoint>,
    {
        self.point = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A single measurement.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataPoint {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computation_time_millis: Option<i64>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_type_name: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_nanos: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time_millis: Option<i64>,

    /// Set when the point was copied from another data source.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_data_source_id: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_timestamp_nanos: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_nanos: Option<i64>,

    /// The values, in the order of the data type fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<Value>,
}

impl DataPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data_type_name<T: Into<String>>(mut self, v: T) -> Self {
        self.data_type_name = v.into();
        self
    }

    pub fn set_start_time_nanos<T: Into<i64>>(mut self, v: T) -> Self {
        self.start_time_nanos = Some(v.into());
        self
    }

    pub fn set_end_time_nanos<T: Into<i64>>(mut self, v: T) -> Self {
        self.end_time_nanos = Some(v.into());
        self
    }

    pub fn set_value<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.value = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A single value in a data point. Exactly one field is set.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Value {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp_val: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub int_val: Option<i32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub map_val: Vec<ValueMapValEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_val: Option<String>,
}

impl Value {
    pub fn from_fp(v: f64) -> Self {
        Self {
            fp_val: Some(v),
            ..Default::default()
        }
    }

    pub fn from_int(v: i32) -> Self {
        Self {
            int_val: Some(v),
            ..Default::default()
        }
    }

    pub fn from_string<T: Into<String>>(v: T) -> Self {
        Self {
            string_val: Some(v.into()),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValueMapValEntry {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<MapValue>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp_val: Option<f64>,
}

/// A time interval with an activity, e.g. a run or a night of sleep.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Session {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_time_millis: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_millis: Option<i64>,

    /// A client-generated identifier, unique across the sessions of a user.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time_millis: Option<i64>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_millis: Option<i64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_activity_type<T: Into<i32>>(mut self, v: T) -> Self {
        self.activity_type = Some(v.into());
        self
    }

    pub fn set_application<T: Into<Application>>(mut self, v: T) -> Self {
        self.application = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    pub fn set_end_time_millis<T: Into<i64>>(mut self, v: T) -> Self {
        self.end_time_millis = Some(v.into());
        self
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_start_time_millis<T: Into<i64>>(mut self, v: T) -> Self {
        self.start_time_millis = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSessionsResponse {
    /// Sessions deleted in the requested interval, only populated when the
    /// request sets `includeDeleted`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deleted_session: Vec<Session>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more_data: Option<bool>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub session: Vec<Session>,
}

/// The id of a dataset: the minimum start time and the maximum end time of
/// its points, as nanoseconds since the epoch.
///
/// # Example
/// ```
/// # use google_apis_fitness_v1::model::DatasetId;
/// let id = DatasetId::new(1_000_000, 2_000_000);
/// assert_eq!(id.to_string(), "1000000-2000000");
/// assert_eq!("1000000-2000000".parse::<DatasetId>(), Ok(id));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetId {
    pub start_nanos: i64,
    pub end_nanos: i64,
}

impl DatasetId {
    pub fn new(start_nanos: i64, end_nanos: i64) -> Self {
        Self {
            start_nanos,
            end_nanos,
        }
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_nanos, self.end_nanos)
    }
}

impl From<DatasetId> for String {
    fn from(value: DatasetId) -> Self {
        value.to_string()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid dataset id `{0}`, expected `{{startNanos}}-{{endNanos}}`")]
pub struct InvalidDatasetId(String);

impl std::str::FromStr for DatasetId {
    type Err = InvalidDatasetId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDatasetId(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start_nanos = start.parse().map_err(|_| invalid())?;
        let end_nanos = end.parse().map_err(|_| invalid())?;
        Ok(Self::new(start_nanos, end_nanos))
    }
}
