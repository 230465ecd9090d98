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

//! The resources and messages of the Maps Engine API.
//!
//! Feature geometries and map contents are polymorphic, they are decoded
//! into enums using the `type` field as the discriminator. Decoding fails if
//! the field is missing or its value is unknown.

use serde_with::{DisplayFromStr, serde_as};

/// A rectangle in geographic coordinates.
///
/// On the wire this is an array `[west, south, east, north]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct LatLngBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl LatLngBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }
}

impl From<[f64; 4]> for LatLngBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }
}

impl From<LatLngBox> for [f64; 4] {
    fn from(value: LatLngBox) -> Self {
        [value.west, value.south, value.east, value.north]
    }
}

/// A generic resource: a table, raster, map, or layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<LatLngBox>,

    /// RFC 3339 timestamp.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub creation_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub etag: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_modified_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    /// The URL of the typed resource, e.g. the table or the map.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// One of `layer`, `map`, `raster`, `rasterCollection`, or `table`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssetsListResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

/// A collection of features with a common schema.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<LatLngBox>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub creation_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub draft_access_list: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub etag: String,

    /// The files of an uploaded table. Only used by `tables.upload`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_modified_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub processing_status: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub published_access_list: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    /// The encoding of the uploaded files, e.g. `UTF-8`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_encoding: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    pub fn set_draft_access_list<T: Into<String>>(mut self, v: T) -> Self {
        self.draft_access_list = v.into();
        self
    }

    pub fn set_files<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<File>,
    {
        self.files = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    pub fn set_schema<T: Into<Schema>>(mut self, v: T) -> Self {
        self.schema = Some(v.into());
        self
    }

    pub fn set_source_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.source_encoding = v.into();
        self
    }

    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The columns of a table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Schema {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<TableColumn>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_geometry: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_key: String,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_columns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TableColumn>,
    {
        self.columns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_primary_geometry<T: Into<String>>(mut self, v: T) -> Self {
        self.primary_geometry = v.into();
        self
    }

    pub fn set_primary_key<T: Into<String>>(mut self, v: T) -> Self {
        self.primary_key = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TableColumn {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// One of `integer`, `double`, `string`, `datetime`, or a geometry
    /// type such as `points`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

impl TableColumn {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, r#type: T) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }
}

/// A file uploaded into a table.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct File {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filename: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// One of `canceled`, `complete`, `failed`, or `inProgress`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub upload_status: String,
}

impl File {
    pub fn new<T: Into<String>>(filename: T) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TablesListResponse {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
}

/// A position, `[longitude, latitude]` with an optional altitude.
pub type GeoJsonPosition = Vec<f64>;

/// A GeoJSON geometry.
///
/// The variant is selected by the `type` field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum GeoJsonGeometry {
    Point {
        coordinates: GeoJsonPosition,
    },
    MultiPoint {
        coordinates: Vec<GeoJsonPosition>,
    },
    LineString {
        coordinates: Vec<GeoJsonPosition>,
    },
    MultiLineString {
        coordinates: Vec<Vec<GeoJsonPosition>>,
    },
    /// The first ring is the exterior, any other rings are holes.
    Polygon {
        coordinates: Vec<Vec<GeoJsonPosition>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<GeoJsonPosition>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

impl GeoJsonGeometry {
    /// Creates a point from its longitude and latitude.
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self::Point {
            coordinates: vec![longitude, latitude],
        }
    }

    /// The value of the `type` discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point { .. } => "Point",
            Self::MultiPoint { .. } => "MultiPoint",
            Self::LineString { .. } => "LineString",
            Self::MultiLineString { .. } => "MultiLineString",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPolygon { .. } => "MultiPolygon",
            Self::GeometryCollection { .. } => "GeometryCollection",
        }
    }
}

/// A table row: a geometry plus arbitrary properties.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeoJsonGeometry>,

    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub properties: serde_json::Map<String, serde_json::Value>,

    /// Always `Feature`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

impl Feature {
    /// Creates a feature with the `type` field set.
    pub fn new() -> Self {
        Self {
            r#type: "Feature".to_string(),
            ..Default::default()
        }
    }

    pub fn set_geometry<T: Into<GeoJsonGeometry>>(mut self, v: T) -> Self {
        self.geometry = Some(v.into());
        self
    }

    /// Sets one property, replacing any previous value.
    pub fn set_property<K, V>(mut self, k: K, v: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.properties.insert(k.into(), v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FeaturesListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_queries_per_second: Option<f64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}

/// The request body for `tables.features.batchInsert`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FeaturesBatchInsertRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,

    /// If true, the service repairs invalid polygons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_geometries: Option<bool>,
}

impl FeaturesBatchInsertRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_features<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Feature>,
    {
        self.features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_normalize_geometries<T: Into<bool>>(mut self, v: T) -> Self {
        self.normalize_geometries = Some(v.into());
        self
    }
}

/// The request body for `tables.features.batchDelete`.
///
/// Features are selected either by primary key or by `gx_id`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FeaturesBatchDeleteRequest {
    #[serde(rename = "gx_ids", skip_serializing_if = "Vec::is_empty")]
    pub gx_ids: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub primary_keys: Vec<String>,
}

impl FeaturesBatchDeleteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gx_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.gx_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_primary_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.primary_keys = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A map: an ordered tree of folders, layers, and KML links.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Map {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<LatLngBox>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<MapItem>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub creation_time: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viewport: Option<LatLngBox>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub draft_access_list: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub etag: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_modified_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub processing_status: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub published_access_list: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub publishing_status: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,
}

/// An entry in the contents of a map or a folder.
///
/// The variant is selected by the `type` field: `folder`, `layer`, or
/// `kmlLink`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[non_exhaustive]
pub enum MapItem {
    Folder(MapFolder),
    Layer(MapLayer),
    KmlLink(MapKmlLink),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapFolder {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<MapItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viewport: Option<LatLngBox>,

    /// If false, the folder is displayed as a single item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub visibility: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viewport: Option<LatLngBox>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub visibility: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapKmlLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_viewport: Option<LatLngBox>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub kml_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub visibility: String,
}

/// A styled view of one or more datasources.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Layer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<LatLngBox>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub creation_time: String,

    /// Either `image` or `table`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub datasource_type: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub datasources: Vec<Datasource>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub draft_access_list: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub etag: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_modified_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub layer_type: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub processing_status: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub published_access_list: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub publishing_status: String,

    /// The vector style, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Datasource {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PublishResponse {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Project {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProjectsListResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
}

/// An image used to render point features.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Icon {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Icon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}
