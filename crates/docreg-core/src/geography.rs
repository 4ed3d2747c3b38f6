// crates/docreg-core/src/geography.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

//! # Map Geography
//!
//! Reads the world map's TopoJSON resource far enough to know which region
//! names a click can report. A click hands `geometries[].properties.name`
//! to [`SearchState::select_country`](crate::state::SearchState::select_country)
//! unchanged, so these are exactly the strings the search term can become.
//!
//! Shapes, arcs and projections are left to the map component.

use crate::error::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Deserialize)]
struct Topology {
    #[serde(default)]
    objects: BTreeMap<String, GeometryCollection>,
}

#[derive(Debug, Deserialize)]
struct GeometryCollection {
    #[serde(default)]
    geometries: Vec<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

/// Clickable region names of a map topology.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapRegions {
    names: Vec<String>,
}

impl MapRegions {
    /// Collect the names from a TopoJSON document.
    ///
    /// Objects are visited in key order, geometries in file order. Unnamed
    /// geometries are skipped and repeated names kept once.
    pub fn from_topojson(json: &str) -> Result<Self> {
        let topology: Topology = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        let names: Vec<String> = topology
            .objects
            .into_values()
            .flat_map(|collection| collection.geometries)
            .filter_map(|geometry| geometry.properties?.name)
            .filter(|name| !name.is_empty() && seen.insert(name.clone()))
            .collect();
        tracing::debug!(regions = names.len(), "map regions read");
        Ok(MapRegions { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPO: &str = r#"{
      "type": "Topology",
      "objects": {
        "countries": {
          "type": "GeometryCollection",
          "geometries": [
            {"type": "Polygon", "arcs": [[0]], "id": "076", "properties": {"name": "Brazil"}},
            {"type": "Polygon", "arcs": [[1]], "id": "840", "properties": {"name": "United States of America"}},
            {"type": "Polygon", "arcs": [[2]]},
            {"type": "Polygon", "arcs": [[3]], "properties": {"name": "Brazil"}}
          ]
        }
      },
      "arcs": [[[0, 0]], [[1, 1]], [[2, 2]], [[3, 3]]]
    }"#;

    #[test]
    fn names_in_file_order_without_repeats() {
        let regions = MapRegions::from_topojson(TOPO).unwrap();
        assert_eq!(regions.names(), ["Brazil", "United States of America"]);
        assert!(regions.contains("Brazil"));
        assert!(!regions.contains("brazil"));
    }

    #[test]
    fn topology_without_objects_is_empty() {
        let regions = MapRegions::from_topojson(r#"{"type": "Topology", "arcs": []}"#).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn not_json_is_an_error() {
        assert!(MapRegions::from_topojson("<svg/>").is_err());
    }
}
