//! Cylinder and query descriptions loadable from JSON
//!
//! A query document names one cylinder and the points to measure against it:
//!
//! ```json
//! {
//!   "cylinder": { "base": [0, 0, 0], "axis": [2, 0, 0], "radius": 0.5, "height": 2.0 },
//!   "points": [[1, 1, 0], [-1, 0, 0]]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coordinates::{Point, Vector};
use crate::errors::Result;
use crate::shapes::RightCircularCylinder;

/// Raw cylinder parameters, validated only when built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderConfig {
    /// Center of the base cap
    pub base: [f64; 3],
    /// Axis direction, any non-zero length
    pub axis: [f64; 3],
    /// Radius
    pub radius: f64,
    /// Distance between the caps
    pub height: f64,
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            base: [0.0, 0.0, 0.0],
            axis: [0.0, 0.0, 1.0],
            radius: 1.0,
            height: 1.0,
        }
    }
}

impl CylinderConfig {
    /// Set the base point
    pub fn with_base(mut self, base: [f64; 3]) -> Self {
        self.base = base;
        self
    }

    /// Set the axis direction
    pub fn with_axis(mut self, axis: [f64; 3]) -> Self {
        self.axis = axis;
        self
    }

    /// Set the radius and height
    pub fn with_dimensions(mut self, radius: f64, height: f64) -> Self {
        self.radius = radius;
        self.height = height;
        self
    }

    /// Build the cylinder, applying the usual geometry validation
    pub fn build(&self) -> Result<RightCircularCylinder> {
        let [bx, by, bz] = self.base;
        let [ax, ay, az] = self.axis;
        RightCircularCylinder::new(
            Point::new(bx, by, bz),
            Vector::new(ax, ay, az),
            self.radius,
            self.height,
        )
    }
}

/// A cylinder together with the points to measure against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Cylinder description
    pub cylinder: CylinderConfig,
    /// Query points
    #[serde(default)]
    pub points: Vec<[f64; 3]>,
}

impl QueryConfig {
    /// Parse a query document from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a query document from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading query config from {}", path.as_ref().display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Query points as [`Point`] values
    pub fn query_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|&[x, y, z]| Point::new(x, y, z))
            .collect()
    }

    /// Build the cylinder and measure every query point against it
    pub fn evaluate(&self) -> Result<Vec<f64>> {
        let cylinder = self.cylinder.build()?;
        Ok(cylinder.distances(&self.query_points()))
    }
}
