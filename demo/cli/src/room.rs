// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Room descriptor loaded from JSON.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;

use monotess::{Point, Tessellator};

fn default_wu_per_m() -> f64 {
    1.0
}

#[derive(Clone, Debug, Deserialize)]
pub struct Room {
    pub name: String,
    /// World units per meter.
    #[serde(default = "default_wu_per_m")]
    pub wu_per_m: f64,
    /// Boundary ring as `[x, y]` pairs.
    pub shape: Vec<[f64; 2]>,
    /// Obstacle rings inside the room.
    #[serde(default)]
    pub obstacles: Vec<Vec<[f64; 2]>>,
}

impl Room {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading room file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing room file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let room: Room = serde_json::from_str(text)?;
        debug!(
            "room '{}': {} boundary point(s), {} obstacle(s)",
            room.name,
            room.shape.len(),
            room.obstacles.len()
        );
        Ok(room)
    }

    pub fn boundary(&self) -> Vec<Point> {
        self.shape.iter().map(|&p| Point::from(p)).collect()
    }

    /// Hand the boundary and, unless ignored, the obstacles to a tessellator.
    pub fn add_to(&self, tess: &mut Tessellator, ignore_obstacles: bool) -> Result<()> {
        tess.add_contour(&self.boundary())
            .with_context(|| format!("boundary of room '{}'", self.name))?;
        if ignore_obstacles {
            if !self.obstacles.is_empty() {
                warn!(
                    "dropping {} obstacle(s) of room '{}'",
                    self.obstacles.len(),
                    self.name
                );
            }
            return Ok(());
        }
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            let ring: Vec<Point> = obstacle.iter().map(|&p| Point::from(p)).collect();
            tess.add_contour(&ring)
                .with_context(|| format!("obstacle {} of room '{}'", i, self.name))?;
        }
        Ok(())
    }
}
