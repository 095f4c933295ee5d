// src/terrain/material.rs

use serde::Serialize;

/// Semantic voxel classification consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoxelKind {
    Ground,
    Water,
    Leaf,
    Wood,
    Stone,
    Snow,
}

/// A unit cube at an integer position with a color and a semantic kind.
/// Immutable once emitted; the set is rebuilt wholesale when world parameters
/// change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Voxel {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub color: &'static str,
    #[serde(rename = "type")]
    pub kind: VoxelKind,
}

pub const WATER_SURFACE: &str = "#4CC9F0";
pub const RIVER_BED: &str = "#8D7B68";
pub const GROUND_FILL: &str = "#606c38";
pub const DEEP_STONE: &str = "#4A4036";
pub const HIGH_ROCK: &str = "#6F5E53";
pub const SNOW_CAP: &str = "#F1FAEE";
pub const TREE_TRUNK: &str = "#5D4037";

/// Dry-grass shades drawn per top voxel below the rock line.
pub const GRASS_SHADES: [&str; 3] = ["#D4A373", "#588157", "#A3B18A"];

/// Warm autumn tones; one draw per tree crown.
pub const CROWN_SHADES: [&str; 6] = [
    "#FF2200", "#FF6600", "#FFD700", "#FF9900", "#FFFF00", "#FF4500",
];
