pub mod coords;
pub mod generator;
pub mod heightfield;
pub mod material;
pub mod obstacle;

pub use generator::{RenderLists, WorldGenerator, WorldVoxels};
pub use heightfield::{height_at, river_distance, surface_noise};
pub use material::{Voxel, VoxelKind};
pub use obstacle::has_obstacle_at;

#[cfg(test)]
mod tests;
