mod world;

pub use world::{RenderLists, WorldGenerator, WorldVoxels};
