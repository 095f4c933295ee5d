// src/terrain/generator/world.rs

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::terrain::heightfield::height_at;
use crate::terrain::material::{
    Voxel, VoxelKind, CROWN_SHADES, DEEP_STONE, GRASS_SHADES, GROUND_FILL, HIGH_ROCK, RIVER_BED,
    SNOW_CAP, TREE_TRUNK, WATER_SURFACE,
};
use crate::terrain::obstacle::has_obstacle_at;

/// Top voxels above this height are snow caps.
const SNOW_LINE: i32 = 9;
/// Top voxels above this height are bare rock.
const ROCK_LINE: i32 = 6;
/// Lowest stratum of every dry column.
const BEDROCK_Y: i32 = -2;
/// Trunk height in voxels.
const TRUNK_HEIGHT: i32 = 2;

/// Voxels produced by one generation pass, partitioned by type.
#[derive(Clone, Debug, Default)]
pub struct WorldVoxels {
    /// Ground strata, including submerged river beds.
    pub terrain: Vec<Voxel>,
    /// Water surface voxels, one per submerged column.
    pub water: Vec<Voxel>,
    /// Trunk and crown voxels of every tree the oracle placed.
    pub trees: Vec<Voxel>,
}

/// The two flat lists the renderer instances, in its wire shape.
#[derive(Clone, Debug, Serialize)]
pub struct RenderLists {
    #[serde(rename = "terrainVoxels")]
    pub terrain: Vec<Voxel>,
    #[serde(rename = "waterVoxels")]
    pub water: Vec<Voxel>,
}

impl WorldVoxels {
    /// Merge trees into the terrain list, matching what the renderer expects.
    pub fn into_render_lists(mut self) -> RenderLists {
        self.terrain.append(&mut self.trees);
        RenderLists {
            terrain: self.terrain,
            water: self.water,
        }
    }
}

/// One-shot batch builder for the visible voxel field.
///
/// Structure comes entirely from the pure column functions; the owned RNG
/// decides cosmetic shades only. Two generators with different seeds emit
/// identical positions and kinds.
pub struct WorldGenerator {
    rng: SmallRng,
}

impl WorldGenerator {
    pub fn new(cosmetic_seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(cosmetic_seed),
        }
    }

    /// Scan every column with `|x|, |z| <= radius` and emit its voxels.
    pub fn generate(&mut self, radius: i32) -> WorldVoxels {
        let mut voxels = WorldVoxels::default();

        for x in -radius..=radius {
            for z in -radius..=radius {
                let height = height_at(x, z);

                if height < 0 {
                    voxels.water.push(Voxel {
                        x,
                        y: 0,
                        z,
                        color: WATER_SURFACE,
                        kind: VoxelKind::Water,
                    });
                    voxels.terrain.push(Voxel {
                        x,
                        y: -1,
                        z,
                        color: RIVER_BED,
                        kind: VoxelKind::Ground,
                    });
                    continue;
                }

                for y in BEDROCK_Y..=height {
                    voxels.terrain.push(self.stratum(x, y, z, height));
                }

                if has_obstacle_at(x, z) {
                    self.grow_tree(x, z, height, &mut voxels.trees);
                }
            }
        }

        debug!(
            "generated {} terrain, {} water, {} tree voxels within radius {}",
            voxels.terrain.len(),
            voxels.water.len(),
            voxels.trees.len(),
            radius
        );
        voxels
    }

    fn stratum(&mut self, x: i32, y: i32, z: i32, height: i32) -> Voxel {
        let (color, kind) = if y == height {
            if height > SNOW_LINE {
                (SNOW_CAP, VoxelKind::Snow)
            } else if height > ROCK_LINE {
                (HIGH_ROCK, VoxelKind::Stone)
            } else {
                let shade = GRASS_SHADES[self.rng.gen_range(0..GRASS_SHADES.len())];
                (shade, VoxelKind::Ground)
            }
        } else if y < height - 2 {
            (DEEP_STONE, VoxelKind::Stone)
        } else {
            (GROUND_FILL, VoxelKind::Ground)
        };

        Voxel { x, y, z, color, kind }
    }

    /// Two trunk voxels, then a 3x3 two-layer crown trimmed to a rounded shape.
    fn grow_tree(&mut self, x: i32, z: i32, height: i32, out: &mut Vec<Voxel>) {
        for step in 1..=TRUNK_HEIGHT {
            out.push(Voxel {
                x,
                y: height + step,
                z,
                color: TREE_TRUNK,
                kind: VoxelKind::Wood,
            });
        }

        let crown = CROWN_SHADES[self.rng.gen_range(0..CROWN_SHADES.len())];
        for lx in -1i32..=1 {
            for lz in -1i32..=1 {
                for ly in 0i32..=1 {
                    if lx.abs() + lz.abs() + ly < 3 {
                        out.push(Voxel {
                            x: x + lx,
                            y: height + TRUNK_HEIGHT + 1 + ly,
                            z: z + lz,
                            color: crown,
                            kind: VoxelKind::Leaf,
                        });
                    }
                }
            }
        }
    }
}
