use std::collections::HashMap;

use log::info;

use crate::terrain::generator::WorldGenerator;
use crate::terrain::heightfield::height_at;
use crate::terrain::material::{Voxel, VoxelKind, WATER_SURFACE};
use crate::terrain::obstacle::has_obstacle_at;

const RADIUS: i32 = 6;

fn generate() -> crate::terrain::generator::WorldVoxels {
    let mut generator = WorldGenerator::new(7);
    generator.generate(RADIUS)
}

fn index(voxels: &[Voxel]) -> HashMap<(i32, i32, i32), VoxelKind> {
    voxels.iter().map(|v| ((v.x, v.y, v.z), v.kind)).collect()
}

#[test]
fn every_column_is_emitted_exactly_once() {
    let world = generate();
    let columns = (2 * RADIUS + 1) * (2 * RADIUS + 1);

    let wet = world.water.len() as i32;
    // Dry columns are counted by their top voxel.
    let dry = world
        .terrain
        .iter()
        .filter(|v| height_at(v.x, v.z) >= 0 && v.y == height_at(v.x, v.z))
        .count() as i32;

    assert_eq!(wet + dry, columns);
}

#[test]
fn strata_match_the_heightfield() {
    let _ = env_logger::builder().is_test(true).try_init();
    let world = generate();
    let terrain = index(&world.terrain);

    for x in -RADIUS..=RADIUS {
        for z in -RADIUS..=RADIUS {
            let height = height_at(x, z);

            if height < 0 {
                assert_eq!(terrain.get(&(x, -1, z)), Some(&VoxelKind::Ground));
                assert!(world
                    .water
                    .iter()
                    .any(|v| (v.x, v.y, v.z) == (x, 0, z) && v.color == WATER_SURFACE));
                continue;
            }

            for y in -2..=height {
                let kind = terrain
                    .get(&(x, y, z))
                    .unwrap_or_else(|| panic!("missing stratum at ({x}, {y}, {z})"));
                if y == height {
                    let expected = if height > 9 {
                        VoxelKind::Snow
                    } else if height > 6 {
                        VoxelKind::Stone
                    } else {
                        VoxelKind::Ground
                    };
                    assert_eq!(*kind, expected, "top voxel at ({x}, {z})");
                } else if y < height - 2 {
                    assert_eq!(*kind, VoxelKind::Stone, "deep stratum at ({x}, {y}, {z})");
                } else {
                    assert_eq!(*kind, VoxelKind::Ground, "fill stratum at ({x}, {y}, {z})");
                }
            }
        }
    }
    info!("checked {} terrain voxels", world.terrain.len());
}

#[test]
fn trees_follow_the_oracle() {
    let world = generate();
    // Neighboring crowns may overlap, so look for voxels in the raw list
    // rather than deduplicating by position.
    let holds = |x: i32, y: i32, z: i32, kind: VoxelKind| {
        world
            .trees
            .iter()
            .any(|v| (v.x, v.y, v.z) == (x, y, z) && v.kind == kind)
    };

    let mut tree_columns = 0;
    for x in -RADIUS..=RADIUS {
        for z in -RADIUS..=RADIUS {
            if !has_obstacle_at(x, z) {
                continue;
            }
            tree_columns += 1;
            let height = height_at(x, z);
            assert!(holds(x, height + 1, z, VoxelKind::Wood), "trunk at ({x}, {z})");
            assert!(holds(x, height + 2, z, VoxelKind::Wood), "trunk at ({x}, {z})");
            // Crown layers sit above the trunk; the trim keeps 9 + 5 offsets.
            assert!(holds(x, height + 3, z, VoxelKind::Leaf), "crown at ({x}, {z})");
            assert!(holds(x, height + 4, z, VoxelKind::Leaf), "crown at ({x}, {z})");
            // The trimmed upper-layer corner stays open.
            assert!(!holds(x + 1, height + 4, z + 1, VoxelKind::Leaf));
        }
    }

    assert!(tree_columns > 0, "radius {RADIUS} should hold a few trees");
    // 2 trunk + 14 crown voxels per tree, duplicates from neighbors included.
    assert_eq!(world.trees.len(), tree_columns * 16);
}

#[test]
fn cosmetic_seed_never_moves_structure() {
    let a = WorldGenerator::new(1).generate(RADIUS);
    let b = WorldGenerator::new(99).generate(RADIUS);

    let strip = |voxels: &[Voxel]| -> Vec<(i32, i32, i32, VoxelKind)> {
        voxels.iter().map(|v| (v.x, v.y, v.z, v.kind)).collect()
    };

    assert_eq!(strip(&a.terrain), strip(&b.terrain));
    assert_eq!(strip(&a.water), strip(&b.water));
    assert_eq!(strip(&a.trees), strip(&b.trees));
}

#[test]
fn render_lists_merge_trees_into_terrain() {
    let world = generate();
    let (terrain, trees, water) = (world.terrain.len(), world.trees.len(), world.water.len());

    let lists = world.into_render_lists();
    assert_eq!(lists.terrain.len(), terrain + trees);
    assert_eq!(lists.water.len(), water);
}

#[test]
fn voxel_wire_shape_matches_the_renderer() {
    let voxel = Voxel {
        x: 1,
        y: 2,
        z: 3,
        color: "#4CC9F0",
        kind: VoxelKind::Water,
    };
    let json = serde_json::to_string(&voxel).expect("voxel serializes");
    assert_eq!(json, r##"{"x":1,"y":2,"z":3,"color":"#4CC9F0","type":"water"}"##);
}
