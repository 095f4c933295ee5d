// src/creature/spawn.rs

use nalgebra::Vector3;
use rand::Rng;

use crate::terrain::heightfield::height_at;
use crate::terrain::obstacle::has_obstacle_at;

use super::state::{AnimalState, Archetype};

/// The showcase population: two foxes and a bear with fixed spawn points.
pub fn default_herd() -> Vec<AnimalState> {
    vec![
        AnimalState::new(
            1,
            Archetype::Fox,
            "orange",
            Vector3::new(5.0, 1.0, 5.0),
            Vector3::new(8.0, 1.0, 8.0),
            1.5,
        ),
        AnimalState::new(
            2,
            Archetype::Bear,
            "brown",
            Vector3::new(-8.0, 1.0, -5.0),
            Vector3::new(-4.0, 1.0, 0.0),
            0.8,
        ),
        AnimalState::new(
            3,
            Archetype::Fox,
            "orange",
            Vector3::new(6.0, 2.0, -6.0),
            Vector3::new(2.0, 2.0, -2.0),
            1.2,
        ),
    ]
}

/// Scatter `count` land creatures on dry, unobstructed columns within
/// `±bound`. Spawns target their own position, so each creature starts by
/// replanning a wander target on its first tick.
pub fn scatter<R: Rng>(count: usize, bound: i32, first_id: u32, rng: &mut R) -> Vec<AnimalState> {
    const LAND_ARCHETYPES: [Archetype; 3] = [Archetype::Fox, Archetype::Bear, Archetype::Deer];

    let mut herd = Vec::with_capacity(count);
    let mut attempts = 0;
    // Rejection sampling with a capped attempt count; a map with no dry
    // columns inside the bound simply yields a smaller herd.
    while herd.len() < count && attempts < count * 64 {
        attempts += 1;
        let x = rng.gen_range(-bound..=bound);
        let z = rng.gen_range(-bound..=bound);
        let height = height_at(x, z);
        if height < 0 || has_obstacle_at(x, z) {
            continue;
        }
        let archetype = LAND_ARCHETYPES[rng.gen_range(0..LAND_ARCHETYPES.len())];
        let position = Vector3::new(x as f32, (height + 1) as f32, z as f32);
        herd.push(AnimalState::new(
            first_id + herd.len() as u32,
            archetype,
            default_color(archetype),
            position,
            position,
            default_speed(archetype),
        ));
    }
    herd
}

fn default_color(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Fox => "orange",
        Archetype::Bear => "brown",
        Archetype::Deer => "tan",
        Archetype::Fish => "skyblue",
    }
}

fn default_speed(archetype: Archetype) -> f32 {
    match archetype {
        Archetype::Fox => 1.5,
        Archetype::Bear => 0.8,
        Archetype::Deer => 1.2,
        Archetype::Fish => 1.0,
    }
}
