// src/creature/state.rs

use nalgebra::Vector3;

/// Closed set of creature body archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    Fox,
    Bear,
    Deer,
    Fish,
}

/// Everything the navigation state machine owns for one creature.
///
/// Mutated only by [`crate::creature::navigation::tick`]; the renderer reads
/// the tick output, never this struct, so presentation offsets can never leak
/// back into movement decisions.
#[derive(Clone, Debug)]
pub struct AnimalState {
    pub id: u32,
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub speed: f32,
    pub archetype: Archetype,
    pub color: &'static str,
    /// Consecutive blocked ticks; reset by every successful move or escape.
    pub stuck_counter: u32,
}

impl AnimalState {
    pub fn new(
        id: u32,
        archetype: Archetype,
        color: &'static str,
        position: Vector3<f32>,
        target: Vector3<f32>,
        speed: f32,
    ) -> Self {
        Self {
            id,
            position,
            target,
            speed,
            archetype,
            color,
            stuck_counter: 0,
        }
    }
}
