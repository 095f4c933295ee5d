// src/creature/navigation.rs

//! Per-tick movement policy: advance toward the target, replan around
//! obstacles and cliffs, and teleport a creature clear once it has been
//! wedged for too long. Greedy and local on purpose; there is no pathfinding.

use std::f32::consts::TAU;

use log::debug;
use nalgebra::Vector3;
use rand::Rng;

use crate::terrain::coords::column_of;
use crate::terrain::heightfield::height_at;
use crate::terrain::obstacle::has_obstacle_at;

use super::state::AnimalState;

/// Vertical settle factor per tick. Rate-dependent on purpose: the lerp is a
/// presentation smoothing, not part of the blocked/obstacle decisions.
const SETTLE_FACTOR: f32 = 0.1;
/// Cosmetic hop oscillation, applied to the tick output only.
const HOP_FREQUENCY: f32 = 10.0;
const HOP_AMPLITUDE: f32 = 0.1;

/// Tunables for the movement policy.
#[derive(Clone, Copy, Debug)]
pub struct NavConfig {
    /// Maximum height difference a creature steps across. 0 is the strict
    /// same-height variant.
    pub traversability_threshold: i32,
    /// Distance at which the current target counts as reached.
    pub arrive_radius: f32,
    /// Look-ahead distance of replanning probes.
    pub probe_distance: f32,
    /// Distance of a freshly planned wander target.
    pub wander_distance: f32,
    /// Sample radius of the escape teleport.
    pub escape_radius: f32,
    /// Random samples drawn per blocked tick before giving up until the next.
    pub sample_attempts: u32,
    /// Blocked ticks tolerated before the escape kicks in.
    pub stuck_limit: u32,
    /// Wander targets are clamped to `±wander_bound` on both planar axes.
    pub wander_bound: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            traversability_threshold: 1,
            arrive_radius: 0.5,
            probe_distance: 2.0,
            wander_distance: 10.0,
            escape_radius: 5.0,
            sample_attempts: 10,
            stuck_limit: 20,
            wander_bound: 20.0,
        }
    }
}

/// Pose handed to the renderer after a tick.
#[derive(Clone, Copy, Debug)]
pub struct TickOutput {
    /// Render position: the logical position plus the cosmetic hop.
    pub position: Vector3<f32>,
    /// Yaw toward the current target, radians about +Y; 0 faces +Z.
    pub orientation: f32,
}

/// Advance one creature by `dt` seconds.
///
/// Movement is planar; the vertical coordinate settles toward one voxel above
/// the current column. A blocked tick mutates only the target (replanning) or,
/// past the stuck limit, relocates the creature to a clear column nearby.
pub fn tick<R: Rng>(
    state: &mut AnimalState,
    cfg: &NavConfig,
    rng: &mut R,
    dt: f32,
    elapsed: f32,
) -> TickOutput {
    let to_target = Vector3::new(
        state.target.x - state.position.x,
        0.0,
        state.target.z - state.position.z,
    );
    let distance = to_target.norm();
    let direction = if distance > f32::EPSILON {
        to_target / distance
    } else {
        Vector3::zeros()
    };
    let next = state.position + direction * (state.speed * dt * 2.0);

    let (col_x, col_z) = column_of(state.position.x, state.position.z);
    let (next_x, next_z) = column_of(next.x, next.z);
    let current_height = height_at(col_x, col_z);
    let next_height = height_at(next_x, next_z);

    let too_steep = (next_height - current_height).abs() > cfg.traversability_threshold;
    let blocked =
        distance < cfg.arrive_radius || has_obstacle_at(next_x, next_z) || too_steep;

    let mut hop = 0.0;
    if !blocked {
        state.position.x = next.x;
        state.position.z = next.z;
        let rest_y = (current_height + 1) as f32;
        state.position.y += (rest_y - state.position.y) * SETTLE_FACTOR;
        state.stuck_counter = 0;
        hop = ((elapsed * HOP_FREQUENCY).sin() * HOP_AMPLITUDE).max(0.0);
    } else if state.stuck_counter > cfg.stuck_limit {
        // The counter passed the limit on an earlier tick; one more blocked
        // tick means the wander replans are not getting this creature out.
        escape(state, cfg, rng);
    } else {
        state.stuck_counter += 1;
        replan(state, cfg, rng, current_height);
    }

    TickOutput {
        position: state.position + Vector3::new(0.0, hop, 0.0),
        orientation: yaw_toward_target(state),
    }
}

/// Pick a fresh wander target along a direction whose near probe is level and
/// clear. Accepting nothing is fine; the next tick draws fresh samples.
fn replan<R: Rng>(state: &mut AnimalState, cfg: &NavConfig, rng: &mut R, current_height: i32) {
    for _ in 0..cfg.sample_attempts {
        let angle = rng.gen_range(0.0..TAU);
        let (dx, dz) = (angle.sin(), angle.cos());
        let (probe_x, probe_z) = column_of(
            state.position.x + dx * cfg.probe_distance,
            state.position.z + dz * cfg.probe_distance,
        );
        if height_at(probe_x, probe_z) != current_height || has_obstacle_at(probe_x, probe_z) {
            continue;
        }
        state.target = Vector3::new(
            (state.position.x + dx * cfg.wander_distance)
                .clamp(-cfg.wander_bound, cfg.wander_bound),
            state.position.y,
            (state.position.z + dz * cfg.wander_distance)
                .clamp(-cfg.wander_bound, cfg.wander_bound),
        );
        return;
    }
}

/// Relocate a persistently wedged creature to a clear column within the
/// escape radius. Pauses it there by targeting its own position.
fn escape<R: Rng>(state: &mut AnimalState, cfg: &NavConfig, rng: &mut R) {
    for _ in 0..cfg.sample_attempts {
        let angle = rng.gen_range(0.0..TAU);
        let reach = rng.gen_range(0.0..=cfg.escape_radius);
        let x = state.position.x + angle.sin() * reach;
        let z = state.position.z + angle.cos() * reach;
        let (col_x, col_z) = column_of(x, z);
        if has_obstacle_at(col_x, col_z) {
            continue;
        }
        let height = height_at(col_x, col_z);
        state.position = Vector3::new(x, (height + 1) as f32, z);
        state.target = state.position;
        state.stuck_counter = 0;
        debug!("creature {} escaped to column ({}, {})", state.id, col_x, col_z);
        return;
    }
    // No clear column found; let the wander loop try again from zero.
    state.stuck_counter = 0;
}

fn yaw_toward_target(state: &AnimalState) -> f32 {
    let dx = state.target.x - state.position.x;
    let dz = state.target.z - state.position.z;
    if dx.abs() < f32::EPSILON && dz.abs() < f32::EPSILON {
        0.0
    } else {
        dx.atan2(dz)
    }
}
