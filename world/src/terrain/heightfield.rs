// src/terrain/heightfield.rs

//! The pure surface-height function: a radially decaying mountain cut by a
//! winding river. Total and stateless; every consumer sees the same landscape.

/// Columns closer to the river centerline than this are carved to the bed.
pub const RIVER_HALF_WIDTH: f64 = 2.5;
/// Columns between the bed and this distance taper toward the water.
pub const BANK_WIDTH: f64 = 4.0;

/// Fixed terrain shaping term layered on top of the mountain profile.
pub fn surface_noise(x: f64, z: f64) -> f64 {
    (x * 0.1).sin() * (z * 0.1).cos() * 2.0 + (x * 0.3 + z * 0.2).sin()
}

/// Horizontal distance from a column to the river centerline.
///
/// The obstacle oracle and the world generator must both use this exact
/// formula; a private re-derivation would let trees drift into the water.
pub fn river_distance(x: i32, z: i32) -> f64 {
    let river_path = (z as f64 * 0.2).sin() * 3.0;
    (x as f64 - river_path).abs()
}

/// Surface height of the column at `(x, z)`.
///
/// Negative heights are submerged; the world generator fills them with water.
/// Intermediate math stays in `f64` so the landscape matches across every
/// caller down to the last voxel.
pub fn height_at(x: i32, z: i32) -> i32 {
    let (xf, zf) = (x as f64, z as f64);

    // Mountain profile: highest at the origin, fading toward the rim.
    let distance = (xf * xf + zf * zf).sqrt();
    let mut height = (12.0 - distance * 0.6).max(0.0);
    height += surface_noise(xf, zf);

    let to_river = river_distance(x, z);
    if to_river < RIVER_HALF_WIDTH {
        height = -1.0; // river bed
    } else if to_river < BANK_WIDTH {
        height *= 0.5; // banks taper toward the water
    }

    height.floor() as i32
}
