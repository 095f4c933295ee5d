use crate::terrain::coords::WORLD_RADIUS;
use crate::terrain::heightfield::{height_at, river_distance, surface_noise};
use approx::assert_relative_eq;
use test_case::test_case;

#[test]
fn river_source_is_carved_to_the_bed() {
    // The river path crosses the origin, overriding whatever the noise says.
    assert_eq!(height_at(0, 0), -1);
}

#[test]
fn open_slope_keeps_base_plus_noise() {
    // (10, 0) is 10 units from the river path: no carving, no bank taper.
    let expected = (12.0 - 10.0 * 0.6 + surface_noise(10.0, 0.0)).floor() as i32;
    assert_eq!(height_at(10, 0), expected);
    assert_eq!(height_at(10, 0), 7);
}

#[test]
fn bank_columns_taper_toward_the_water() {
    // (3, 0) sits 3 units out: inside the bank band, outside the bed.
    assert_eq!(height_at(3, 0), 5);
}

#[test_case(0, 0)]
#[test_case(10, 0)]
#[test_case(-26, 26)]
#[test_case(7, -13)]
fn height_is_deterministic(x: i32, z: i32) {
    assert_eq!(height_at(x, z), height_at(x, z));
}

#[test]
fn river_distance_follows_the_winding_path() {
    for z in -WORLD_RADIUS..=WORLD_RADIUS {
        let path = (z as f64 * 0.2).sin() * 3.0;
        assert_relative_eq!(river_distance(0, z), path.abs(), epsilon = 1e-9);
    }
}

#[test]
fn rim_columns_sink_below_the_waterline() {
    // Past the mountain profile the noise term dips negative somewhere.
    let submerged = (-WORLD_RADIUS..=WORLD_RADIUS)
        .flat_map(|x| (-WORLD_RADIUS..=WORLD_RADIUS).map(move |z| (x, z)))
        .filter(|&(x, z)| river_distance(x, z) >= 4.0 && height_at(x, z) < 0)
        .count();
    assert!(submerged > 0);
}
