use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::creature::spawn::{default_herd, scatter};
use crate::creature::state::Archetype;
use crate::terrain::heightfield::height_at;
use crate::terrain::obstacle::has_obstacle_at;

#[test]
fn default_herd_matches_the_scene_population() {
    let herd = default_herd();
    assert_eq!(herd.len(), 3);
    assert!(herd.iter().all(|a| a.stuck_counter == 0));
    assert_eq!(herd[0].archetype, Archetype::Fox);
    assert_eq!(herd[1].archetype, Archetype::Bear);
    assert_eq!(herd[1].speed, 0.8);
    assert_eq!(herd[2].speed, 1.2);
}

#[test]
fn scatter_places_creatures_on_dry_clear_columns() {
    let mut rng = SmallRng::seed_from_u64(5);
    let herd = scatter(8, 20, 10, &mut rng);

    assert_eq!(herd.len(), 8);
    for (slot, animal) in herd.iter().enumerate() {
        assert_eq!(animal.id, 10 + slot as u32);
        assert_eq!(animal.target, animal.position);

        let (x, z) = (
            animal.position.x.round() as i32,
            animal.position.z.round() as i32,
        );
        assert!(height_at(x, z) >= 0, "creature {} spawned underwater", animal.id);
        assert!(!has_obstacle_at(x, z), "creature {} spawned in a tree", animal.id);
        assert_eq!(animal.position.y, (height_at(x, z) + 1) as f32);
    }
}
