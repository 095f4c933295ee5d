// src/creature/body.rs

//! Archetype-to-geometry lookup. Navigation never branches on the archetype;
//! the renderer resolves the body through this table and instances the boxes.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use super::state::Archetype;

/// One colored box of a creature body, offset from its ground anchor.
#[derive(Clone, Copy, Debug)]
pub struct BodyPart {
    pub offset: [f32; 3],
    pub size: [f32; 3],
    pub color: &'static str,
}

/// Box-list geometry descriptor the renderer instances per creature.
#[derive(Clone, Copy, Debug)]
pub struct BodyDescriptor {
    pub parts: &'static [BodyPart],
}

const FOX_BODY: &[BodyPart] = &[
    BodyPart {
        offset: [0.0, 0.4, 0.0],
        size: [0.4, 0.4, 0.8],
        color: "#E36414",
    },
    BodyPart {
        offset: [0.0, 0.7, 0.3],
        size: [0.3, 0.3, 0.3],
        color: "#E36414",
    },
    // White-tipped tail.
    BodyPart {
        offset: [0.0, 0.5, -0.5],
        size: [0.2, 0.2, 0.4],
        color: "#FFFFFF",
    },
];

const BEAR_BODY: &[BodyPart] = &[
    BodyPart {
        offset: [0.0, 0.6, 0.0],
        size: [0.8, 0.7, 1.2],
        color: "#4A3728",
    },
    BodyPart {
        offset: [0.0, 1.1, 0.5],
        size: [0.5, 0.5, 0.4],
        color: "#4A3728",
    },
];

const DEER_BODY: &[BodyPart] = &[BodyPart {
    offset: [0.0, 0.4, 0.0],
    size: [0.4, 0.4, 0.6],
    color: "#C19A6B",
}];

const FISH_BODY: &[BodyPart] = &[BodyPart {
    offset: [0.0, 0.4, 0.0],
    size: [0.4, 0.4, 0.6],
    color: "#4CC9F0",
}];

static BODY_REGISTRY: OnceCell<HashMap<Archetype, BodyDescriptor>> = OnceCell::new();

/// Geometry descriptor for an archetype. Total over the closed set.
pub fn body_of(archetype: Archetype) -> BodyDescriptor {
    let registry = BODY_REGISTRY.get_or_init(|| {
        HashMap::from([
            (Archetype::Fox, BodyDescriptor { parts: FOX_BODY }),
            (Archetype::Bear, BodyDescriptor { parts: BEAR_BODY }),
            (Archetype::Deer, BodyDescriptor { parts: DEER_BODY }),
            (Archetype::Fish, BodyDescriptor { parts: FISH_BODY }),
        ])
    });
    registry[&archetype]
}
