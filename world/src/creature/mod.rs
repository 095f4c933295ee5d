pub mod body;
pub mod navigation;
pub mod spawn;
pub mod state;

pub use body::{body_of, BodyDescriptor, BodyPart};
pub use navigation::{tick, NavConfig, TickOutput};
pub use state::{AnimalState, Archetype};

#[cfg(test)]
mod tests;
