// src/lib.rs

//! Emberwood world core: a deterministic voxel landscape and the creatures
//! that wander it.
//!
//! The renderer, camera and UI live in a separate client. This crate owns the
//! world model only: the pure column functions, the one-shot voxel builder
//! derived from them, and the per-creature navigation state machine that
//! consults them every tick. Geometry generation and movement share the same
//! two functions, so the visible world and the navigable world never disagree.

pub mod creature;
pub mod narration;
pub mod terrain;
