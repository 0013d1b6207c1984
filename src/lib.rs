//! tilt-2048: the model layer of a 2048-style sliding-tile puzzle
//!
//! This crate provides:
//! - A square `Board` of immutable `Tile`s with a viewing perspective (`engine` module)
//! - One direction-agnostic column routine (`engine::compact_column`) behind every tilt
//! - A `Model` tracking score, max score and game-over status
//!
//! Quick start:
//! ```
//! use tilt_2048::{Model, Side, Tile};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut model = Model::new(4);
//! model.add_tile(Tile::create(2, 0, 0)).unwrap();
//! model.add_tile(Tile::create(2, 0, 3)).unwrap();
//!
//! // Both tiles slide north and merge into a 4 at the top edge.
//! assert!(model.tilt(Side::North));
//! assert_eq!(model.score(), 4);
//!
//! // Deterministic spawning with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let spawned = model.add_random_tile(&mut rng);
//! assert!(spawned.is_some());
//! ```
//!
//! A tilt in any direction views the board from that side, runs the same
//! north tilt over every column, and restores the default perspective.
//!
pub mod config;
pub mod engine;
pub mod error;
pub mod model;

pub use config::GameConfig;
pub use engine::{Board, Side, Tile};
pub use error::EngineError;
pub use model::Model;
