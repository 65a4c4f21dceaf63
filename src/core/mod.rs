//! Core game types and logic (data, input, world).
//!
//! Re-exports:
//! - `player`: Player data
//! - `attraction`: Attraction data and kinds
//! - `world`: World state, movement, and interaction checks
//! - `process_events`: Input handling

pub mod attraction;
pub mod player;
pub mod process_events;
pub mod world;
