//! Rendering utilities and the scene renderer.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer
//! - `shapes`: Bresenham/midpoint integer shape drawing
//! - `attractions`: Attraction and player sprites
//! - `scene`: Full-scene redraw (grid + attractions + player)

pub mod attractions;
pub mod framebuffer;
pub mod scene;
pub mod shapes;
