//! Wireframe rendering: camera matrices, packed colors and line generation
//!
//! Nothing here touches a GPU or a window. The camera produces the matrices,
//! the generators in [`wireframe`] turn primitives into screen-space line
//! segments, and a host-supplied [`wireframe::LineSink`] takes it from there.

pub mod camera;
pub mod color;
pub mod wireframe;

pub use camera::Camera;
pub use color::Color;
pub use wireframe::{draw_aabb, draw_grid, draw_plane, draw_sphere, LineBuffer, LineSink};
