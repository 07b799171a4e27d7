//! Pure simulation and geometry: no DOM, no drawing.
//!
//! Everything here compiles natively and is unit-tested from `tests/`.

pub mod constants;
pub mod halo;
pub mod mesh;
pub mod particle;

pub use constants::*;
pub use halo::*;
pub use mesh::*;
pub use particle::*;
