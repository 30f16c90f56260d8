pub mod orbit;
pub mod state;

pub use state::{Note, OrbitalState, Phase};
