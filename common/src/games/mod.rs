mod session_rng;

pub mod dungeon;

pub use session_rng::SessionRng;
