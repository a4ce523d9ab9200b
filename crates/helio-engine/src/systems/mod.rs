pub mod highlight;
pub mod orbit;
pub mod rng;
pub mod starfield;
