pub mod light;
pub mod mesh;
pub mod node;
pub mod points;
