pub mod bounds_spawning;
pub mod helpers;
pub mod segment_spawning;
