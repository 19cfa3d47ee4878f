pub mod gesture;
pub mod geo;
pub mod map;
pub mod models;
