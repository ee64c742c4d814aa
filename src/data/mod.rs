pub mod export;
pub mod geometry;
pub mod paths;
pub mod points;
pub mod scoring;
pub mod session;
