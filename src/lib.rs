// Library exports for the generator binary and tests
pub mod config;
pub mod constants;
pub mod draw;
pub mod export;
pub mod gradient;
pub mod icon;
