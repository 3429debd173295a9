pub mod animation;
pub mod config;
pub mod icons;
