pub mod archetype;
pub mod catalog;
pub mod components;
pub mod course;
pub mod generator_plugin;
pub mod level_config;
pub mod level_error;
pub mod motion;
