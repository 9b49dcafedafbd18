pub mod config_io;
pub mod resource_registry;
