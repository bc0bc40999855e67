// src/generator/mod.rs
pub mod config;
pub mod goblin_halls;

pub use config::{GeneratorConfig, TunnelStyle};
pub use goblin_halls::{
    carve_tunnel_between, connected_components, goblin_halls, GenerationStats, GoblinHalls,
};
