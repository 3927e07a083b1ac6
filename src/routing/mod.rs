//! Route computation: shortest-path search, fallback synthesis and
//! turn-by-turn step generation.

mod composer;
mod dijkstra;
mod fallback;
mod instructions;
mod simplify;
mod steps;
mod to_geojson;

pub use composer::{plan_route, plan_route_with};
pub use dijkstra::shortest_path;
pub use instructions::{InstructionStyle, RandomStyle};
pub use simplify::simplify;
