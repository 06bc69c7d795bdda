pub mod camera;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod frame;
pub mod grid;
pub mod io;
pub mod render;
pub mod rules;
pub mod snapshot;
pub mod terminal;

pub use controller::Controller;
pub use grid::Grid;
pub use rules::next_generation;
