pub mod body;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod item;
pub mod presenter;
pub mod renderer;
pub mod segment;
pub mod session;
pub mod terminal;
pub mod ui;
