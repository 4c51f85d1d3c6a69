// App module for the project board
// Owns the board state and drives the surface and address bar

pub mod actions;
pub mod state;

pub use actions::{Board, Surface};
pub use state::BoardState;
