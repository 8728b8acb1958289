//! Cellular-automaton demos driven by a shared pixel-blit window loop.
//!
//! The library half is the simulation core: a double-buffered [`grid::Grid`],
//! the edge policies in [`boundary`], and four rule kernels under [`rules`]
//! (Conway's Game of Life, a Wolfram elementary automaton, Langton's ant and
//! a stochastic rock-paper-scissors game). Each kernel implements
//! [`automaton::Automaton`]; the binaries in `src/bin/` pick one and hand it
//! to [`app::launch`], which owns the window, the frame buffer and the tick
//! cadence.

pub mod app;
pub mod automaton;
pub mod boundary;
pub mod config;
pub mod grid;
pub mod input;
pub mod palette;
pub mod render;
pub mod rules;
pub mod state;
