//! Terminal front end: the card renderer and the input-line session loop.

pub mod renderer;
pub mod session;
