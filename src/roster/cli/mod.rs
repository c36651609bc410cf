//! Terminal front end: argument parsing, the input grammar, and the screen
//! renderers. Everything here talks to the controller through actions and
//! read accessors; no presentation state leaks back into the core.

mod args;
mod commands;
mod input;
mod render;
mod styles;

pub use commands::run;
