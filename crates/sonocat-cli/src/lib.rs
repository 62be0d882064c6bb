//! Library side of the `sonocat` command: logging setup, filter argument
//! parsing and table rendering.

pub mod logging;
pub mod render;
pub mod selection;
