//! Individual checks, each returning the issues it found.

pub mod categories;
pub mod columns;
pub mod rows;
