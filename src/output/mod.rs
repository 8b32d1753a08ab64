//! Output rendering: prompt and verdict lines

pub mod report;
