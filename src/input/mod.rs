//! Input processing module
//! Reads the raw sentence from a line-oriented source

pub mod reader;
