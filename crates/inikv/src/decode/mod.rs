//! Decoding pipeline: line scanner and document parser

pub mod parser;
pub mod scanner;
