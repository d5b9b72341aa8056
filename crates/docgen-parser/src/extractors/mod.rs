//! Syntax extraction from ast-grep trees.

pub mod go;
