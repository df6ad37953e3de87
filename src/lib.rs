//! Clue-style board library crate.
//!
//! Builds an undirected board graph from a tile descriptor and a door descriptor, and answers
//! the "nearest room" query automated players move by.

pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod map;
pub mod search;
