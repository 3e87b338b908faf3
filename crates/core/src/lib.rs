//! Domain types, error taxonomy, and validation rules for the media catalog.
//!
//! This crate is free of I/O: everything here is pure logic shared by the
//! database and API layers.

pub mod catalog;
pub mod error;
pub mod types;
