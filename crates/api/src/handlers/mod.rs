//! Request handlers for the catalog service.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `catalogo_db`, and map errors via [`crate::error::AppError`].

pub mod items;
pub mod ratings;
