//! Invoice listing engine (invdash)
//!
//! Core pipeline for an invoice dashboard: filter, sort, and paginate an
//! in-memory invoice collection, track row selection, and derive summary
//! counts. Follows a Pure Core / Impure Shell architecture: `model`,
//! `query`, `store`, and `summary` are pure data and pure functions;
//! `source`, `presence`, `config`, and `logging` form the shell.

pub mod config;
pub mod logging;
pub mod model;
pub mod presence;
pub mod query;
pub mod render;
pub mod source;
pub mod state;
pub mod store;
pub mod summary;
