//! Domain types: block blueprints, tower configuration, errors.

pub mod block;
pub mod config;
pub mod error;
