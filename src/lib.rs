//! Library crate for code-drop-back, exposing modules for the binary and integration tests.

mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
