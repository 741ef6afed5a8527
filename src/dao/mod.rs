/// Persisted document schema definitions.
pub mod models;
/// Single-document JSON store with defaulting load and atomic save.
pub mod store;
