//! Key-value store adapter: raw storage port, backends, and the typed JSON
//! layer everything else reads and writes through.

pub mod adapter;
pub mod application;
