//! Application services - use cases composed from domain types and ports.

pub mod posts;
