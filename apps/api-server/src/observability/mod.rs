//! Observability module - request IDs for correlating logs and responses.

mod request_id;

pub use request_id::RequestIdMiddleware;
