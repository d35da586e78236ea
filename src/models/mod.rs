//! Data models for the message board
//!
//! The stored `Message` entity plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod message;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use message::Message;
pub use requests::{CreateMessageRequest, UpdateMessageRequest};
pub use responses::HealthResponse;
