//! API Module
//!
//! HTTP handlers and routing for the message board REST API.
//!
//! # Endpoints
//! - `POST /messages` - Create a message
//! - `GET /messages` - List all messages
//! - `GET /messages/:id` - Fetch a message by id
//! - `PUT /messages/:id` - Update a message
//! - `DELETE /messages/:id` - Delete a message
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
