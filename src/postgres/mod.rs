// ABOUTME: PostgreSQL utilities module
// ABOUTME: Exports connection management and extension installation

pub mod connection;
pub mod extensions;

pub use connection::connect;
pub use extensions::{create_vector_extension, vector_extension_available};
