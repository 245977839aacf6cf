pub mod core;

// Re-export commonly used types
pub use crate::core::direction::PortDirection;
pub use crate::core::errors::MalformedInputError;
pub use crate::core::port_id::{checked_port_id, create_port_id, SEPARATOR};
