pub mod direction;
pub mod errors;
pub mod port_id;
