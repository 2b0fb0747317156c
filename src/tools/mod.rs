pub mod registry;
pub mod send_message;
