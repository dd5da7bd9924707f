pub mod board;
pub mod factory;
pub mod layout;
