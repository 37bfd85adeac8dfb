pub mod footer;
pub mod get_started;
pub mod showcase;
