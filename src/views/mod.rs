pub mod account;
pub mod admin;
pub mod homepage;
pub mod layout;

// Re-export commonly used functions from layout
pub use layout::{page, page_with_user};
