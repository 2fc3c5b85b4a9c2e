pub mod challenge;
pub mod components;
pub mod daily;
pub mod homepage;
pub mod layout;
pub mod play;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
