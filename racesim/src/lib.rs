pub mod core;
pub mod error;
pub mod post;
pub mod pre;
pub mod store;
