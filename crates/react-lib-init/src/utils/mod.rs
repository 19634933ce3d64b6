pub mod child;
pub(crate) mod error_messages;
pub mod log;
pub mod wizard;
