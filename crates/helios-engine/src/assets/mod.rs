pub mod catalog;
pub mod library;
pub mod source;
