pub mod catalog;
pub mod listing;
pub mod summarize;
