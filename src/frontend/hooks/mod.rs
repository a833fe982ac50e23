//! Reusable hooks for the debounced search pipeline

mod use_debounce;
mod use_search;

pub use use_debounce::*;
pub use use_search::*;
