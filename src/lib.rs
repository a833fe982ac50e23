pub mod catalog;

#[cfg(feature = "cli")]
pub mod cli;
