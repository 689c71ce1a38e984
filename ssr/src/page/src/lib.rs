#![recursion_limit = "256"]
pub mod not_found;
pub mod visualize;
