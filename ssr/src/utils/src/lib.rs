pub mod file;
pub mod read_guard;
pub mod web;
