//! Framework-free navbar logic: state, view model and ambient event plumbing.

pub mod ambient;
pub mod platform;
pub mod state;
pub mod view;
