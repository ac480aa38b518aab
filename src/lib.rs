//! Party Planner library exports for testing

pub mod core;
pub mod planner;
pub mod repository;
pub mod tui;
pub mod view;

#[cfg(test)]
pub mod test_support;
