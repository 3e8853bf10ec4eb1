// Scenario tests driving the controller through synthetic page events.
pub mod common;

mod theme;
