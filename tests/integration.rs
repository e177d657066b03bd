// Integration tests for houseflow
// This file serves as the main entry point for integration tests

mod common;

#[path = "integration/navigation.rs"]
mod navigation;

#[path = "integration/chores.rs"]
mod chores;

#[path = "integration/ui_flow.rs"]
mod ui_flow;
