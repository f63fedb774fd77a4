pub mod commands;
pub mod runner;
pub mod terminal;
