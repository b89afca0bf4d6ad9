// Presentation layer - Command line, console output and command handlers
pub mod cli;
pub mod commands;
pub mod console;
