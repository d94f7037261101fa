pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod connection;
pub mod error;
pub mod evaluation;
pub mod interactive;
pub mod model;
pub mod observer;
pub mod output;
pub mod paths;
pub mod prompter;
pub mod session;
#[cfg(test)]
mod testing;
