pub mod command;
pub mod config;
pub mod fileformat;
pub mod outputs;
pub mod runner;
pub mod runtime;
pub mod utils;
