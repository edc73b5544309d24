pub mod cli;
pub mod env;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod table_demo;
