pub mod app;
pub mod config;
pub mod graph;
pub mod io;
