pub mod bootstrap;
pub mod game;
pub mod runner;
