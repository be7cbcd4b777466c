pub mod case;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod folder;
pub mod info;
pub mod logging;
pub mod mode;

pub use case::{Batch, Bounds, Instance, Sequence, TestCase};
pub use config::GenConfig;
pub use context::RunContext;
pub use error::GenError;
pub use mode::OutputMode;
