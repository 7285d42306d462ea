pub mod cli;
pub mod config;
pub mod contest;
pub mod error;
pub mod fetch;
pub mod github;
pub mod judge;
pub mod judges;
pub mod prompt;
pub mod scaffold;
pub mod template;
pub mod trash;
pub mod upload;

pub use error::{Error, Result};
pub use judge::Judge;
pub use judges::JudgeKind;
