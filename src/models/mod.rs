pub mod cli;
pub mod comic;
pub mod command;
pub mod target;

pub use cli::Cli;
pub use comic::Comic;
pub use command::Command;
pub use target::Target;
