pub mod configuration;
pub mod error;
pub mod models;
pub mod navigation;
pub mod reader;
pub mod run;
pub mod screen;
pub mod state;
pub mod xkcd_client;

pub use configuration::Settings;
pub use models::Cli;
pub use run::run;
