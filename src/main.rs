use env_logger::{Builder, Env, Target};
use log::error;
use std::process;
use xkcd_reader::{run, Cli, Settings};

#[tokio::main]
async fn main() {
    // Init logging, kept off stdout so it does not interleave with the comic
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stderr);
    builder.init();

    // Parse Args
    let args = Cli::new();

    // Parse Settings
    let settings = match Settings::new(&args.config_file) {
        Ok(s) => s,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // Run
    if let Err(e) = run(settings).await {
        error!("Application error: {}", e);
        process::exit(1);
    }
}
