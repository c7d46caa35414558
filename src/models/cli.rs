use clap::Parser;

#[derive(clap::Parser)]
#[command(about = "Read xkcd from the terminal")]
pub struct Cli {
    /// Configuration file, extension optional. Missing files are ignored.
    #[arg(short, long, default_value = "xkcd-reader")]
    pub config_file: String,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
