use crate::{navigation::DEFAULT_MIN_SWIPE_DISTANCE, xkcd_client::XKCD_BASE_URL};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub base_url: Url,
    /// Loaded images are also written here when set.
    #[serde(default)]
    pub output_directory: Option<String>,
    pub min_swipe_distance: f32,
    pub show_errors: bool,
}

impl Settings {
    /// The file is optional; `XKCD_READER_*` environment variables win over it.
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("base_url", XKCD_BASE_URL)?
            .set_default("min_swipe_distance", f64::from(DEFAULT_MIN_SWIPE_DISTANCE))?
            .set_default("show_errors", false)?
            .add_source(File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix("XKCD_READER"))
            .build()?;
        builder.try_deserialize()
    }
}
