use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub speech: SpeechConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeechConfig {
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryConfig {
    pub path: String,
    pub max_entries: usize,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
