use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("imgbed.default.toml");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub api_token: Option<String>,
    pub default_dir: Option<String>,
    pub default_channel: Option<String>,
    pub page_size: Option<u64>,
    pub upload_channel: Option<String>,
    pub upload_folder: Option<String>,
    pub upload_name_type: Option<String>,
    pub return_format: Option<String>,
    pub server_compress: Option<bool>,
    pub auto_retry: Option<bool>,
    pub storage_dir: Option<PathBuf>,
    pub suggestion_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

impl Config {
    /// Fills all missing values with the values of `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            api_token: self.api_token.or(fallback.api_token),
            default_dir: self.default_dir.or(fallback.default_dir),
            default_channel: self.default_channel.or(fallback.default_channel),
            page_size: self.page_size.or(fallback.page_size),
            upload_channel: self.upload_channel.or(fallback.upload_channel),
            upload_folder: self.upload_folder.or(fallback.upload_folder),
            upload_name_type: self.upload_name_type.or(fallback.upload_name_type),
            return_format: self.return_format.or(fallback.return_format),
            server_compress: self.server_compress.or(fallback.server_compress),
            auto_retry: self.auto_retry.or(fallback.auto_retry),
            storage_dir: self.storage_dir.or(fallback.storage_dir),
            suggestion_limit: self.suggestion_limit.or(fallback.suggestion_limit),
        }
    }
}
