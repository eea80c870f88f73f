use anyhow::{anyhow, bail, Result};
use imgbed_core::{entities::{NameType, ReturnFormat}, tag::frequency::DEFAULT_TOP_TAGS_LIMIT};
use imgbed_gateways::imgbed::{Defaults, DEFAULT_PAGE_SIZE, DEFAULT_UPLOAD_CHANNEL};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "imgbed.toml";
const DEFAULT_STORAGE_DIR: &str = ".imgbed";

const ENV_NAME_API_BASE_URL: &str = "IMGBED_API_BASE_URL";
const ENV_NAME_API_TOKEN: &str = "IMGBED_API_TOKEN";
const ENV_NAME_STORAGE_DIR: &str = "IMGBED_STORAGE_DIR";

#[derive(Debug)]
pub struct Config {
    pub api: Api,
    pub defaults: Defaults,
    pub tags: Tags,
}

#[derive(Debug)]
pub struct Api {
    /// Without trailing slashes
    pub base_url: String,
    pub token: String,
}

#[derive(Debug)]
pub struct Tags {
    /// File system directory of the local tag frequency store.
    pub storage_dir: PathBuf,
    pub suggestion_limit: usize,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config: raw::Config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .map_err(|err| anyhow!("Invalid configuration {}: {err}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut raw_config = raw_config.or(raw::Config::default());
        if let Ok(url) = env::var(ENV_NAME_API_BASE_URL) {
            raw_config.api_base_url = Some(url);
        }
        if let Ok(token) = env::var(ENV_NAME_API_TOKEN) {
            raw_config.api_token = Some(token);
        }
        if let Ok(dir) = env::var(ENV_NAME_STORAGE_DIR) {
            raw_config.storage_dir = Some(dir.into());
        }
        Self::try_from(raw_config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_base_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|err| anyhow!("Invalid API base URL '{url}': {err}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Unsupported scheme of API base URL '{url}'");
    }
    Ok(url.trim_end_matches('/').to_string())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api_base_url,
            api_token,
            default_dir,
            default_channel,
            page_size,
            upload_channel,
            upload_folder,
            upload_name_type,
            return_format,
            server_compress,
            auto_retry,
            storage_dir,
            suggestion_limit,
        } = from;

        let base_url = non_empty(api_base_url)
            .ok_or_else(|| anyhow!("Missing API base URL"))
            .and_then(|url| parse_base_url(&url))?;
        let token = non_empty(api_token).ok_or_else(|| {
            anyhow!("Missing API token (set 'api-token' or {ENV_NAME_API_TOKEN})")
        })?;
        let api = Api { base_url, token };

        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            bail!("The page size must be greater than zero");
        }
        let upload_name_type = non_empty(upload_name_type)
            .map(|name_type| {
                name_type
                    .parse::<NameType>()
                    .map_err(|_| anyhow!("Invalid upload name type '{name_type}'"))
            })
            .transpose()?;
        let return_format = non_empty(return_format)
            .map(|format| {
                format
                    .parse::<ReturnFormat>()
                    .map_err(|_| anyhow!("Invalid return format '{format}'"))
            })
            .transpose()?;

        let defaults = Defaults {
            dir: non_empty(default_dir),
            channel: non_empty(default_channel),
            page_size,
            upload_channel: non_empty(upload_channel)
                .unwrap_or_else(|| DEFAULT_UPLOAD_CHANNEL.to_string()),
            upload_folder: non_empty(upload_folder),
            upload_name_type,
            return_format,
            server_compress: server_compress.unwrap_or(true),
            auto_retry: auto_retry.unwrap_or(true),
        };

        let tags = Tags {
            storage_dir: storage_dir.unwrap_or_else(|| DEFAULT_STORAGE_DIR.into()),
            suggestion_limit: suggestion_limit.unwrap_or(DEFAULT_TOP_TAGS_LIMIT),
        };

        Ok(Self {
            api,
            defaults,
            tags,
        })
    }
}
