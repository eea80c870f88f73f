//! Client of the remote image hosting API.

use imgbed_boundary as json;
use imgbed_core::{
    entities::{FileItem, NameType, ReturnFormat, TagAction},
    gateways::{Error, ImageHostGateway, ListQuery, Result, UploadOptions},
    list::{map_list_response, RawFile},
    util::{
        mime::mime_type_of,
        retry::{retry, DEFAULT_ATTEMPTS},
        url::build_file_url,
    },
};
use reqwest::{
    blocking::{multipart, Client, RequestBuilder, Response},
    header::CACHE_CONTROL,
};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};

pub const DEFAULT_UPLOAD_CHANNEL: &str = "telegram";
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Values used if a request does not specify them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub dir: Option<String>,
    pub channel: Option<String>,
    pub page_size: u64,
    pub upload_channel: String,
    pub upload_folder: Option<String>,
    pub upload_name_type: Option<NameType>,
    pub return_format: Option<ReturnFormat>,
    pub server_compress: bool,
    pub auto_retry: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dir: None,
            channel: None,
            page_size: DEFAULT_PAGE_SIZE,
            upload_channel: DEFAULT_UPLOAD_CHANNEL.to_string(),
            upload_folder: None,
            upload_name_type: None,
            return_format: None,
            server_compress: true,
            auto_retry: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImgBed {
    client: Client,
    api_base_url: String,
    api_token: String,
    defaults: Defaults,
    attempts: usize,
}

impl ImgBed {
    pub fn new(api_base_url: &str, api_token: impl Into<String>, defaults: Defaults) -> Self {
        Self {
            client: Client::new(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            defaults,
            attempts: DEFAULT_ATTEMPTS,
        }
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    fn send<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> Result<RequestBuilder>,
    {
        retry(
            self.attempts,
            || {
                let response = build()?
                    .bearer_auth(&self.api_token)
                    .send()
                    .map_err(request_error)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(Error::Status {
                        status: status.as_u16(),
                        reason: status.canonical_reason().unwrap_or_default().to_string(),
                    });
                }
                Ok(response)
            },
            Error::is_connection,
        )
    }

    fn upload_params(&self, options: &UploadOptions) -> Vec<(&'static str, String)> {
        let d = &self.defaults;
        let mut params = vec![(
            "uploadChannel",
            non_empty(options.channel.as_deref())
                .unwrap_or(&d.upload_channel)
                .to_string(),
        )];
        if let Some(folder) = non_empty(options.folder.as_deref().or(d.upload_folder.as_deref())) {
            params.push(("uploadFolder", folder.to_string()));
        }
        if let Some(name_type) = options.name_type.or(d.upload_name_type) {
            params.push(("uploadNameType", name_type.to_string()));
        }
        if let Some(format) = options.return_format.or(d.return_format) {
            params.push(("returnFormat", format.to_string()));
        }
        let server_compress = options.server_compress.unwrap_or(d.server_compress);
        params.push(("serverCompress", server_compress.to_string()));
        let auto_retry = options.auto_retry.unwrap_or(d.auto_retry);
        params.push(("autoRetry", auto_retry.to_string()));
        params
    }

    fn list_params(&self, query: &ListQuery) -> Vec<(&'static str, String)> {
        let d = &self.defaults;
        let optional = [
            ("dir", query.dir.as_deref().or(d.dir.as_deref())),
            ("search", query.search.as_deref()),
            ("includeTags", query.include_tags.as_deref()),
            ("excludeTags", query.exclude_tags.as_deref()),
            ("channel", query.channel.as_deref().or(d.channel.as_deref())),
            ("listType", query.list_type.as_deref()),
        ];
        let mut params: Vec<_> = optional
            .into_iter()
            .filter_map(|(key, value)| non_empty(value).map(|v| (key, v.to_string())))
            .collect();
        params.push(("start", query.start.unwrap_or(0).to_string()));
        params.push(("count", query.count.unwrap_or(d.page_size).to_string()));
        if query.recursive {
            params.push(("recursive", "true".to_string()));
        }
        params
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn request_error(err: reqwest::Error) -> Error {
    if err.status().is_none() && (err.is_connect() || err.is_timeout() || err.is_request()) {
        Error::Connection(err.into())
    } else {
        Error::Other(err.into())
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json().map_err(|err| Error::Other(err.into()))
}

fn encode_path(path: &str) -> String {
    urlencoding::encode(path).into_owned()
}

fn file_name_of(options: &UploadOptions) -> String {
    options
        .file_name
        .clone()
        .or_else(|| {
            Path::new(&options.file_path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "file".to_string())
}

impl ImageHostGateway for ImgBed {
    fn upload_image(&self, options: &UploadOptions) -> Result<String> {
        let bytes = fs::read(&options.file_path)?;
        let file_name = file_name_of(options);
        let mime = mime_type_of(&file_name);
        let params = self.upload_params(options);
        log::debug!("Uploading {file_name} ({mime}, {} bytes)", bytes.len());
        let response = self.send(|| {
            let part = multipart::Part::bytes(bytes.clone())
                .file_name(file_name.clone())
                .mime_str(mime)
                .map_err(|err| Error::Other(err.into()))?;
            let form = multipart::Form::new().part("file", part);
            Ok(self
                .client
                .post(self.url("/upload"))
                .query(&params)
                .multipart(form))
        })?;
        let uploaded: Vec<json::UploadedFile> = decode(response)?;
        let src = uploaded
            .into_iter()
            .next()
            .and_then(|file| file.src)
            .filter(|src| !src.is_empty());
        Ok(src
            .map(|src| build_file_url(&self.api_base_url, &src))
            .unwrap_or_default())
    }

    fn list_files(&self, query: &ListQuery) -> Result<Vec<FileItem>> {
        let params = self.list_params(query);
        let response = self.send(|| {
            Ok(self
                .client
                .get(self.url("/api/manage/list"))
                .query(&params))
        })?;
        let json::ListResponse { files, .. } = decode(response)?;
        let files = files
            .into_iter()
            .map(|json::File { name, metadata }| RawFile {
                name,
                metadata: metadata.unwrap_or_default(),
            })
            .collect();
        Ok(map_list_response(&self.api_base_url, files))
    }

    fn delete_file(&self, path: &str, folder: bool) -> Result<()> {
        let url = self.url(&format!("/api/manage/delete/{}", encode_path(path)));
        self.send(|| {
            let req = self.client.delete(&url);
            Ok(if folder {
                req.query(&[("folder", "true")])
            } else {
                req
            })
        })?;
        Ok(())
    }

    fn get_tags(&self, path: &str) -> Result<Vec<String>> {
        let url = self.url(&format!("/api/manage/tags/{}", encode_path(path)));
        let response = self.send(|| Ok(self.client.get(&url).header(CACHE_CONTROL, "no-cache")))?;
        let tags: json::Tags = decode(response)?;
        Ok(tags.into())
    }

    fn update_tags(&self, path: &str, action: TagAction, tags: &[String]) -> Result<Vec<String>> {
        let url = self.url(&format!("/api/manage/tags/{}", encode_path(path)));
        let payload = json::TagUpdate {
            action: action.into(),
            tags: tags.to_vec(),
        };
        let response = self.send(|| Ok(self.client.post(&url).json(&payload)))?;
        let tags: json::Tags = decode(response)?;
        Ok(tags.into())
    }
}
