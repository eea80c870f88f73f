use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use imgbed_core::{
    entities::{normalize_tag, FileItem, NameType, ReturnFormat, TagAction},
    gateways::{ListQuery, UploadOptions},
    tag::parse_search_input,
    usecases,
    util::format::{format_file_size, html_link, markdown_link},
};
use imgbed_gateways::{imgbed::ImgBed, json_file_store::JsonFileStore};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "imgbed", version, about = "Client of a self-hosted image bed")]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, env = "IMGBED_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload an image
    Upload(UploadArgs),
    /// List (and search) the hosted files
    List(ListArgs),
    /// Delete a file or a folder
    Delete {
        path: String,
        /// Delete the whole folder
        #[arg(long)]
        folder: bool,
    },
    /// Show or change the tags of a file
    Tags {
        #[command(subcommand)]
        command: TagsCommand,
    },
}

#[derive(Debug, Args)]
pub struct UploadArgs {
    file: PathBuf,
    /// Name of the uploaded file
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    channel: Option<String>,
    #[arg(long)]
    folder: Option<String>,
    /// default, index, origin or short
    #[arg(long, value_parser = parse_name_type)]
    name_type: Option<NameType>,
    /// default or full
    #[arg(long, value_parser = parse_return_format)]
    return_format: Option<ReturnFormat>,
    /// Disable server side compression
    #[arg(long)]
    no_compress: bool,
    /// Disable retries of the server
    #[arg(long)]
    no_auto_retry: bool,
    #[arg(long, value_enum, default_value_t = LinkFormat::Url)]
    format: LinkFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkFormat {
    Url,
    Markdown,
    Html,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    dir: Option<String>,
    /// Keywords and #tags
    #[arg(long, short)]
    search: Option<String>,
    /// Only files with these tags, separated by commas
    #[arg(long)]
    include_tags: Option<String>,
    /// Skip files with these tags, separated by commas
    #[arg(long)]
    exclude_tags: Option<String>,
    #[arg(long)]
    channel: Option<String>,
    #[arg(long)]
    list_type: Option<String>,
    #[arg(long)]
    start: Option<u64>,
    #[arg(long)]
    count: Option<u64>,
    /// Include files of sub directories
    #[arg(long, short)]
    recursive: bool,
}

#[derive(Debug, Subcommand)]
pub enum TagsCommand {
    /// Print the tags of a file
    Get { path: String },
    /// Replace the tags of a file
    Set { path: String, tags: Vec<String> },
    /// Add tags to a file
    Add {
        path: String,
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Remove tags from a file
    Remove {
        path: String,
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Edit the tags of a file in one go
    Edit {
        path: String,
        /// Current tag to drop (repeatable)
        #[arg(long)]
        drop: Vec<String>,
        /// Additional tags, separated by commas or whitespace
        #[arg(long, default_value = "")]
        custom: String,
    },
    /// Print the most used tags
    Suggest {
        /// Put the tags of this file first
        path: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn parse_name_type(s: &str) -> Result<NameType, String> {
    s.parse().map_err(|_| format!("unknown name type '{s}'"))
}

fn parse_return_format(s: &str) -> Result<ReturnFormat, String> {
    s.parse().map_err(|_| format!("unknown return format '{s}'"))
}

pub fn run(cli: Cli, cfg: Config) -> Result<()> {
    let Config {
        api,
        defaults,
        tags: tags_cfg,
    } = cfg;
    let gw = ImgBed::new(&api.base_url, api.token, defaults);
    let store = JsonFileStore::try_new(&tags_cfg.storage_dir)?;
    log::debug!("Tag frequencies are stored in {}", store.path().display());

    match cli.command {
        Command::Upload(args) => {
            let format = args.format;
            let options = UploadOptions::from(args);
            let url = usecases::upload_file(&gw, &options)?;
            if !url.is_empty() {
                println!("{}", format_link(&url, format));
            }
        }
        Command::List(args) => {
            let search = args.search.clone().unwrap_or_default();
            let base = ListQuery::from(args);
            let files = if search.trim().is_empty() {
                usecases::list_files(&gw, &store, &base)?
            } else {
                let visible = if parse_search_input(&search).tags.is_empty() {
                    vec![]
                } else {
                    usecases::list_files(&gw, &store, &base)?
                };
                usecases::search_files(&gw, &store, &base, &search, &visible)?
            };
            for file in &files {
                println!("{}", file_line(file));
            }
        }
        Command::Delete { path, folder } => {
            usecases::delete_file(&gw, &path, folder)?;
        }
        Command::Tags { command } => match command {
            TagsCommand::Get { path } => {
                print_tags(&usecases::get_tags(&gw, &path)?);
            }
            TagsCommand::Set { path, tags } => {
                print_tags(&modify(&gw, &store, &path, TagAction::Set, &tags)?);
            }
            TagsCommand::Add { path, tags } => {
                print_tags(&modify(&gw, &store, &path, TagAction::Add, &tags)?);
            }
            TagsCommand::Remove { path, tags } => {
                print_tags(&modify(&gw, &store, &path, TagAction::Remove, &tags)?);
            }
            TagsCommand::Edit { path, drop, custom } => {
                let initial_tags = usecases::get_tags(&gw, &path)?;
                let selected_tags = keep_tags(&initial_tags, &drop);
                let edit = usecases::TagEdit {
                    path,
                    initial_tags,
                    selected_tags,
                    custom_tags: custom,
                };
                print_tags(&usecases::save_tags(&gw, &store, edit)?);
            }
            TagsCommand::Suggest { path, limit } => {
                let limit = limit.unwrap_or(tags_cfg.suggestion_limit);
                let current = match path {
                    Some(path) => usecases::get_tags(&gw, &path)?,
                    None => vec![],
                };
                for tag in usecases::suggest_tags(&store, &current, limit) {
                    println!("{tag}");
                }
            }
        },
    }
    Ok(())
}

impl From<UploadArgs> for UploadOptions {
    fn from(from: UploadArgs) -> Self {
        let UploadArgs {
            file,
            name,
            channel,
            folder,
            name_type,
            return_format,
            no_compress,
            no_auto_retry,
            format: _,
        } = from;
        Self {
            file_path: file,
            file_name: name,
            channel,
            folder,
            name_type,
            return_format,
            server_compress: no_compress.then_some(false),
            auto_retry: no_auto_retry.then_some(false),
        }
    }
}

impl From<ListArgs> for ListQuery {
    fn from(from: ListArgs) -> Self {
        let ListArgs {
            dir,
            search: _,
            include_tags,
            exclude_tags,
            channel,
            list_type,
            start,
            count,
            recursive,
        } = from;
        Self {
            dir,
            include_tags,
            exclude_tags,
            channel,
            list_type,
            start,
            count,
            recursive,
            ..Default::default()
        }
    }
}

fn modify(
    gw: &ImgBed,
    store: &JsonFileStore,
    path: &str,
    action: TagAction,
    tags: &[String],
) -> Result<Vec<String>> {
    Ok(usecases::modify_tags(gw, store, path, action, &tags.join(","))?)
}

fn format_link(url: &str, format: LinkFormat) -> String {
    match format {
        LinkFormat::Url => url.to_string(),
        LinkFormat::Markdown => markdown_link(url),
        LinkFormat::Html => html_link(url),
    }
}

fn keep_tags(tags: &[String], drop: &[String]) -> Vec<String> {
    let drop: Vec<_> = drop.iter().map(|t| normalize_tag(t)).collect();
    tags.iter()
        .filter(|t| !drop.contains(&normalize_tag(t)))
        .cloned()
        .collect()
}

fn file_line(file: &FileItem) -> String {
    let FileItem { name, url, metadata } = file;
    format!(
        "{name}\t{}\t{}\t{}\t{url}",
        format_file_size(metadata.size),
        metadata.timestamp,
        file.tags().join(", ")
    )
}

fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("(no tags)");
    }
    for tag in tags {
        println!("{tag}");
    }
}
