use crate::{gateways, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The file path is empty")]
    EmptyPath,
    #[error("No tags given")]
    EmptyTags,
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
