#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # imgbed-entities
//!
//! Plain data types shared by the image hosting client crates:
//! hosted files and their metadata, tags, search queries and upload options.

pub mod file;
pub mod search;
pub mod tag;
pub mod time;
pub mod upload;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
