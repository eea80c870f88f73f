pub mod format;
pub mod mime;
pub mod retry;
pub mod url;
