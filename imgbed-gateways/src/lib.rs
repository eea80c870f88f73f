pub mod imgbed;
pub mod json_file_store;
