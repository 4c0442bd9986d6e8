pub mod context_file;
pub mod environment;
pub mod global_file;
