//! CLI domain: parse, route and presentation for the item inspector binary.

mod parse;
mod presentation;
mod route;

pub use parse::{Cli, Commands};
pub use presentation::format_item_json;
pub use route::build_item;
