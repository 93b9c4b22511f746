//! CLI domain: parse, route, output, and presentation only.
//! Stands in for the request-handling layer: reads files, enforces upload
//! limits, and hands the batch to the commitment core.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_commit_text, format_digests_text};
pub use route::RunContext;
