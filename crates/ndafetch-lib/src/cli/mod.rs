mod args;
mod download;
mod list;
mod params;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use download::run_download;
pub use list::run_list;
pub use params::{DownloadParams, ListParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
