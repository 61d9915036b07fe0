use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

#[derive(Debug, Clone)]
pub enum Command {
    Download {
        config_path: String,
        output_dir: Option<String>,
        api_url: Option<String>,
        packages: Vec<String>,
        keep_going: bool,
        timeout_secs: Option<u64>,
        connect_timeout_secs: u64,
    },
    List {
        config_path: String,
        api_url: Option<String>,
        packages: Vec<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "ndafetch",
    version,
    author = "Nick Guletskii",
    about = "Download the files of NDA data packages into a local directory tree"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Authenticate, then download every file of the configured packages
    Download {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file",
            default_value = "oai_tools.ini"
        )]
        config: String,

        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the output directory (OUT-DIR.path)"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "api-url",
            value_name = "URL",
            help = "Overrides the package API base URL"
        )]
        api_url: Option<String>,

        #[arg(
            short = 'p',
            long = "package",
            value_name = "NAME",
            help = "Only process the named packages (repeat or use comma-separated values)",
            action = ArgAction::Append,
            value_delimiter = ','
        )]
        packages: Vec<String>,

        #[arg(
            long = "keep-going",
            help = "Continue with the remaining files and packages after a failure"
        )]
        keep_going: bool,

        #[arg(
            long = "timeout",
            value_name = "SECS",
            help = "Per-request timeout, covering whole file transfers"
        )]
        timeout: Option<u64>,

        #[arg(
            long = "connect-timeout",
            value_name = "SECS",
            help = "Connection timeout",
            default_value_t = 30
        )]
        connect_timeout: u64,
    },

    /// Authenticate and print the files of the configured packages without downloading
    List {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file",
            default_value = "oai_tools.ini"
        )]
        config: String,

        #[arg(
            long = "api-url",
            value_name = "URL",
            help = "Overrides the package API base URL"
        )]
        api_url: Option<String>,

        #[arg(
            short = 'p',
            long = "package",
            value_name = "NAME",
            help = "Only process the named packages (repeat or use comma-separated values)",
            action = ArgAction::Append,
            value_delimiter = ','
        )]
        packages: Vec<String>,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        CliCommand::Download {
            config,
            output_dir,
            api_url,
            packages,
            keep_going,
            timeout,
            connect_timeout,
        } => Command::Download {
            config_path: config,
            output_dir,
            api_url,
            packages,
            keep_going,
            timeout_secs: timeout,
            connect_timeout_secs: connect_timeout,
        },
        CliCommand::List {
            config,
            api_url,
            packages,
        } => Command::List {
            config_path: config,
            api_url,
            packages,
        },
    };

    Args { command, log_level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_defaults() {
        let cli = Cli::try_parse_from(["ndafetch", "download"]).unwrap();

        match cli.command {
            CliCommand::Download {
                config,
                output_dir,
                packages,
                keep_going,
                timeout,
                connect_timeout,
                ..
            } => {
                assert_eq!(config, "oai_tools.ini");
                assert!(output_dir.is_none());
                assert!(packages.is_empty());
                assert!(!keep_going);
                assert!(timeout.is_none());
                assert_eq!(connect_timeout, 30);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_package_filter_accepts_repeats_and_commas() {
        let cli = Cli::try_parse_from([
            "ndafetch", "-vv", "list", "-p", "abc,def", "--package", "ghi",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            CliCommand::List { packages, .. } => assert_eq!(packages, vec!["abc", "def", "ghi"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
