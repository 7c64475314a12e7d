//! # mntinfo — mount table CLI
//!
//! Lists the mounts of a process as seen in `/proc/[pid]/mountinfo`,
//! and finds bind-mounted network namespaces.

mod commands;
mod output;

use clap::Parser;

use crate::commands::{Cli, LogFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    commands::execute(cli)
}
