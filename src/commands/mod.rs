pub mod init;
pub mod project;
pub mod sum;
pub mod title;
pub mod watch;

use clap::{Parser, Subcommand};

use anyhow::Result;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Watch window activity and log transitions")]
    Watch,
    #[command(about = "Summarize logged activity")]
    Sum(sum::SumArgs),
    #[command(about = "Manage projects")]
    Project(project::ProjectArgs),
    #[command(about = "Manage window titles")]
    Title(title::TitleArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Watch => watch::cmd(),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Project(args) => project::cmd(args),
            Commands::Title(args) => title::cmd(args),
        }
    }
}
