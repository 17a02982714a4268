use anyhow::Result;
use tracing_subscriber::EnvFilter;
use walt::commands::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Cli::menu()
}
