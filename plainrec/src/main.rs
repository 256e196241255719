use clap::Parser;
use plainrec::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())?;
    Ok(())
}
