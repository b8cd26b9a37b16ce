use clap::Parser;
use npm_stats::{cli::{self, Cli}, error::Result, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    // Fatal errors (e.g. an unwritable stored query) end the process with a non-zero exit code
    cli::execute(cli).await
}
