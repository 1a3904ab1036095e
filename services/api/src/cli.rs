use crate::demo::{run_demo, run_verify, DemoArgs, VerifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use impact_echo::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ImpactEcho Verifier",
    about = "Run the ImpactEcho mock AI verification service or score donations offline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single donation submission and print the JSON report
    Verify(VerifyArgs),
    /// Score a handful of sample submissions and print a summary
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Answer immediately instead of simulating inference latency
    #[arg(long)]
    pub(crate) no_latency: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Verify(args) => run_verify(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
