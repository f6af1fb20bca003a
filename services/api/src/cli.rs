use crate::demo::{run_demo, run_score, run_upload, DemoArgs, ScoreArgs, UploadArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use velocity_lend::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Velocity Lending Demo",
    about = "Demonstrate and run the SKU-velocity lending demo from the command line",
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
    /// Run the scripted sales walkthrough end to end
    Demo(DemoArgs),
    /// Score a single business profile and print the full factor breakdown
    Score(ScoreArgs),
    /// Import a customer inventory export and print an instant score
    Upload(UploadArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args).await,
        Command::Score(args) => run_score(args).await,
        Command::Upload(args) => run_upload(args).await,
    }
}
