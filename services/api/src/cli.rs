use crate::demo::{run_question_preview, run_score_report, QuestionPreviewArgs, ScoreReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use transparency_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Product Transparency Service",
    about = "Run the product transparency HTTP service or score products from the command line",
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
    /// Score a product disclosure from a JSON file and print the report
    Score(ScoreReportArgs),
    /// Print the template follow-up questions for a product profile
    Questions(QuestionPreviewArgs),
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
        Command::Score(args) => run_score_report(args),
        Command::Questions(args) => run_question_preview(args),
    }
}
