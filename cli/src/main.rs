//! Command-line interface for the Study Hub API.
//!
//! This CLI tool provides commands for every API operation:
//! - notes: list, create, get and delete study notes
//! - discussions: list, create, get, delete and upvote discussions
//! - replies: list, create, delete and upvote replies
//! - feedback: submit and list feedback
//! - search: substring search over notes and discussions
//! - health: check the server and its database
//! - smoke: exercise every endpoint and report a pass/fail summary
//!
//! Configuration via environment:
//! - STUDYHUB_URL: Base URL of the API (default: http://localhost:8001/api)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    discussions::DiscussionsArgs, feedback::FeedbackArgs, health::HealthArgs, notes::NotesArgs,
    replies::RepliesArgs, search::SearchArgs, smoke::SmokeArgs,
};

/// Study Hub CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "studyhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Base URL of the API, including the /api prefix
    #[arg(
        long,
        env = "STUDYHUB_URL",
        default_value = "http://localhost:8001/api",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shared study notes
    Notes(NotesArgs),

    /// Discussion threads
    Discussions(DiscussionsArgs),

    /// Replies within discussions
    Replies(RepliesArgs),

    /// Site feedback
    Feedback(FeedbackArgs),

    /// Search notes or discussions
    Search(SearchArgs),

    /// Check server and database health
    Health(HealthArgs),

    /// Run a smoke test against the server
    Smoke(SmokeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Notes(args) => commands::notes::execute(&client, url, cli.human, args).await,
        Commands::Discussions(args) => {
            commands::discussions::execute(&client, url, cli.human, args).await
        }
        Commands::Replies(args) => commands::replies::execute(&client, url, cli.human, args).await,
        Commands::Feedback(args) => {
            commands::feedback::execute(&client, url, cli.human, args).await
        }
        Commands::Search(args) => commands::search::execute(&client, url, cli.human, args).await,
        Commands::Health(args) => commands::health::execute(&client, url, cli.human, args).await,
        Commands::Smoke(args) => commands::smoke::execute(&client, url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
