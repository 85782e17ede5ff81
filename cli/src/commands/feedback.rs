//! FEEDBACK commands - Rate the site and read submitted feedback.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use studyhub_core::{Feedback, FeedbackCreate};

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the feedback command.
#[derive(Args)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    pub command: FeedbackCommand,
}

#[derive(Subcommand)]
pub enum FeedbackCommand {
    /// Submit a rating
    Submit {
        /// Rating, conventionally 1 to 5
        #[arg(long)]
        rating: i64,

        #[arg(long)]
        comment: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// List all feedback, newest first
    List,
}

impl HumanReadable for Feedback {
    fn print_human(&self) {
        let stars = "*".repeat(self.rating.clamp(0, 10) as usize);
        println!(
            "  {} {} {}",
            stars.yellow(),
            format!("({})", self.rating).dimmed(),
            self.name.as_deref().unwrap_or("anonymous").bold()
        );
        println!("    {} {}", "ID:".cyan(), self.id);
        if let Some(comment) = &self.comment {
            println!("    {}", comment);
        }
        println!(
            "    {} {}",
            "Submitted:".cyan(),
            format_timestamp(&self.created_at)
        );
    }
}

/// Execute the feedback command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: FeedbackArgs,
) -> Result<()> {
    let url = format!("{}/feedback", base_url);
    match args.command {
        FeedbackCommand::Submit {
            rating,
            comment,
            name,
        } => {
            let body = FeedbackCreate {
                rating,
                comment,
                name,
            };
            let feedback: Feedback = make_request(client.post(&url).json(&body)).await?;
            output(&feedback, human)
        }
        FeedbackCommand::List => {
            let feedback: Vec<Feedback> = make_request(client.get(&url)).await?;
            output(&feedback, human)
        }
    }
}
