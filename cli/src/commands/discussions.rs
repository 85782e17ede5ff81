//! DISCUSSIONS commands - Start, browse, upvote and delete discussions.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use studyhub_core::{Discussion, DiscussionCreate, DiscussionId};

use super::{
    HumanReadable, MessageResponse, confirm, format_timestamp, make_request, output, truncate,
};

/// Arguments for the discussions command.
#[derive(Args)]
pub struct DiscussionsArgs {
    #[command(subcommand)]
    pub command: DiscussionsCommand,
}

#[derive(Subcommand)]
pub enum DiscussionsCommand {
    /// List discussions, newest first
    List,

    /// Start a discussion
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        /// Defaults to "Anonymous" on the server
        #[arg(long)]
        author: Option<String>,
    },

    /// Show a single discussion
    Get { id: DiscussionId },

    /// Delete a discussion together with its replies
    Delete {
        id: DiscussionId,

        /// Skip confirmation prompt (for non-interactive use)
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Upvote a discussion
    Upvote { id: DiscussionId },
}

impl HumanReadable for Discussion {
    fn print_human(&self) {
        println!("  {}", self.title.bold());
        println!("    {} {}", "ID:".cyan(), self.id);
        println!("    {} {}", "Author:".cyan(), self.author);
        println!("    {} {}", "Content:".cyan(), truncate(&self.content, 72));
        println!(
            "    {} {} replies, {} upvotes",
            "Activity:".cyan(),
            self.replies,
            self.upvotes
        );
        println!(
            "    {} {}",
            "Created:".cyan(),
            format_timestamp(&self.created_at)
        );
    }
}

/// Execute the discussions command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DiscussionsArgs,
) -> Result<()> {
    match args.command {
        DiscussionsCommand::List => {
            let url = format!("{}/discussions", base_url);
            let discussions: Vec<Discussion> = make_request(client.get(&url)).await?;
            output(&discussions, human)
        }
        DiscussionsCommand::Create {
            title,
            content,
            author,
        } => {
            let body = DiscussionCreate {
                title,
                content,
                author,
            };
            let url = format!("{}/discussions", base_url);
            let discussion: Discussion = make_request(client.post(&url).json(&body)).await?;
            output(&discussion, human)
        }
        DiscussionsCommand::Get { id } => {
            let url = format!("{}/discussions/{}", base_url, id);
            let discussion: Discussion = make_request(client.get(&url)).await?;
            output(&discussion, human)
        }
        DiscussionsCommand::Delete { id, yes } => {
            if human
                && !yes
                && !confirm(&format!("Delete discussion {} and all its replies?", id))?
            {
                eprintln!("Aborted.");
                return Ok(());
            }
            let url = format!("{}/discussions/{}", base_url, id);
            let response: MessageResponse = make_request(client.delete(&url)).await?;
            output(&response, human)
        }
        DiscussionsCommand::Upvote { id } => {
            let url = format!("{}/discussions/{}/upvote", base_url, id);
            let response: MessageResponse = make_request(client.post(&url)).await?;
            output(&response, human)
        }
    }
}
