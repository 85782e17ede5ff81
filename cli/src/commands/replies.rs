//! REPLIES commands - Reply to discussions and manage replies.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use studyhub_core::{DiscussionId, Reply, ReplyCreate, ReplyId};

use super::{HumanReadable, MessageResponse, format_timestamp, make_request, output};

/// Arguments for the replies command.
#[derive(Args)]
pub struct RepliesArgs {
    #[command(subcommand)]
    pub command: RepliesCommand,
}

#[derive(Subcommand)]
pub enum RepliesCommand {
    /// List the replies of a discussion, oldest first
    List { discussion_id: DiscussionId },

    /// Reply to a discussion
    Create {
        discussion_id: DiscussionId,

        #[arg(long)]
        content: String,

        /// Defaults to "Anonymous" on the server
        #[arg(long)]
        author: Option<String>,
    },

    /// Delete a reply
    Delete { id: ReplyId },

    /// Upvote a reply
    Upvote { id: ReplyId },
}

impl HumanReadable for Reply {
    fn print_human(&self) {
        println!(
            "  {} {} ({} upvotes)",
            self.author.bold(),
            format_timestamp(&self.created_at).dimmed(),
            self.upvotes
        );
        println!("    {} {}", "ID:".cyan(), self.id);
        println!("    {}", self.content);
    }
}

/// Execute the replies command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RepliesArgs,
) -> Result<()> {
    match args.command {
        RepliesCommand::List { discussion_id } => {
            let url = format!("{}/discussions/{}/replies", base_url, discussion_id);
            let replies: Vec<Reply> = make_request(client.get(&url)).await?;
            output(&replies, human)
        }
        RepliesCommand::Create {
            discussion_id,
            content,
            author,
        } => {
            let body = ReplyCreate { content, author };
            let url = format!("{}/discussions/{}/replies", base_url, discussion_id);
            let reply: Reply = make_request(client.post(&url).json(&body)).await?;
            output(&reply, human)
        }
        RepliesCommand::Delete { id } => {
            let url = format!("{}/replies/{}", base_url, id);
            let response: MessageResponse = make_request(client.delete(&url)).await?;
            output(&response, human)
        }
        RepliesCommand::Upvote { id } => {
            let url = format!("{}/replies/{}/upvote", base_url, id);
            let response: MessageResponse = make_request(client.post(&url)).await?;
            output(&response, human)
        }
    }
}
