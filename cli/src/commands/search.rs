//! SEARCH commands - Case-insensitive substring search.

use anyhow::Result;
use clap::{Args, Subcommand};
use studyhub_core::{Discussion, Note};

use super::{make_request, output};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Subcommand)]
pub enum SearchCommand {
    /// Search note titles and subjects
    Notes {
        /// Text to look for
        query: String,

        /// Only notes with exactly this subject
        #[arg(long)]
        subject: Option<String>,

        /// Only notes with exactly this semester
        #[arg(long)]
        semester: Option<String>,
    },

    /// Search discussion titles and content
    Discussions {
        /// Text to look for
        query: String,
    },
}

/// Execute the search command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SearchArgs,
) -> Result<()> {
    match args.command {
        SearchCommand::Notes {
            query,
            subject,
            semester,
        } => {
            let mut params = vec![("q", query)];
            if let Some(subject) = subject {
                params.push(("subject", subject));
            }
            if let Some(semester) = semester {
                params.push(("semester", semester));
            }
            let url = format!("{}/search/notes", base_url);
            let notes: Vec<Note> = make_request(client.get(&url).query(&params)).await?;
            output(&notes, human)
        }
        SearchCommand::Discussions { query } => {
            let url = format!("{}/search/discussions", base_url);
            let discussions: Vec<Discussion> =
                make_request(client.get(&url).query(&[("q", query)])).await?;
            output(&discussions, human)
        }
    }
}
