//! NOTES commands - List, upload, fetch and delete study notes.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use studyhub_core::{Note, NoteCreate, NoteId};

use super::{HumanReadable, MessageResponse, confirm, format_timestamp, make_request, output};

/// Arguments for the notes command.
#[derive(Args)]
pub struct NotesArgs {
    #[command(subcommand)]
    pub command: NotesCommand,
}

#[derive(Subcommand)]
pub enum NotesCommand {
    /// List notes, newest first
    List {
        /// Only notes with exactly this subject
        #[arg(long)]
        subject: Option<String>,

        /// Only notes with exactly this semester
        #[arg(long)]
        semester: Option<String>,
    },

    /// Upload note metadata
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        semester: String,

        /// Display size, e.g. "2.5 MB"
        #[arg(long)]
        size: Option<String>,

        /// Where the file can be downloaded
        #[arg(long)]
        file_url: Option<String>,
    },

    /// Show a single note
    Get { id: NoteId },

    /// Delete a note
    Delete {
        id: NoteId,

        /// Skip confirmation prompt (for non-interactive use)
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("  {}", self.title.bold());
        println!("    {} {}", "ID:".cyan(), self.id);
        println!(
            "    {} {} (semester {})",
            "Subject:".cyan(),
            self.subject,
            self.semester
        );
        if let Some(size) = &self.size {
            println!("    {} {}", "Size:".cyan(), size);
        }
        if let Some(url) = &self.file_url {
            println!("    {} {}", "File:".cyan(), url);
        }
        println!(
            "    {} {}",
            "Uploaded:".cyan(),
            format_timestamp(&self.uploaded_at)
        );
    }
}

/// Execute the notes command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: NotesArgs,
) -> Result<()> {
    match args.command {
        NotesCommand::List { subject, semester } => {
            let mut query = Vec::new();
            if let Some(subject) = subject {
                query.push(("subject", subject));
            }
            if let Some(semester) = semester {
                query.push(("semester", semester));
            }
            let url = format!("{}/notes", base_url);
            let notes: Vec<Note> = make_request(client.get(&url).query(&query)).await?;
            output(&notes, human)
        }
        NotesCommand::Create {
            title,
            subject,
            semester,
            size,
            file_url,
        } => {
            let body = NoteCreate {
                title,
                subject,
                semester,
                size,
                file_url,
            };
            let url = format!("{}/notes", base_url);
            let note: Note = make_request(client.post(&url).json(&body)).await?;
            output(&note, human)
        }
        NotesCommand::Get { id } => {
            let url = format!("{}/notes/{}", base_url, id);
            let note: Note = make_request(client.get(&url)).await?;
            output(&note, human)
        }
        NotesCommand::Delete { id, yes } => {
            if human && !yes && !confirm(&format!("Delete note {}?", id))? {
                eprintln!("Aborted.");
                return Ok(());
            }
            let url = format!("{}/notes/{}", base_url, id);
            let response: MessageResponse = make_request(client.delete(&url)).await?;
            output(&response, human)
        }
    }
}
