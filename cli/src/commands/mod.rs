//! Command implementations for the studyhub CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable output for the entities it prints

pub mod discussions;
pub mod feedback;
pub mod health;
pub mod notes;
pub mod replies;
pub mod search;
pub mod smoke;

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build the HTTP client shared by all commands.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("studyhub-cli/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

impl<T: HumanReadable> HumanReadable for Vec<T> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("  {}", "(none)".dimmed());
            return;
        }
        for item in self {
            item.print_human();
            println!();
        }
        println!("  {} {}", "Total:".cyan(), self.len());
    }
}

/// `{"message": ...}` body returned by deletes, upvotes and the root endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl HumanReadable for MessageResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Send a request and decode the JSON body, turning non-2xx answers into
/// [`CliError::Server`] with the server's `detail` message.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| json.get("detail").and_then(|v| v.as_str()).map(String::from))
        .unwrap_or(body);

    Err(CliError::Server {
        status: status.as_u16(),
        message,
    })
}

/// Ask for confirmation on stderr. Returns true when the user typed "y".
pub fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    eprint!("{} {} [y/N] ", "Warning:".yellow().bold(), prompt);
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("derivatives explained", 10), "derivat...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = chrono::DateTime::parse_from_rfc3339("2024-03-01T12:30:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(format_timestamp(&ts), "2024-03-01 12:30:00 UTC");
    }

    #[test]
    fn test_message_response_roundtrip() {
        let msg: MessageResponse =
            serde_json::from_str(r#"{"message":"Note deleted successfully"}"#).unwrap();
        assert_eq!(msg.message, "Note deleted successfully");
    }
}
