//! HEALTH command - Check the server and its database.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the health command.
#[derive(Args)]
pub struct HealthArgs {}

/// Response from `GET /health`.
#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

impl HumanReadable for HealthResponse {
    fn print_human(&self) {
        let database = if self.database == "ok" {
            self.database.green()
        } else {
            self.database.red()
        };
        println!("  {} {}", "Server:".cyan(), self.status.green());
        println!("  {} {}", "Database:".cyan(), database);
    }
}

/// Execute the health command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: HealthArgs,
) -> Result<()> {
    let url = format!("{}/health", base_url);
    let response: HealthResponse = make_request(client.get(&url)).await?;
    output(&response, human)
}
