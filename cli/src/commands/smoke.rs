//! SMOKE command - Exercise every endpoint against a live server.
//!
//! Walks the same path a first-time visitor would: root, notes, a
//! discussion with a reply and upvotes, feedback, search, then cleans up
//! the note and discussion it created. Stops at the first failing group.
//! Progress goes to stderr; the summary is the command's output.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{HumanReadable, output, truncate};

/// Arguments for the smoke command.
#[derive(Args)]
pub struct SmokeArgs {
    /// Leave the created note and discussion in place
    #[arg(long)]
    pub keep: bool,
}

/// Outcome of a smoke run.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SmokeSummary {
    pub checks_run: usize,
    pub checks_passed: usize,
    pub created_notes: usize,
    pub created_discussions: usize,
    pub created_feedback: usize,
    pub success: bool,
}

impl SmokeSummary {
    /// Percentage of checks that passed.
    pub fn success_rate(&self) -> f64 {
        if self.checks_run == 0 {
            return 0.0;
        }
        self.checks_passed as f64 * 100.0 / self.checks_run as f64
    }
}

impl HumanReadable for SmokeSummary {
    fn print_human(&self) {
        println!("{}", "Smoke Test Summary".green().bold());
        println!("{}", "=".repeat(40));
        println!("  {} {}", "Checks run:".cyan(), self.checks_run);
        println!("  {} {}", "Checks passed:".cyan(), self.checks_passed);
        println!("  {} {:.1}%", "Success rate:".cyan(), self.success_rate());
        println!("  {} {}", "Created notes:".cyan(), self.created_notes);
        println!(
            "  {} {}",
            "Created discussions:".cyan(),
            self.created_discussions
        );
        println!("  {} {}", "Created feedback:".cyan(), self.created_feedback);
        println!();
        if self.success {
            println!("{}", "All checks passed.".green().bold());
        } else {
            println!("{}", "Some checks failed.".red().bold());
        }
    }
}

struct Runner<'a> {
    client: &'a reqwest::Client,
    base_url: &'a str,
    summary: SmokeSummary,
    note_id: Option<String>,
    discussion_id: Option<String>,
}

impl<'a> Runner<'a> {
    /// Run one request and compare its status. Returns the JSON body on success.
    async fn check(
        &mut self,
        name: &str,
        method: Method,
        path: &str,
        expected: StatusCode,
        body: Option<Value>,
        query: &[(&str, &str)],
    ) -> Option<Value> {
        let url = format!("{}{}", self.base_url, path);
        self.summary.checks_run += 1;
        eprintln!("{} {} {}", "->".cyan(), name, url.dimmed());

        let mut request = self.client.request(method, &url).query(query);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("   {} {}", "FAIL".red().bold(), e);
                return None;
            }
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if status != expected {
            eprintln!(
                "   {} expected {}, got {}: {}",
                "FAIL".red().bold(),
                expected.as_u16(),
                status.as_u16(),
                truncate(&text, 200)
            );
            return None;
        }

        self.summary.checks_passed += 1;
        eprintln!("   {} {}", "ok".green().bold(), truncate(&text, 120).dimmed());
        Some(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    async fn get(&mut self, name: &str, path: &str, query: &[(&str, &str)]) -> Option<Value> {
        self.check(name, Method::GET, path, StatusCode::OK, None, query)
            .await
    }

    async fn post(&mut self, name: &str, path: &str, body: Option<Value>) -> Option<Value> {
        self.check(name, Method::POST, path, StatusCode::OK, body, &[])
            .await
    }

    async fn delete(&mut self, name: &str, path: &str) -> Option<Value> {
        self.check(name, Method::DELETE, path, StatusCode::OK, None, &[])
            .await
    }

    async fn root(&mut self) -> bool {
        self.get("Root endpoint", "/", &[]).await.is_some()
    }

    async fn notes(&mut self) -> bool {
        if self.get("List notes", "/notes", &[]).await.is_none() {
            return false;
        }

        let note = json!({
            "title": "Test Mathematics Note",
            "subject": "Mathematics",
            "semester": "3",
            "size": "2.5 MB",
            "file_url": "https://example.com/test-note.pdf"
        });
        let Some(id) = self
            .post("Create note", "/notes", Some(note))
            .await
            .and_then(|n| id_of(&n))
        else {
            return false;
        };
        self.summary.created_notes += 1;
        self.note_id = Some(id.clone());

        self.get("Get note", &format!("/notes/{}", id), &[]).await;
        self.get(
            "List notes with filters",
            "/notes",
            &[("semester", "3"), ("subject", "Mathematics")],
        )
        .await
        .is_some()
    }

    async fn discussions(&mut self) -> bool {
        if self.get("List discussions", "/discussions", &[]).await.is_none() {
            return false;
        }

        let discussion = json!({
            "title": "Test Discussion About Mathematics",
            "content": "I need help with calculus problems. Can anyone explain derivatives?",
            "author": "TestStudent"
        });
        let Some(id) = self
            .post("Create discussion", "/discussions", Some(discussion))
            .await
            .and_then(|d| id_of(&d))
        else {
            return false;
        };
        self.summary.created_discussions += 1;
        self.discussion_id = Some(id.clone());

        self.get("Get discussion", &format!("/discussions/{}", id), &[])
            .await;
        self.post(
            "Upvote discussion",
            &format!("/discussions/{}/upvote", id),
            None,
        )
        .await;

        let reply = json!({
            "discussion_id": id,
            "content": "I can help you with derivatives! They represent the rate of change.",
            "author": "HelpfulStudent"
        });
        let Some(reply_id) = self
            .post(
                "Create reply",
                &format!("/discussions/{}/replies", id),
                Some(reply),
            )
            .await
            .and_then(|r| id_of(&r))
        else {
            return false;
        };

        self.get("List replies", &format!("/discussions/{}/replies", id), &[])
            .await;
        self.post(
            "Upvote reply",
            &format!("/replies/{}/upvote", reply_id),
            None,
        )
        .await
        .is_some()
    }

    async fn feedback(&mut self) -> bool {
        let feedback = json!({
            "rating": 5,
            "comment": "Great platform! Very helpful for IPU students.",
            "name": "Test Student"
        });
        if self
            .post("Submit feedback", "/feedback", Some(feedback))
            .await
            .and_then(|f| id_of(&f))
            .is_none()
        {
            return false;
        }
        self.summary.created_feedback += 1;

        self.get("List feedback", "/feedback", &[]).await.is_some()
    }

    async fn search(&mut self) -> bool {
        if self
            .get("Search notes", "/search/notes", &[("q", "Mathematics")])
            .await
            .is_none()
        {
            return false;
        }
        self.get(
            "Search discussions",
            "/search/discussions",
            &[("q", "calculus")],
        )
        .await
        .is_some()
    }

    async fn cleanup(&mut self) -> bool {
        if let Some(id) = self.discussion_id.take() {
            let path = format!("/discussions/{}", id);
            if self.delete("Delete discussion", &path).await.is_none() {
                return false;
            }
        }
        if let Some(id) = self.note_id.take() {
            let path = format!("/notes/{}", id);
            if self.delete("Delete note", &path).await.is_none() {
                return false;
            }
        }
        true
    }

    async fn run(&mut self, keep: bool) -> bool {
        self.root().await
            && self.notes().await
            && self.discussions().await
            && self.feedback().await
            && self.search().await
            && (keep || self.cleanup().await)
    }
}

fn id_of(value: &Value) -> Option<String> {
    value.get("id").and_then(Value::as_str).map(String::from)
}

/// Execute the smoke command. Fails when any check failed.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SmokeArgs,
) -> Result<()> {
    eprintln!("{} {}", "Smoke testing".bold(), base_url);

    let mut runner = Runner {
        client,
        base_url,
        summary: SmokeSummary::default(),
        note_id: None,
        discussion_id: None,
    };
    let completed = runner.run(args.keep).await;

    let mut summary = runner.summary;
    summary.success = completed && summary.checks_passed == summary.checks_run;
    output(&summary, human)?;

    if !summary.success {
        bail!(
            "{} of {} checks failed",
            summary.checks_run - summary.checks_passed,
            summary.checks_run
        );
    }
    Ok(())
}
