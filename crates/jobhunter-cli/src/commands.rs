//! Command-line interface and command dispatch.

use chrono::{NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use jobhunter_client::{
    decode, ApiError, ApiResponse, HealthReport, JobHunterClient, SignupAck, TrialStatus,
};

#[derive(Parser, Debug)]
#[command(name = "jobhunter")]
#[command(about = "Sign up for JobHunter alerts and check your trial")]
pub struct Cli {
    /// Backend base URL (overrides API__BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register interest and start a free trial
    Signup {
        #[arg(long)]
        email: String,

        /// Job keyword to watch; repeat for several
        #[arg(long = "keyword")]
        keywords: Vec<String>,

        #[arg(long)]
        country: String,
    },
    /// Check the trial status of a registered email
    Status {
        #[arg(long)]
        email: String,
    },
    /// Check backend health
    Health,
}

/// Run a single command against the backend.
pub async fn execute(command: &Command, client: &JobHunterClient) -> Result<ApiResponse, ApiError> {
    match command {
        Command::Signup {
            email,
            keywords,
            country,
        } => client.register_interest(email, keywords, country).await,
        Command::Status { email } => client.check_status(email).await,
        Command::Health => client.check_health().await,
    }
}

/// One-line summary of a success payload, if it has the documented shape.
pub fn summarize(command: &Command, response: &ApiResponse) -> Option<String> {
    summarize_at(command, response, Utc::now().naive_utc())
}

pub fn summarize_at(
    command: &Command,
    response: &ApiResponse,
    now: NaiveDateTime,
) -> Option<String> {
    match command {
        Command::Signup { .. } => {
            let ack: SignupAck = decode(response.clone()).ok()?;
            Some(format!(
                "{}; trial ends {}",
                ack.message,
                describe_end(&ack.trial_end, ack.trial_end_at(), now)
            ))
        }
        Command::Status { .. } => {
            let status: TrialStatus = decode(response.clone()).ok()?;
            let state = if status.trial_active {
                "Trial active"
            } else {
                "Trial expired"
            };
            Some(format!(
                "{}; ends {}",
                state,
                describe_end(&status.trial_end, status.trial_end_at(), now)
            ))
        }
        Command::Health => {
            let report: HealthReport = decode(response.clone()).ok()?;
            let mut summary = format!("Backend {}", report.status);
            if let Some(database) = report.database {
                summary.push_str(&format!(" (database {})", database));
            }
            Some(summary)
        }
    }
}

fn describe_end(raw: &str, end: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(end) = end else {
        return raw.to_string();
    };

    let remaining = end - now;
    if remaining.num_seconds() <= 0 {
        return format!("{} UTC", end.format("%Y-%m-%d %H:%M"));
    }

    format!(
        "{} UTC ({}d {}h left)",
        end.format("%Y-%m-%d %H:%M"),
        remaining.num_days(),
        remaining.num_hours() % 24
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> NaiveDateTime {
        "2024-03-01T10:00:00".parse().unwrap()
    }

    #[test]
    fn test_keywords_keep_order() {
        let cli = Cli::try_parse_from([
            "jobhunter",
            "signup",
            "--email",
            "jane@example.com",
            "--keyword",
            "rust",
            "--keyword",
            "devops",
            "--country",
            "Nigeria",
        ])
        .unwrap();

        match cli.command {
            Command::Signup { keywords, .. } => assert_eq!(keywords, vec!["rust", "devops"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_signup_without_keywords() {
        let cli = Cli::try_parse_from([
            "jobhunter", "signup", "--email", "a@b.com", "--country", "Kenya",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Signup { ref keywords, .. } if keywords.is_empty()));
    }

    #[test]
    fn test_global_base_url() {
        let cli = Cli::try_parse_from([
            "jobhunter",
            "status",
            "--email",
            "a@b.com",
            "--base-url",
            "http://localhost:5000",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:5000"));
    }

    #[test]
    fn test_status_requires_email() {
        assert!(Cli::try_parse_from(["jobhunter", "status"]).is_err());
    }

    #[test]
    fn test_summarize_signup() {
        let command = Command::Signup {
            email: "a@b.com".into(),
            keywords: vec![],
            country: "Kenya".into(),
        };
        let response = json!({
            "message": "Signup successful",
            "trial_end": "2024-03-04T12:30:00.000001"
        });

        let summary = summarize_at(&command, &response, now()).unwrap();
        assert_eq!(
            summary,
            "Signup successful; trial ends 2024-03-04 12:30 UTC (3d 2h left)"
        );
    }

    #[test]
    fn test_summarize_expired_status() {
        let command = Command::Status {
            email: "a@b.com".into(),
        };
        let response = json!({
            "trial_active": false,
            "trial_end": "2024-02-20T08:00:00"
        });

        let summary = summarize_at(&command, &response, now()).unwrap();
        assert_eq!(summary, "Trial expired; ends 2024-02-20 08:00 UTC");
    }

    #[test]
    fn test_summarize_unparseable_timestamp() {
        let command = Command::Status {
            email: "a@b.com".into(),
        };
        let response = json!({"trial_active": true, "trial_end": "soon"});

        let summary = summarize_at(&command, &response, now()).unwrap();
        assert_eq!(summary, "Trial active; ends soon");
    }

    #[test]
    fn test_summarize_unknown_shape() {
        let response = json!({"ok": true});
        assert!(summarize_at(&Command::Health, &response, now()).is_none());
    }

    #[test]
    fn test_summarize_health() {
        let response = json!({"status": "healthy", "database": "connected"});
        assert_eq!(
            summarize_at(&Command::Health, &response, now()).as_deref(),
            Some("Backend healthy (database connected)")
        );
    }
}
