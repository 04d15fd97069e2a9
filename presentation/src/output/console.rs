//! Console output formatter for planning results

use super::reply::Reply;
use crate::cli::commands::OutputFormat;
use colored::Colorize;
use kanji_application::{Finalization, ProposalSet, StartPlanOutput, VoteOutcome};
use kanji_domain::{ParticipantResponse, Plan, Proposal, Tally};
use serde_json::json;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a reply in the requested format
    pub fn render(reply: &Reply, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(reply),
            OutputFormat::Json => Self::format_json(reply),
        }
    }

    /// Render a failed command in the requested format
    pub fn render_error(message: &str, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!("{} {}", "Error:".red().bold(), message),
            OutputFormat::Json => json!({"kind": "error", "message": message}).to_string(),
        }
    }

    /// Format as a single JSON line
    pub fn format_json(reply: &Reply) -> String {
        serde_json::to_string(reply).unwrap_or_else(|e| {
            json!({"kind": "error", "message": e.to_string()}).to_string()
        })
    }

    /// Format as human-readable text
    pub fn format(reply: &Reply) -> String {
        match reply {
            Reply::Started(started) => Self::started(started),
            Reply::Response(row) => Self::response(row),
            Reply::Unchanged { plan, participant } => format!(
                "No preferences from {} in {}; nothing changed",
                participant, plan
            ),
            Reply::Proposals(set) => Self::proposals(set),
            Reply::Vote(outcome) => Self::vote(outcome),
            Reply::Tally { plan, tally, state } => format!(
                "{} {}  [{}]",
                format!("Tally for {}:", plan).cyan().bold(),
                Self::tally_line(tally),
                state
            ),
            Reply::Finalized(finalization) => Self::finalization(finalization),
            Reply::Status {
                plan,
                responses,
                eligible,
                state,
            } => Self::status(plan, responses, *eligible, *state),
            Reply::Latest { channel, plan } => {
                format!("Latest plan in {}: {}", channel, plan.to_string().bold())
            }
            Reply::Help { commands } => {
                let mut output = format!("{}\n", "Commands:".cyan().bold());
                for command in commands {
                    output.push_str(&format!("  {}\n", command));
                }
                output.trim_end().to_string()
            }
            Reply::Bye => "Bye!".to_string(),
        }
    }

    fn started(started: &StartPlanOutput) -> String {
        let plan = &started.plan;
        let title = plan
            .title
            .as_deref()
            .map(|t| format!(" \"{}\"", t))
            .unwrap_or_default();
        if started.created {
            format!(
                "{} plan {}{} in {}",
                "Started".green().bold(),
                plan.id,
                title,
                plan.channel
            )
        } else {
            format!(
                "Plan {}{} already running in {} (status {})",
                plan.id, title, plan.channel, plan.status
            )
        }
    }

    fn response(row: &ParticipantResponse) -> String {
        let mut fields = Vec::new();
        if let Some(attendance) = row.attendance {
            fields.push(format!("attendance: {}", attendance));
        }
        if !row.dates.is_empty() {
            fields.push(format!("dates: {}", row.dates.join(", ")));
        }
        if let Some(area) = &row.area {
            fields.push(format!("area: {}", area));
        }
        if let Some(budget) = row.budget() {
            fields.push(format!("budget: {}", budget));
        }
        if let Some(cuisine) = &row.cuisine {
            fields.push(format!("cuisine: {}", cuisine));
        }
        if fields.is_empty() {
            fields.push("no answers yet".to_string());
        }
        format!("{} {}", format!("{}:", row.participant).yellow().bold(), fields.join(" | "))
    }

    fn proposals(set: &ProposalSet) -> String {
        let mut output = format!(
            "{} ({} answering yes/maybe)\n",
            format!("Proposals for {}", set.plan).cyan().bold(),
            set.summary.eligible
        );
        if set.fallback_dates {
            output.push_str(&format!(
                "{}\n",
                "Nobody proposed a date yet; offering weekly dates.".yellow()
            ));
        }
        for proposal in &set.proposals {
            output.push_str(&Self::proposal(proposal));
        }
        if let Some(alignment) = &set.alignment {
            output.push_str(&format!("\n{}\n{}\n", "Alignment:".cyan().bold(), alignment));
        }
        output.trim_end().to_string()
    }

    fn proposal(proposal: &Proposal) -> String {
        let cuisine = if proposal.cuisine.is_empty() {
            "any cuisine".to_string()
        } else {
            proposal.cuisine.join(", ")
        };
        let mut output = format!(
            "  {} {}  {}  {}  {}\n",
            format!("[{}]", proposal.slot).green().bold(),
            proposal.date,
            proposal.area.as_deref().unwrap_or("any area"),
            proposal.budget,
            cuisine
        );
        for venue in &proposal.venues {
            match &venue.budget_label {
                Some(label) => output.push_str(&format!(
                    "      - {} ({}) {}\n",
                    venue.name,
                    label,
                    venue.url.dimmed()
                )),
                None => {
                    output.push_str(&format!("      - {} {}\n", venue.name, venue.url.dimmed()))
                }
            }
        }
        output
    }

    fn vote(outcome: &VoteOutcome) -> String {
        let mut output = format!(
            "{} voted for {} ({}/{} voted, {})\n  {}",
            outcome.participant.to_string().yellow().bold(),
            outcome.slot,
            outcome.voted.len(),
            outcome.eligible.len(),
            outcome.state,
            Self::tally_line(&outcome.tally)
        );
        if let Some(finalization) = &outcome.finalized {
            output.push('\n');
            output.push_str(&Self::finalization(finalization));
        }
        output
    }

    fn finalization(finalization: &Finalization) -> String {
        let how = if finalization.automatic {
            "everyone has voted"
        } else {
            "finalized"
        };
        let mut output = format!(
            "{} {} goes with proposal {} ({} votes, {})",
            "Decided:".green().bold(),
            finalization.plan,
            finalization.winner,
            finalization.tally.count(finalization.winner),
            how
        );
        if let Some(proposal) = &finalization.proposal {
            output.push('\n');
            output.push_str(Self::proposal(proposal).trim_end());
        }
        output
    }

    fn status(
        plan: &Plan,
        responses: &[ParticipantResponse],
        eligible: usize,
        state: kanji_domain::VotingState,
    ) -> String {
        let mut output = format!(
            "{} {}\n",
            format!("Plan {}", plan.id).cyan().bold(),
            plan.title.as_deref().unwrap_or("")
        );
        output.push_str(&format!("  channel:  {}\n", plan.channel));
        output.push_str(&format!("  status:   {}\n", plan.status));
        output.push_str(&format!(
            "  decision: {}\n",
            plan.decision
                .map(|slot| slot.to_string())
                .unwrap_or_else(|| "-".to_string())
        ));
        output.push_str(&format!(
            "  answers:  {} ({} coming or maybe)\n",
            responses.len(),
            eligible
        ));
        output.push_str(&format!("  voting:   {}\n", state));
        for row in responses {
            output.push_str(&format!("  {}\n", Self::response(row)));
        }
        output.trim_end().to_string()
    }

    fn tally_line(tally: &Tally) -> String {
        tally
            .iter()
            .map(|(slot, count)| format!("{}: {}", slot, count))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
