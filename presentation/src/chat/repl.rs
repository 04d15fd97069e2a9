//! REPL (Read-Eval-Print Loop) for planning commands

use super::command::{ChatCommand, CommandParseError};
use crate::cli::commands::OutputFormat;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::reply::Reply;
use chrono::NaiveDate;
use kanji_application::{
    BuildProposalsError, BuildProposalsUseCase, CollectResponseUseCase, PlanStore,
    StartPlanInput, VotingUseCase,
};
use kanji_domain::{DomainError, ResponseUpdate};
use std::path::Path;
use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

/// A command that could not be carried out
#[derive(Error, Debug)]
pub enum ReplError {
    #[error(transparent)]
    Parse(#[from] CommandParseError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Proposals(#[from] BuildProposalsError),
}

/// Interactive planning REPL
pub struct PlanningRepl<S: PlanStore + 'static> {
    responses: CollectResponseUseCase<S>,
    proposals: BuildProposalsUseCase<S>,
    voting: VotingUseCase<S>,
    format: OutputFormat,
    today: Option<NaiveDate>,
    config: ReplConfig,
}

impl<S: PlanStore + 'static> PlanningRepl<S> {
    /// Create a new PlanningRepl
    pub fn new(
        responses: CollectResponseUseCase<S>,
        proposals: BuildProposalsUseCase<S>,
        voting: VotingUseCase<S>,
    ) -> Self {
        Self {
            responses,
            proposals,
            voting,
            format: OutputFormat::Text,
            today: None,
            config: ReplConfig::default(),
        }
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Pin the date synthesized proposal dates start from
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL on stdin
    pub async fn run(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.config.interactive && self.format == OutputFormat::Text {
            stdout.write_all(Self::welcome().as_bytes()).await?;
        }
        self.run_lines(BufReader::new(io::stdin()), &mut stdout)
            .await
    }

    /// Run every command in a script file
    pub async fn run_script(&self, path: &Path) -> io::Result<()> {
        let file = tokio::fs::File::open(path).await?;
        let mut stdout = io::stdout();
        self.run_lines(BufReader::new(file), &mut stdout).await
    }

    /// Execute commands line by line until input ends or `quit`
    ///
    /// Blank lines and lines starting with `#` are skipped. A failing
    /// command is reported and the loop carries on.
    pub async fn run_lines<R, W>(&self, reader: R, writer: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        loop {
            if self.config.interactive && self.format == OutputFormat::Text {
                writer.write_all(b"kanji> ").await?;
                writer.flush().await?;
            }
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (output, quit) = match line.parse::<ChatCommand>() {
                Ok(command) => {
                    let quit = matches!(command, ChatCommand::Quit);
                    (self.render(self.execute(command).await), quit)
                }
                Err(e) => (self.render(Err(e.into())), false),
            };
            writer.write_all(output.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;

            if quit {
                break;
            }
        }
        Ok(())
    }

    /// Run one command against the use cases
    pub async fn execute(&self, command: ChatCommand) -> Result<Reply, ReplError> {
        debug!("Executing {:?}", command);
        let reply = match command {
            ChatCommand::Start {
                plan,
                channel,
                title,
            } => {
                let mut input = StartPlanInput::new(plan, channel);
                if let Some(title) = title {
                    input = input.with_title(title);
                }
                Reply::Started(self.responses.start_plan(input)?)
            }
            ChatCommand::Attend {
                plan,
                participant,
                attendance,
            } => Reply::Response(
                self.responses
                    .submit_attendance(&plan, &participant, attendance)?,
            ),
            ChatCommand::Dates {
                plan,
                participant,
                dates,
            } => Reply::Response(self.responses.submit(
                &plan,
                &participant,
                ResponseUpdate::new().dates_text(dates),
            )?),
            ChatCommand::Prefs {
                plan,
                participant,
                form,
            } => match self
                .responses
                .submit_preferences(&plan, &participant, form)?
            {
                Some(row) => Reply::Response(row),
                None => Reply::Unchanged { plan, participant },
            },
            ChatCommand::Propose { plan } => {
                let today = self
                    .today
                    .unwrap_or_else(|| chrono::Local::now().date_naive());
                Reply::Proposals(self.proposals.execute(&plan, today).await?)
            }
            ChatCommand::Vote {
                plan,
                participant,
                slot,
            } => Reply::Vote(self.voting.cast_vote(&plan, &participant, slot)?),
            ChatCommand::Tally { plan } => Reply::Tally {
                tally: self.voting.tally(&plan)?,
                state: self.voting.state(&plan)?,
                plan,
            },
            ChatCommand::Finalize { plan } => Reply::Finalized(self.voting.finalize(&plan)?),
            ChatCommand::Status { plan, set } => {
                if let Some(status) = set {
                    self.responses.update_status(&plan, status)?;
                }
                Reply::Status {
                    plan: self.responses.plan(&plan)?,
                    responses: self.responses.list_responses(&plan),
                    eligible: self.voting.eligible_voters(&plan)?.len(),
                    state: self.voting.state(&plan)?,
                }
            }
            ChatCommand::Latest { channel } => Reply::Latest {
                plan: self.responses.latest_plan_for_channel(&channel)?,
                channel,
            },
            ChatCommand::Help => Reply::Help {
                commands: ChatCommand::USAGE.to_vec(),
            },
            ChatCommand::Quit => Reply::Bye,
        };
        Ok(reply)
    }

    fn render(&self, result: Result<Reply, ReplError>) -> String {
        match result {
            Ok(reply) => ConsoleFormatter::render(&reply, self.format),
            Err(e) => ConsoleFormatter::render_error(&e.to_string(), self.format),
        }
    }

    fn welcome() -> String {
        [
            "",
            "╭─────────────────────────────────────────────╮",
            "│              kanji - Event Planner          │",
            "╰─────────────────────────────────────────────╯",
            "",
            "Type `help` for commands, `quit` to exit.",
            "",
            "",
        ]
        .join("\n")
    }
}
