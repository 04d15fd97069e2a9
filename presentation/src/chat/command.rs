//! Line commands understood by the planning REPL

use kanji_application::PreferenceForm;
use kanji_domain::{Attendance, ChannelId, ParticipantId, PlanId, PlanStatus};
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing one command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// One parsed REPL command
#[derive(Debug, Clone)]
pub enum ChatCommand {
    Start {
        plan: PlanId,
        channel: ChannelId,
        title: Option<String>,
    },
    Attend {
        plan: PlanId,
        participant: ParticipantId,
        attendance: Attendance,
    },
    Dates {
        plan: PlanId,
        participant: ParticipantId,
        /// Comma-separated, split when merged
        dates: String,
    },
    Prefs {
        plan: PlanId,
        participant: ParticipantId,
        form: PreferenceForm,
    },
    Propose {
        plan: PlanId,
    },
    Vote {
        plan: PlanId,
        participant: ParticipantId,
        slot: u8,
    },
    Tally {
        plan: PlanId,
    },
    Finalize {
        plan: PlanId,
    },
    Status {
        plan: PlanId,
        set: Option<PlanStatus>,
    },
    Latest {
        channel: ChannelId,
    },
    Help,
    Quit,
}

impl ChatCommand {
    pub const USAGE: &'static [&'static str] = &[
        "start <thread> <channel> [title]",
        "attend <thread> <user> yes|no|maybe",
        "dates <thread> <user> <d1,d2,...>",
        "prefs <thread> <user> [area=..] [budget=min-max] [cuisine=a,b]",
        "propose <thread>",
        "vote <thread> <user> <slot>",
        "tally <thread>",
        "finalize <thread>",
        "status <thread> [label]",
        "latest <channel>",
        "help",
        "quit",
    ];
}

impl FromStr for ChatCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandParseError::Usage("help"));
        };
        let args: Vec<&str> = words.collect();

        match name.to_lowercase().as_str() {
            "start" => match args.as_slice() {
                [plan, channel, title @ ..] => Ok(ChatCommand::Start {
                    plan: PlanId::from(*plan),
                    channel: ChannelId::from(*channel),
                    title: (!title.is_empty()).then(|| title.join(" ")),
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[0])),
            },
            "attend" => match args.as_slice() {
                [plan, participant, answer] => Ok(ChatCommand::Attend {
                    plan: PlanId::from(*plan),
                    participant: ParticipantId::from(*participant),
                    attendance: answer
                        .parse()
                        .map_err(|e: kanji_domain::DomainError| {
                            CommandParseError::InvalidValue(e.to_string())
                        })?,
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[1])),
            },
            "dates" => match args.as_slice() {
                [plan, participant, dates @ ..] if !dates.is_empty() => Ok(ChatCommand::Dates {
                    plan: PlanId::from(*plan),
                    participant: ParticipantId::from(*participant),
                    dates: dates.join(" "),
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[2])),
            },
            "prefs" => match args.as_slice() {
                [plan, participant, fields @ ..] => Ok(ChatCommand::Prefs {
                    plan: PlanId::from(*plan),
                    participant: ParticipantId::from(*participant),
                    form: parse_form(fields)?,
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[3])),
            },
            "propose" => match args.as_slice() {
                [plan] => Ok(ChatCommand::Propose {
                    plan: PlanId::from(*plan),
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[4])),
            },
            "vote" => match args.as_slice() {
                [plan, participant, slot] => Ok(ChatCommand::Vote {
                    plan: PlanId::from(*plan),
                    participant: ParticipantId::from(*participant),
                    slot: slot.parse().map_err(|_| {
                        CommandParseError::InvalidValue(format!("vote slot: {}", slot))
                    })?,
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[5])),
            },
            "tally" => match args.as_slice() {
                [plan] => Ok(ChatCommand::Tally {
                    plan: PlanId::from(*plan),
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[6])),
            },
            "finalize" => match args.as_slice() {
                [plan] => Ok(ChatCommand::Finalize {
                    plan: PlanId::from(*plan),
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[7])),
            },
            "status" => match args.as_slice() {
                [plan] => Ok(ChatCommand::Status {
                    plan: PlanId::from(*plan),
                    set: None,
                }),
                [plan, label] => Ok(ChatCommand::Status {
                    plan: PlanId::from(*plan),
                    set: Some(label.parse().map_err(|e: kanji_domain::DomainError| {
                        CommandParseError::InvalidValue(e.to_string())
                    })?),
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[8])),
            },
            "latest" => match args.as_slice() {
                [channel] => Ok(ChatCommand::Latest {
                    channel: ChannelId::from(*channel),
                }),
                _ => Err(CommandParseError::Usage(Self::USAGE[9])),
            },
            "help" | "?" => Ok(ChatCommand::Help),
            "quit" | "exit" | "q" => Ok(ChatCommand::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

/// Read `key=value` fields of the preference form
fn parse_form(fields: &[&str]) -> Result<PreferenceForm, CommandParseError> {
    let mut form = PreferenceForm::default();
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            return Err(CommandParseError::InvalidValue(format!(
                "expected key=value, got {}",
                field
            )));
        };
        let value = Some(value.to_string());
        match key {
            "area" => form.area = value,
            "budget" => form.budget = value,
            "cuisine" => form.cuisine = value,
            other => {
                return Err(CommandParseError::InvalidValue(format!(
                    "unknown preference: {}",
                    other
                )));
            }
        }
    }
    Ok(form)
}
