//! Results of REPL commands, ready to be rendered

use kanji_application::{Finalization, ProposalSet, StartPlanOutput, VoteOutcome};
use kanji_domain::{
    ChannelId, ParticipantId, ParticipantResponse, Plan, PlanId, Tally, VotingState,
};
use serde::Serialize;

/// What a command produced
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Started(StartPlanOutput),
    Response(ParticipantResponse),
    /// A preference form with nothing in it
    Unchanged {
        plan: PlanId,
        participant: ParticipantId,
    },
    Proposals(ProposalSet),
    Vote(VoteOutcome),
    Tally {
        plan: PlanId,
        tally: Tally,
        state: VotingState,
    },
    Finalized(Finalization),
    Status {
        plan: Plan,
        responses: Vec<ParticipantResponse>,
        eligible: usize,
        state: VotingState,
    },
    Latest {
        channel: ChannelId,
        plan: PlanId,
    },
    Help {
        commands: Vec<&'static str>,
    },
    Bye,
}
