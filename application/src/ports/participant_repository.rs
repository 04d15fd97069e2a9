//! Participant store port

use kanji_domain::{DomainError, ParticipantId, ParticipantResponse, PlanId, ResponseUpdate};

/// Per-(plan, participant) response records
pub trait ParticipantRepository: Send + Sync {
    /// Merge `update` into the participant's record, creating it if absent
    ///
    /// The read-modify-write is atomic with respect to other writers.
    /// Returns the record as stored after the merge.
    fn upsert_response(
        &self,
        plan: &PlanId,
        participant: &ParticipantId,
        update: ResponseUpdate,
    ) -> Result<ParticipantResponse, DomainError>;

    /// Snapshot of every response for the plan
    ///
    /// Responses come back in the order participants first responded; the
    /// aggregator's first-seen tie-breaks depend on it. Empty when nobody
    /// has responded yet.
    fn list_responses(&self, plan: &PlanId) -> Vec<ParticipantResponse>;
}
