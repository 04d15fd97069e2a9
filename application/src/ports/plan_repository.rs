//! Plan registry port

use kanji_domain::{ChannelId, DomainError, Plan, PlanId, PlanStatus, ProposalSlot};

/// Registry of planning sessions, one per thread
pub trait PlanRepository: Send + Sync {
    /// Register a plan unless its id is already taken
    ///
    /// The first writer wins: a second create for the same id, with any
    /// channel, changes nothing and returns `false`.
    fn create_plan(&self, plan: Plan) -> bool;

    /// Look up a plan
    fn get_plan(&self, id: &PlanId) -> Result<Plan, DomainError>;

    /// Channel the plan was started in
    fn channel_of(&self, id: &PlanId) -> Result<ChannelId, DomainError> {
        self.get_plan(id).map(|plan| plan.channel)
    }

    /// The plan most recently created in `channel`
    ///
    /// Recency is creation order, not a timestamp.
    fn latest_plan_for_channel(&self, channel: &ChannelId) -> Result<PlanId, DomainError>;

    /// Overwrite the lifecycle label
    fn update_status(&self, id: &PlanId, status: PlanStatus) -> Result<(), DomainError>;

    /// Store the finalized winner
    fn record_decision(&self, id: &PlanId, slot: ProposalSlot) -> Result<(), DomainError>;
}
