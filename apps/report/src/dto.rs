mod conversions;
mod digest;
mod snapshot;

pub(crate) use conversions::{count, task_card};
pub use digest::{
    BacklogProjectResponse, BoardColumnResponse, ContributionResponse, DigestResponse,
    OrganizationSummaryResponse, PriorityGroupResponse, ProjectDigestResponse, TaskCardResponse,
    TaskStatsResponse, ViewerAccessResponse, YourWorkResponse,
};
pub use snapshot::SnapshotRequest;
