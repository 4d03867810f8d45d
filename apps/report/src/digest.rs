use workpax_application::{AccessPolicy, TriagePass};
use workpax_core::UserIdentity;
use workpax_domain::{OrganizationSummary, Project, Team};

use crate::dto::{
    BacklogProjectResponse, BoardColumnResponse, ContributionResponse, DigestResponse,
    OrganizationSummaryResponse, PriorityGroupResponse, ProjectDigestResponse, TaskCardResponse,
    TaskStatsResponse, ViewerAccessResponse, YourWorkResponse, count, task_card,
};

/// Validated workspace snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub viewer: UserIdentity,
    pub selected_team: Option<Team>,
    pub projects: Vec<Project>,
}

/// Builds the digest for one snapshot against one calendar day.
pub fn build_digest(
    snapshot: &Snapshot,
    policy: &AccessPolicy,
    pass: &TriagePass,
) -> DigestResponse {
    let context = policy.resolve_context(&snapshot.viewer, snapshot.selected_team.as_ref());
    let effective_role = Some(context.effective_role().as_str());

    let viewer = ViewerAccessResponse {
        subject: context.subject().to_owned(),
        base_role: context.base_role().as_str().to_owned(),
        team_role: context.team_role().map(|role| role.as_str().to_owned()),
        effective_role: context.effective_role().as_str().to_owned(),
        capabilities: policy
            .capabilities(effective_role)
            .iter()
            .map(|capability| capability.as_str().to_owned())
            .collect(),
        permissions: policy
            .grants(effective_role)
            .iter()
            .map(|permission| permission.storage_value())
            .collect(),
    };

    let projects = snapshot
        .projects
        .iter()
        .map(|project| {
            let report = pass.project_report(project);
            let board = pass.board(project.tasks());
            let roadmap = pass.roadmap(project);
            ProjectDigestResponse {
                project_id: report.project_id.as_str().to_owned(),
                name: report.name.clone(),
                status: project.status().map(|status| status.as_str().to_owned()),
                can_edit: policy.can_edit_project(&context, project.team_id()),
                completion_percent: report.completion_percent,
                completion_label: format!("{:.0}%", report.completion_percent),
                stats: TaskStatsResponse::from(&report.stats),
                overdue: count(report.overdue),
                urgent_soon: count(report.urgent_soon),
                columns: board.columns.iter().map(BoardColumnResponse::from).collect(),
                unplaced: board
                    .unplaced
                    .iter()
                    .map(|task| {
                        task_card(task, pass.days_until_due(task), pass.triage_bucket(task))
                    })
                    .collect(),
                breakdown: report
                    .breakdown
                    .iter()
                    .map(ContributionResponse::from)
                    .collect(),
                roadmap: roadmap
                    .groups
                    .iter()
                    .map(PriorityGroupResponse::from)
                    .collect(),
                unprioritized: roadmap
                    .unprioritized
                    .iter()
                    .map(TaskCardResponse::from)
                    .collect(),
            }
        })
        .collect();

    DigestResponse {
        day: pass.today().to_string(),
        viewer,
        organization: OrganizationSummaryResponse::from(&OrganizationSummary::from_projects(
            &snapshot.projects,
        )),
        projects,
        backlog: pass
            .backlog(&snapshot.projects)
            .iter()
            .map(BacklogProjectResponse::from)
            .collect(),
        your_work: YourWorkResponse::from(&pass.your_work(&snapshot.projects, context.subject())),
    }
}
