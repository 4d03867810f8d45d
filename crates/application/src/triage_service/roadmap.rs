use serde::Serialize;
use workpax_domain::{Project, ProjectId, TaskPriority};

use super::{BoardCard, TriagePass};

/// Tasks sharing one priority on the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityGroup {
    /// Priority of every card in the group.
    pub priority: TaskPriority,
    /// Cards in input order.
    pub cards: Vec<BoardCard>,
}

/// Priority-ordered projection of one project's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapView {
    /// Project id.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Non-empty groups, urgent first and low last.
    pub groups: Vec<PriorityGroup>,
    /// Tasks whose priority is unrecognised, in input order.
    pub unprioritized: Vec<BoardCard>,
}

impl TriagePass {
    /// Groups a project's tasks by priority for the roadmap.
    #[must_use]
    pub fn roadmap(&self, project: &Project) -> RoadmapView {
        let groups = TaskPriority::known()
            .iter()
            .filter_map(|priority| {
                let cards: Vec<BoardCard> = project
                    .tasks()
                    .iter()
                    .filter(|task| task.priority() == priority)
                    .map(|task| self.card(task))
                    .collect();

                (!cards.is_empty()).then(|| PriorityGroup {
                    priority: priority.clone(),
                    cards,
                })
            })
            .collect();

        RoadmapView {
            project_id: project.id().clone(),
            name: project.name().to_owned(),
            groups,
            unprioritized: project
                .tasks()
                .iter()
                .filter(|task| !task.priority().is_recognized())
                .map(|task| self.card(task))
                .collect(),
        }
    }
}
