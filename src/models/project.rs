use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub state: ProjectState,
    pub stats: ProjectStats,
}

/// Lifecycle state of a project campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    Live,
    Successful,
    Failed,
    Canceled,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub backers_count: i64,
    pub pledged: f64,
    pub goal: f64,
}

/// A backer's pledge against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backing {
    pub id: i64,
    pub project_id: i64,
    pub backer_id: i64,
    pub amount: f64,
    pub sequence: i64,
}
