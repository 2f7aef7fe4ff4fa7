//! Mock API service with queued per-operation results.

#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use pledgekit::api::{ActivityPage, ApiError, ApiService, Cursor};
use pledgekit::models::{Activity, Backing, Project, Update};

/// Queued-response mock. Each operation pops the next queued result; an
/// empty queue yields a network error so an unexpected fetch fails loudly
/// in assertions rather than hanging.
#[derive(Default)]
pub struct MockApi {
    activity_pages: Mutex<VecDeque<Result<ActivityPage, ApiError>>>,
    projects: Mutex<VecDeque<Result<Project, ApiError>>>,
    backings: Mutex<VecDeque<Result<Backing, ApiError>>>,
    publishes: Mutex<VecDeque<Result<Update, ApiError>>>,

    /// Cursor of every activity fetch, in issue order.
    activity_requests: Mutex<Vec<Option<Cursor>>>,
    /// Update id of every publish call, in issue order.
    publish_requests: Mutex<Vec<i64>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_activities(&self, activities: Vec<Activity>, next_cursor: Option<Cursor>) {
        self.activity_pages.lock().push_back(Ok(ActivityPage {
            activities,
            next_cursor,
        }));
    }

    pub fn queue_activity_page(&self, page: ActivityPage) {
        self.activity_pages.lock().push_back(Ok(page));
    }

    pub fn queue_activities_error(&self, error: ApiError) {
        self.activity_pages.lock().push_back(Err(error));
    }

    pub fn queue_project(&self, project: Project) {
        self.projects.lock().push_back(Ok(project));
    }

    pub fn queue_project_error(&self, error: ApiError) {
        self.projects.lock().push_back(Err(error));
    }

    pub fn queue_backing(&self, backing: Backing) {
        self.backings.lock().push_back(Ok(backing));
    }

    pub fn queue_backing_error(&self, error: ApiError) {
        self.backings.lock().push_back(Err(error));
    }

    pub fn queue_publish(&self, update: Update) {
        self.publishes.lock().push_back(Ok(update));
    }

    pub fn queue_publish_error(&self, error: ApiError) {
        self.publishes.lock().push_back(Err(error));
    }

    pub fn activity_requests(&self) -> Vec<Option<Cursor>> {
        self.activity_requests.lock().clone()
    }

    pub fn publish_requests(&self) -> Vec<i64> {
        self.publish_requests.lock().clone()
    }

    fn missing(operation: &str) -> ApiError {
        ApiError::Network {
            reason: format!("no queued response for {operation}"),
        }
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn fetch_project_activities(
        &self,
        _project: &Project,
        cursor: Option<&Cursor>,
    ) -> Result<ActivityPage, ApiError> {
        self.activity_requests.lock().push(cursor.cloned());
        self.activity_pages
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::missing("fetch_project_activities")))
    }

    async fn fetch_project(&self, _id: i64) -> Result<Project, ApiError> {
        self.projects
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::missing("fetch_project")))
    }

    async fn fetch_backing(&self, _project_id: i64, _user_id: i64) -> Result<Backing, ApiError> {
        self.backings
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::missing("fetch_backing")))
    }

    async fn publish_update(&self, update_id: i64) -> Result<Update, ApiError> {
        self.publish_requests.lock().push(update_id);
        self.publishes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::missing("publish_update")))
    }
}
