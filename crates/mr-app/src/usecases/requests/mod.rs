//! Service requests screen state.

use std::sync::Arc;

use mr_core::notification::{messages, Notification};
use mr_core::ports::{ClockPort, NotificationPort};
use mr_core::requests::{sample_requests, RequestDraft, RequestStatus, ServiceRequest};
use mr_core::ValidationError;
use tracing::{info, warn};
use uuid::Uuid;

use crate::deps::AppDeps;

/// In-memory list of the resident's requests, newest first.
pub struct RequestsBook {
    requests: Vec<ServiceRequest>,
    notifier: Arc<dyn NotificationPort>,
    clock: Arc<dyn ClockPort>,
}

impl RequestsBook {
    /// Opens the book with the demo requests.
    pub fn new(notifier: Arc<dyn NotificationPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self::with_requests(sample_requests(), notifier, clock)
    }

    pub fn with_requests(
        requests: Vec<ServiceRequest>,
        notifier: Arc<dyn NotificationPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            requests,
            notifier,
            clock,
        }
    }

    pub fn from_deps(deps: &AppDeps) -> Self {
        Self::new(deps.notifier.clone(), deps.clock.clone())
    }

    /// Files a new request dated today.
    pub async fn create(&mut self, draft: RequestDraft) -> Result<ServiceRequest, ValidationError> {
        let category = match draft.validate() {
            Ok(category) => category,
            Err(err) => {
                self.notify(Notification::from(&err)).await;
                return Err(err);
            }
        };

        let request = ServiceRequest {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            category,
            status: RequestStatus::New,
            created_on: self.clock.today(),
            description: draft.description.trim().to_string(),
        };
        info!(id = %request.id, category = ?request.category, "service request created");
        self.requests.insert(0, request.clone());
        self.notify(Notification::success(messages::REQUEST_CREATED))
            .await;
        Ok(request)
    }

    pub fn list(&self) -> &[ServiceRequest] {
        &self.requests
    }

    /// Requests that are not completed.
    pub fn active_count(&self) -> usize {
        self.requests.iter().filter(|r| r.is_active()).count()
    }

    async fn notify(&self, notification: Notification) {
        if let Err(err) = self.notifier.notify(notification).await {
            warn!(error = %err, "failed to display notification");
        }
    }
}
