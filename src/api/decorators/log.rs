//! Error-logging controller decorator.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::http::{HttpRequest, HttpResponse};
use crate::api::protocols::Controller;
use crate::services::LogErrorRepository;

/// Wraps a controller and records the cause of every `500` it returns.
///
/// The write runs on a spawned task: the response is returned as soon as
/// the inner controller finishes, and a failed write is only traced.
pub struct LogControllerDecorator {
    controller: Arc<dyn Controller>,
    log_error_repository: Arc<dyn LogErrorRepository>,
}

impl LogControllerDecorator {
    pub fn new(
        controller: Arc<dyn Controller>,
        log_error_repository: Arc<dyn LogErrorRepository>,
    ) -> Self {
        Self {
            controller,
            log_error_repository,
        }
    }
}

#[async_trait]
impl Controller for LogControllerDecorator {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if let Some(stack) = response.server_error_stack() {
            tracing::error!(stack, "request failed with a server error");

            let repository = Arc::clone(&self.log_error_repository);
            let stack = stack.to_owned();
            tokio::spawn(async move {
                if let Err(e) = repository.log_error(&stack).await {
                    tracing::warn!(error = ?e, "failed to persist error log");
                }
            });
        }

        response
    }
}
