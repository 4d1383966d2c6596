//! REST surface for the task board.
//!
//! Each route maps onto exactly one [`TaskLifecycleService`] operation. Paths
//! live under `/api`; `/healthz` sits at the root.
//!
//! | Method | Path                              | Operation       |
//! |--------|-----------------------------------|-----------------|
//! | GET    | `/api/tasks`                      | `list_active`   |
//! | POST   | `/api/tasks`                      | `create`        |
//! | PUT    | `/api/tasks/{id}`                 | `update_status` |
//! | DELETE | `/api/tasks/{id}`                 | `soft_delete`   |
//! | GET    | `/api/deleted-tasks`              | `list_deleted`  |
//! | POST   | `/api/deleted-tasks/{id}/restore` | `restore`       |
//! | DELETE | `/api/deleted-tasks/{id}`         | `purge`         |

pub mod dto;
mod error;
mod handlers;
mod request_tracing;

pub use error::ApiError;

use crate::task::{
    ports::{DeletedTaskRepository, TaskRepository},
    services::TaskLifecycleService,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use mockable::Clock;

/// Shared application dependencies handed to every handler.
pub struct AppState<R, D, C>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, D, C>,
}

impl<R, D, C> Clone for AppState<R, D, C>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<R, D, C> AppState<R, D, C>
where
    R: TaskRepository,
    D: DeletedTaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a lifecycle service for use as router state.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, D, C>) -> Self {
        Self { service }
    }

    /// Returns the lifecycle service.
    #[must_use]
    pub const fn service(&self) -> &TaskLifecycleService<R, D, C> {
        &self.service
    }
}

/// Builds the application router over the given lifecycle service.
pub fn build_router<R, D, C>(service: TaskLifecycleService<R, D, C>) -> Router
where
    R: TaskRepository + 'static,
    D: DeletedTaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let api = Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, D, C>).post(handlers::create_task::<R, D, C>),
        )
        .route(
            "/tasks/:id",
            put(handlers::update_task_status::<R, D, C>)
                .delete(handlers::soft_delete_task::<R, D, C>),
        )
        .route(
            "/deleted-tasks",
            get(handlers::list_deleted_tasks::<R, D, C>),
        )
        .route(
            "/deleted-tasks/:id/restore",
            post(handlers::restore_task::<R, D, C>),
        )
        .route(
            "/deleted-tasks/:id",
            delete(handlers::purge_task::<R, D, C>),
        );

    Router::new()
        .route("/healthz", get(handlers::healthz))
        .nest("/api", api)
        .layer(middleware::from_fn(request_tracing::request_tracing_middleware))
        .with_state(AppState::new(service))
}
