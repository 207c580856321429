//! Todo controller: one handler per route, each a single service call plus one log event.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::todo::{CreateTodoInput, Todo, UpdateTodoInput};
use tracing::info;

use crate::{errors::JsonApiError, extract::ValidatedJson, state::AppState};

#[utoipa::path(
    post, path = "/todos", tag = "todos",
    request_body = crate::openapi::CreateTodoInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TodoDoc),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodoInput>,
) -> Result<(StatusCode, Json<Todo>), JsonApiError> {
    let todo = state.todos.create(input).await?;
    info!(action = "controller_create", id = %todo.id, title = %todo.title, completed = todo.completed, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(
    get, path = "/todos", tag = "todos",
    responses((status = 200, description = "List OK", body = [crate::openapi::TodoDoc]))
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, JsonApiError> {
    let todos = state.todos.find_all().await?;
    info!(action = "controller_find_all", count = todos.len(), "listed todos");
    Ok(Json(todos))
}

#[utoipa::path(
    get, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TodoDoc),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn find_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Todo>, JsonApiError> {
    let todo = state.todos.find_one(&id).await?;
    info!(action = "controller_find_one", id = %id, "fetched todo");
    Ok(Json(todo))
}

#[utoipa::path(
    patch, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    request_body = crate::openapi::UpdateTodoInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TodoDoc),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateTodoInput>,
) -> Result<Json<Todo>, JsonApiError> {
    let todo = state.todos.update(&id, input).await?;
    info!(action = "controller_update", id = %id, "updated todo");
    Ok(Json(todo))
}

#[utoipa::path(
    delete, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.todos.remove(&id).await?;
    info!(action = "controller_remove", id = %id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
