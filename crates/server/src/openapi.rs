use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct TodoDoc {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreateTodoInputDoc {
    /// Must not be blank
    pub title: String,
    /// Defaults to `false`
    pub completed: Option<bool>,
}

#[derive(ToSchema)]
pub struct UpdateTodoInputDoc {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todos::create,
        crate::routes::todos::find_all,
        crate::routes::todos::find_one,
        crate::routes::todos::update,
        crate::routes::todos::remove,
    ),
    components(
        schemas(
            HealthResponse,
            TodoDoc,
            CreateTodoInputDoc,
            UpdateTodoInputDoc,
            crate::errors::ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "todos")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_todo_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/todos"));
        assert!(paths.iter().any(|p| p.as_str() == "/todos/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
