use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub const SEEDED_POSTS: u32 = 100;

const FIRST_TITLE: &str =
    "sunt aut facere repellat provident occaecati excepturi optio reprehenderit";
const FIRST_BODY: &str = "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\nreprehenderit molestiae ut ut quas totam\nnostrum rerum est autem sunt rem eveniet architecto";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Create/update payload. Any `id` the client sends is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    #[serde(default)]
    pub user_id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Read-only: mutations are echoed back, never stored.
pub type Db = Arc<Vec<Post>>;

pub fn seed() -> Vec<Post> {
    (1..=SEEDED_POSTS)
        .map(|id| {
            let (title, body) = if id == 1 {
                (FIRST_TITLE.to_string(), FIRST_BODY.to_string())
            } else {
                (
                    format!("post {id} title"),
                    format!("post {id} body\nwritten by user {}", user_for(id)),
                )
            };
            Post {
                user_id: user_for(id),
                id,
                title,
                body,
            }
        })
        .collect()
}

fn user_for(id: u32) -> u32 {
    (id - 1) / 10 + 1
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .fallback(unknown_path)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.to_vec())
}

type NotFound = (StatusCode, Json<Value>);

fn not_found() -> NotFound {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

async fn unknown_path() -> NotFound {
    not_found()
}

/// Ids that are not numbers name no resource, so they are 404 rather than
/// axum's 400 rejection.
fn post_id(id: Result<Path<u32>, PathRejection>) -> Result<u32, NotFound> {
    id.map(|Path(id)| id).map_err(|_| not_found())
}

async fn get_post(
    State(db): State<Db>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Post>, NotFound> {
    let id = post_id(id)?;
    find(&db, id).cloned().map(Json).ok_or_else(not_found)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostInput>,
) -> (StatusCode, Json<Post>) {
    let id = db.len() as u32 + 1;
    debug!(id, "echoing created post");
    (StatusCode::CREATED, Json(echo(id, input)))
}

async fn update_post(
    State(db): State<Db>,
    id: Result<Path<u32>, PathRejection>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, NotFound> {
    let id = post_id(id)?;
    if find(&db, id).is_none() {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))));
    }
    debug!(id, "echoing updated post");
    Ok(Json(echo(id, input)))
}

/// Succeeds for every numeric id, known or not.
async fn delete_post(id: Result<Path<u32>, PathRejection>) -> Result<Json<Value>, NotFound> {
    let id = post_id(id)?;
    debug!(id, "simulating delete");
    Ok(Json(json!({})))
}

fn find(db: &Db, id: u32) -> Option<&Post> {
    db.iter().find(|post| post.id == id)
}

fn echo(id: u32, input: PostInput) -> Post {
    Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    }
}
