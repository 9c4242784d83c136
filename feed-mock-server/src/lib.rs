//! Мок удалённого сервиса постов для интеграционных тестов.
//!
//! Повторяет наблюдаемый контракт публичного сервиса: `GET /posts`,
//! `GET /posts/{id}/comments`, `POST /posts`, `PATCH /posts/{id}`,
//! camelCase-ключи в JSON. Состояние держится в памяти и засеивается
//! детерминированно, поэтому тесты могут полагаться на конкретные id.
//!
//! Wire-структуры объявлены здесь независимо от `feed-client`: расхождение
//! схем ловят интеграционные тесты, а не общий тип.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Сколько постов в стартовом состоянии.
pub const SEEDED_POSTS: i64 = 100;
/// Сколько комментариев у каждого поста в стартовом состоянии.
pub const COMMENTS_PER_POST: i64 = 5;

/// Пост в том виде, в котором его отдаёт сервис.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Идентификатор автора.
    pub user_id: i64,
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст поста.
    pub body: String,
}

/// Комментарий в том виде, в котором его отдаёт сервис.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Идентификатор поста, к которому относится комментарий.
    pub post_id: i64,
    /// Идентификатор комментария.
    pub id: i64,
    /// Имя автора комментария.
    pub name: String,
    /// Email автора комментария.
    pub email: String,
    /// Текст комментария.
    pub body: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePost {
    user_id: i64,
    title: String,
    body: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePost {
    title: Option<String>,
    body: Option<String>,
    user_id: Option<i64>,
}

#[derive(Clone)]
struct MockState {
    posts: Arc<RwLock<Vec<Post>>>,
    comments: Arc<Vec<Comment>>,
}

fn seed_posts() -> Vec<Post> {
    (1..=SEEDED_POSTS)
        .map(|id| Post {
            user_id: (id - 1) / 10 + 1,
            id,
            title: format!("post {id} title"),
            body: format!("post {id} body"),
        })
        .collect()
}

fn seed_comments() -> Vec<Comment> {
    (1..=SEEDED_POSTS)
        .flat_map(|post_id| {
            (1..=COMMENTS_PER_POST).map(move |n| {
                let id = (post_id - 1) * COMMENTS_PER_POST + n;
                Comment {
                    post_id,
                    id,
                    name: format!("comment {id}"),
                    email: format!("reader{n}.post{post_id}@example.com"),
                    body: format!("comment {id} body"),
                }
            })
        })
        .collect()
}

/// Собирает роутер с засеянным состоянием.
pub fn app() -> Router {
    let state = MockState {
        posts: Arc::new(RwLock::new(seed_posts())),
        comments: Arc::new(seed_comments()),
    };

    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", patch(update_post))
        .route("/posts/{id}/comments", get(list_comments))
        .with_state(state)
}

/// Обслуживает мок на готовом listener до завершения процесса.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(state): State<MockState>) -> Json<Vec<Post>> {
    let posts = state.posts.read().await;
    Json(posts.clone())
}

async fn list_comments(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Comment>>, StatusCode> {
    let posts = state.posts.read().await;
    if !posts.iter().any(|post| post.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }

    let comments = state
        .comments
        .iter()
        .filter(|comment| comment.post_id == id)
        .cloned()
        .collect();
    Ok(Json(comments))
}

async fn create_post(
    State(state): State<MockState>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut posts = state.posts.write().await;
    let id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;

    let post = Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    };
    posts.push(post.clone());

    (StatusCode::CREATED, Json(post))
}

async fn update_post(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = state.posts.write().await;
    let post = posts
        .iter_mut()
        .find(|post| post.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(body) = input.body {
        post.body = body;
    }
    if let Some(user_id) = input.user_id {
        post.user_id = user_id;
    }

    Ok(Json(post.clone()))
}
