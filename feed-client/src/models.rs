use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор автора.
    pub user_id: i64,
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Комментарий к посту. Только для чтения.
pub struct Comment {
    /// Идентификатор поста, к которому привязан комментарий.
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Черновик нового поста: всё, кроме идентификатора.
pub struct NewPost {
    /// Идентификатор автора.
    pub user_id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Частичное обновление поста: применяются только заданные поля.
pub struct PostPatch {
    /// Идентификатор обновляемого поста.
    pub id: i64,
    /// Новый заголовок, если задан.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Новый текст, если задан.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Новый автор, если задан.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
