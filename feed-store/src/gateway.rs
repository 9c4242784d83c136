use async_trait::async_trait;
use feed_client::{Comment, FeedClientResult, HttpClient, NewPost, Post, PostPatch};

/// Шлюз к удалённому сервису постов.
///
/// Повторяет четыре операции `feed_client::HttpClient`, чтобы хранилище
/// не зависело от конкретного транспорта, а тесты могли подставить фейк.
#[async_trait]
pub trait PostGateway: Send + Sync {
    /// Возвращает первые `limit` постов коллекции сервиса.
    async fn list_posts(&self, limit: u32) -> FeedClientResult<Vec<Post>>;

    /// Возвращает комментарии поста в порядке ответа сервиса.
    async fn list_comments(&self, post_id: i64) -> FeedClientResult<Vec<Comment>>;

    /// Создаёт пост из черновика и возвращает представление сервиса.
    async fn create_post(&self, draft: &NewPost) -> FeedClientResult<Post>;

    /// Частично обновляет пост и возвращает представление сервиса.
    async fn update_post(&self, patch: &PostPatch) -> FeedClientResult<Post>;
}

#[async_trait]
impl PostGateway for HttpClient {
    async fn list_posts(&self, limit: u32) -> FeedClientResult<Vec<Post>> {
        HttpClient::list_posts(self, limit).await
    }

    async fn list_comments(&self, post_id: i64) -> FeedClientResult<Vec<Comment>> {
        HttpClient::list_comments(self, post_id).await
    }

    async fn create_post(&self, draft: &NewPost) -> FeedClientResult<Post> {
        HttpClient::create_post(self, draft).await
    }

    async fn update_post(&self, patch: &PostPatch) -> FeedClientResult<Post> {
        HttpClient::update_post(self, patch).await
    }
}
