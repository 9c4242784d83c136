use feed_client::FeedClientError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки операций хранилища ленты.
pub enum StoreError {
    /// Удалённый сервис ответил ошибкой или оказался недоступен.
    #[error("remote service error: {0}")]
    Remote(#[from] FeedClientError),

    /// Поста с таким id нет в загруженной коллекции.
    #[error("post {id} is not in the local collection")]
    UnknownPost {
        /// Запрошенный id.
        id: i64,
    },
}

/// Результат операций хранилища.
pub type StoreResult<T> = Result<T, StoreError>;
