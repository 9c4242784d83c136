//! Клиентская библиотека удалённого сервиса постов.
//!
//! Предоставляет [`HttpClient`] с четырьмя операциями: список постов,
//! комментарии поста, создание и частичное обновление поста. Все операции
//! возвращают [`FeedClientResult`] и переводят ответы сервиса в ошибки
//! [`FeedClientError`].

#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{FeedClientError, FeedClientResult};
pub use http_client::HttpClient;
pub use models::{Comment, NewPost, Post, PostPatch};
