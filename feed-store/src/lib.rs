//! Локальное хранилище ленты постов поверх удалённого сервиса.
//!
//! [`PostStore`] держит в памяти упорядоченную коллекцию постов и не больше
//! одного раскрытого поста с комментариями. Операции ходят к сервису через
//! шлюз [`PostGateway`] и возвращают явный [`StoreResult`]: при любой ошибке
//! состояние хранилища остаётся прежним.

#![warn(missing_docs)]

mod error;
mod gateway;
mod store;

pub use error::{StoreError, StoreResult};
pub use gateway::PostGateway;
pub use store::{ExpandedPost, INITIAL_POSTS_LIMIT, PostStore};
