use feed_client::{Comment, NewPost, Post, PostPatch};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::gateway::PostGateway;

/// Сколько постов загружает [`PostStore::initialize`].
pub const INITIAL_POSTS_LIMIT: u32 = 10;

/// Пост вместе с загруженными комментариями.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedPost {
    /// Локальная копия поста на момент раскрытия.
    pub post: Post,
    /// Комментарии в порядке ответа сервиса.
    pub comments: Vec<Comment>,
}

/// Локальное хранилище ленты постов.
///
/// Держит упорядоченную коллекцию постов и не больше одного раскрытого
/// поста. Все операции принимают `&mut self`, поэтому перекрывающиеся
/// обновления исключены на уровне типов: следующая операция начинается
/// только после завершения предыдущей.
///
/// Каждая операция возвращает [`StoreResult`]; при ошибке состояние
/// хранилища остаётся ровно таким, каким было до вызова.
pub struct PostStore<G: PostGateway> {
    gateway: G,
    posts: Vec<Post>,
    expanded: Option<ExpandedPost>,
}

impl<G: PostGateway> PostStore<G> {
    /// Создаёт пустое хранилище поверх шлюза.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            posts: Vec::new(),
            expanded: None,
        }
    }

    /// Посты в текущем порядке отображения.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Текущий раскрытый пост, если он есть.
    pub fn expanded(&self) -> Option<&ExpandedPost> {
        self.expanded.as_ref()
    }

    /// Загружает стартовую ленту: первые [`INITIAL_POSTS_LIMIT`] постов
    /// сервиса в порядке его ответа.
    ///
    /// При успехе коллекция заменяется целиком; повторный вызов загружает
    /// её заново. При ошибке коллекция не меняется.
    pub async fn initialize(&mut self) -> StoreResult<()> {
        let posts = match self.gateway.list_posts(INITIAL_POSTS_LIMIT).await {
            Ok(posts) => posts,
            Err(err) => {
                warn!("failed to load the initial feed: {err}");
                return Err(StoreError::Remote(err));
            }
        };

        debug!("loaded {} posts into the feed", posts.len());
        self.posts = posts;
        Ok(())
    }

    /// Раскрывает пост: загружает его комментарии и сохраняет их вместе
    /// с локальной копией поста.
    ///
    /// Пост ищется в загруженной коллекции; если его там нет, операция
    /// возвращает [`StoreError::UnknownPost`] без обращения к сервису.
    /// Раскрытый пост заменяется только при успехе, частично заполненного
    /// состояния не бывает.
    pub async fn expand(&mut self, post_id: i64) -> StoreResult<()> {
        let Some(post) = self.posts.iter().find(|post| post.id == post_id).cloned() else {
            warn!("expand requested for post {post_id} which is not in the collection");
            return Err(StoreError::UnknownPost { id: post_id });
        };

        let comments = match self.gateway.list_comments(post_id).await {
            Ok(comments) => comments,
            Err(err) => {
                warn!("failed to load comments for post {post_id}: {err}");
                return Err(StoreError::Remote(err));
            }
        };

        debug!("loaded {} comments for post {post_id}", comments.len());
        self.expanded = Some(ExpandedPost { post, comments });
        Ok(())
    }

    /// Создаёт пост на сервисе и вставляет его в начало коллекции.
    ///
    /// Id из ответа сервиса не используется: локальный id — это размер
    /// коллекции плюс один на момент вставки. Поля черновика хранилище
    /// не проверяет, это обязанность вызывающей стороны. При ошибке
    /// коллекция не меняется.
    pub async fn create(&mut self, draft: NewPost) -> StoreResult<()> {
        let mut created = match self.gateway.create_post(&draft).await {
            Ok(created) => created,
            Err(err) => {
                warn!("failed to create a post: {err}");
                return Err(StoreError::Remote(err));
            }
        };

        created.id = self.posts.len() as i64 + 1;
        self.posts.insert(0, created);
        Ok(())
    }

    /// Частично обновляет пост на сервисе и в коллекции.
    ///
    /// Пост ищется в загруженной коллекции; если его там нет, операция
    /// возвращает [`StoreError::UnknownPost`] без обращения к сервису.
    /// После успешного запроса в локальную запись попадают только поля,
    /// заданные в `patch`; ответ сервиса для слияния не используется.
    /// Позиция записи в коллекции сохраняется. При ошибке коллекция
    /// не меняется.
    pub async fn update(&mut self, patch: PostPatch) -> StoreResult<()> {
        let Some(index) = self.posts.iter().position(|post| post.id == patch.id) else {
            warn!("update requested for post {} which is not in the collection", patch.id);
            return Err(StoreError::UnknownPost { id: patch.id });
        };

        if let Err(err) = self.gateway.update_post(&patch).await {
            warn!("failed to update post {}: {err}", patch.id);
            return Err(StoreError::Remote(err));
        }

        let post = &mut self.posts[index];
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(body) = patch.body {
            post.body = body;
        }
        if let Some(user_id) = patch.user_id {
            post.user_id = user_id;
        }
        Ok(())
    }
}
