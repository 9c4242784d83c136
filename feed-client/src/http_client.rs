use reqwest::{Client, Method};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{FeedClientError, FeedClientResult};
use crate::models::{Comment, NewPost, Post, PostPatch};

#[derive(Debug, Clone)]
/// HTTP-клиент удалённого сервиса постов.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервиса.
    ///
    /// Клиент без таймаутов и повторов: каждая операция — ровно одна
    /// попытка, которая идёт до ответа или ошибки транспорта.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> FeedClientError {
        let status = response.status();

        let message = match response.text().await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        };
        FeedClientError::from_http_status(status, message)
    }

    /// универсальный helper для запросов с json-payload
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
    ) -> FeedClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(FeedClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(FeedClientError::from_reqwest)
    }

    /// Возвращает первые `limit` постов коллекции сервиса.
    ///
    /// Сервис не поддерживает пагинацию, поэтому скачивается вся коллекция,
    /// а обрезка до `limit` выполняется на клиенте с сохранением порядка.
    pub async fn list_posts(&self, limit: u32) -> FeedClientResult<Vec<Post>> {
        let url = self.endpoint("/posts");

        let response = self
            .client
            .request(Method::GET, url)
            .send()
            .await
            .map_err(FeedClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let mut posts = response
            .json::<Vec<Post>>()
            .await
            .map_err(FeedClientError::from_reqwest)?;
        posts.truncate(limit as usize);
        Ok(posts)
    }

    /// Возвращает комментарии поста в порядке ответа сервиса.
    ///
    /// Если сервис сообщает, что поста нет, возвращается
    /// [`FeedClientError::NotFound`].
    pub async fn list_comments(&self, post_id: i64) -> FeedClientResult<Vec<Comment>> {
        let url = self.endpoint(&format!("/posts/{post_id}/comments"));

        let response = self
            .client
            .request(Method::GET, url)
            .send()
            .await
            .map_err(FeedClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<Vec<Comment>>()
            .await
            .map_err(FeedClientError::from_reqwest)
    }

    /// Создаёт пост из черновика и возвращает представление сервиса.
    ///
    /// Идентификатор в ответе назначает сервис; он может не совпадать
    /// с ожиданиями локальной коллекции.
    pub async fn create_post(&self, draft: &NewPost) -> FeedClientResult<Post> {
        self.send_json(Method::POST, "/posts", draft).await
    }

    /// Частично обновляет пост и возвращает объединённое представление.
    ///
    /// В тело запроса попадают только заданные поля `patch`.
    pub async fn update_post(&self, patch: &PostPatch) -> FeedClientResult<Post> {
        self.send_json(Method::PATCH, &format!("/posts/{}", patch.id), patch)
            .await
    }
}
