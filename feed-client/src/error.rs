use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `feed-client`.
pub enum FeedClientError {
    /// Ошибка транспорта или декодирования ответа (`reqwest`).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Запрошенный ресурс не найден на сервисе.
    #[error("not found")]
    NotFound,

    /// Сервис ответил неуспешным HTTP-статусом (кроме 404).
    #[error("http status {status}: {message}")]
    Status {
        /// Код ответа.
        status: u16,
        /// Тело ответа или подстановка `http status {status}`.
        message: String,
    },
}

/// Результат операций `feed-client`.
pub type FeedClientResult<T> = Result<T, FeedClientError>;

impl FeedClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::Status {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Network(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_http_status_maps_404_to_not_found() {
        let err = FeedClientError::from_http_status(reqwest::StatusCode::NOT_FOUND, None);
        assert!(matches!(err, FeedClientError::NotFound));
    }

    #[test]
    fn from_http_status_keeps_message_for_other_statuses() {
        let err = FeedClientError::from_http_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            Some("boom".to_string()),
        );
        match err {
            FeedClientError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("expected FeedClientError::Status"),
        }
    }

    #[test]
    fn from_http_status_substitutes_missing_message() {
        let err = FeedClientError::from_http_status(reqwest::StatusCode::BAD_GATEWAY, None);
        match err {
            FeedClientError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "http status 502 Bad Gateway");
            }
            _ => panic!("expected FeedClientError::Status"),
        }
    }
}
