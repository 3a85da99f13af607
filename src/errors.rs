use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),
    #[error("erro de configuração: {0}")]
    Config(String),
    #[error("erro de banco de dados: {0}")]
    DatabaseError(sqlx::Error),
    #[error("erro de migração: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("artigo inválido: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn post_not_found(slug: &str) -> Self {
        Self::NotFound(format!("Artigo com slug \"{}\" não encontrado", slug))
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg) => msg,
            Self::Validation(ref err) => err.to_string(),
            // already logged by `From<sqlx::Error>`
            Self::DatabaseError(_) => "Internal server error".to_string(),
            other => {
                error!("Falha na requisição: {}", other);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "message": message,
            "error": status.canonical_reason().unwrap_or("Error"),
            "statusCode": status.as_u16(),
        }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("Erro de banco de dados: {:?}", err);
        Self::DatabaseError(err)
    }
}
