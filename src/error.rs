mod error_kind;

use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, http::StatusCode};
use anyhow::anyhow;
use serde_json::json;
use std::fmt::{Debug, Display, Formatter};

pub use error_kind::ErrorKind;

/// Service native error type.
#[derive(thiserror::Error)]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
    params: Vec<String>,
}

impl Error {
    /// Creates a Client error instance with the given message.
    pub fn client<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::client_with_params(message, vec![])
    }

    /// Creates a Client error instance with the given message (usually a message key) and
    /// parameters the client can use to render a localized message.
    pub fn client_with_params<M>(message: M, params: Vec<String>) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::ClientError,
            params,
        }
    }

    /// Creates an access forbidden error instance.
    pub fn access_forbidden() -> Self {
        Self {
            root_cause: anyhow!("Access Forbidden"),
            kind: ErrorKind::AccessForbidden,
            params: vec![],
        }
    }

    /// Creates a not found error instance with the given message.
    pub fn not_found<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::NotFound,
            params: vec![],
        }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::AccessForbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self.kind {
            ErrorKind::ClientError | ErrorKind::AccessForbidden | ErrorKind::NotFound => {
                self.root_cause.to_string()
            }
            ErrorKind::Unknown => "Internal Server Error".to_string(),
        };

        HttpResponseBuilder::new(self.status_code()).json(if self.params.is_empty() {
            json!({ "message": message })
        } else {
            json!({ "message": message, "params": self.params })
        })
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Error {
            root_cause,
            kind: ErrorKind::Unknown,
            params: vec![],
        })
    }
}
