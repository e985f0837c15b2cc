use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};

#[derive(Debug)]
pub enum RequestError {
    /// Request body was not a JSON object.
    InvalidPayload,
    /// `score` was present but not convertible to a non-negative integer.
    InvalidScore,
    /// The write path only accepts POST.
    PostRequired,
    /// The storage layer failed; details go to the log, not the client.
    Database(sqlx::Error),
}

impl std::error::Error for RequestError {}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPayload => write!(f, "invalid payload"),
            Self::InvalidScore => write!(f, "invalid score"),
            Self::PostRequired => write!(f, "POST required"),
            Self::Database(_) => write!(f, "database error"),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database(error)
    }
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = match &self {
            Self::Database(error) => {
                log::error!("storage failure: {}", error);
                Status::InternalServerError
            }
            _ => Status::BadRequest,
        };

        response::Response::build_from(self.to_string().respond_to(request)?)
            .status(status)
            .ok()
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;
