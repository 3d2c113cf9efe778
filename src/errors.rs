use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("record not found")]
    NotFound,
    #[error("database pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
    #[error("database error: {0}")]
    Db(#[from] tokio_postgres::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Pool(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(views::not_found_page()),
            other => {
                error!("storage failure: {}", other);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::html())
                    .body(views::server_error_page())
            }
        }
    }
}
