use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

/// Uniform envelope every route answers with, so callers can render
/// success/failure without inspecting status codes.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: String,
}

pub enum ApiReply<T> {
    Ok(T),
    OkWithMessage(T, String),
    Created(T),
    Message(String),
}

impl<T: Serialize> Responder for ApiReply<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        let now = Utc::now().to_rfc3339();
        match self {
            ApiReply::Ok(v) => HttpResponse::Ok().json(Envelope {
                success: true,
                data: Some(v),
                message: None,
                timestamp: now,
            }),
            ApiReply::OkWithMessage(v, msg) => HttpResponse::Ok().json(Envelope {
                success: true,
                data: Some(v),
                message: Some(msg),
                timestamp: now,
            }),
            ApiReply::Created(v) => HttpResponse::Created().json(Envelope {
                success: true,
                data: Some(v),
                message: None,
                timestamp: now,
            }),
            ApiReply::Message(msg) => HttpResponse::Ok().json(Envelope::<()> {
                success: true,
                data: None,
                message: Some(msg),
                timestamp: now,
            }),
        }
    }
}

pub type ApiResult<T> = Result<ApiReply<T>, AppError>;
