use crate::types::response::{ApiReply, ApiResult};
use actix_web::get;

#[get("")]
async fn health() -> ApiResult<()> {
    Ok(ApiReply::Message("ok".into()))
}
