//! 요청 본문 추출자
//!
//! [`JsonBody`]는 `web::Json`과 달리 본문이 비었거나 Content-Type 이 JSON 이 아니면
//! 에러 대신 `T::default()`를 돌려줍니다. 필드 누락은 유스케이스의 검증 메시지
//! (예: "All fields are required")로 응답되고, 파싱할 수 없는 JSON 만
//! `Invalid JSON body` 로 거절됩니다.

use actix_web::dev::Payload;
use actix_web::{mime, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// 관대한 JSON 본문 추출자
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = is_json_request(req);
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body.await?;

            if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(JsonBody(T::default()));
            }

            serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
                AppError::ValidationError(format!("Invalid JSON body: {}", e)).into()
            })
        })
    }
}

/// `application/json` 또는 `+json` 접미사를 가진 요청인지 확인
fn is_json_request(req: &HttpRequest) -> bool {
    matches!(
        req.mime_type(),
        Ok(Some(content_type))
            if content_type.subtype() == mime::JSON || content_type.suffix() == Some(mime::JSON)
    )
}
