use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{body::BoxBody, Error, HttpRequest, HttpResponse, Responder};
use serde::Serialize;

/// Uniform response envelope. Success responses carry an item or a list;
/// error responses carry only the message and the mirrored status code.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::new()
    }
}

impl<T: Serialize> Responder for JsonResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

pub struct JsonResponseBuilder<T> {
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T: Serialize> JsonResponseBuilder<T> {
    fn new() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
        }
    }

    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn ok(self, message: impl ToString) -> JsonResponse<T> {
        JsonResponse {
            status: "OK".to_string(),
            message: message.to_string(),
            code: 200,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn bad_request(self, message: impl ToString) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub fn form_error(self, message: impl ToString) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(self, message: impl ToString) -> Error {
        self.error(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(self, message: impl ToString) -> Error {
        self.error(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(self, message: impl ToString) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    fn error(self, code: StatusCode, message: impl ToString) -> Error {
        let message = message.to_string();
        let body = JsonResponse::<T> {
            status: "Error".to_string(),
            message: message.clone(),
            code: code.as_u16() as u32,
            id: self.id,
            item: None,
            list: None,
        };

        InternalError::from_response(message, HttpResponse::build(code).json(body)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_carries_item_and_id() {
        let response = JsonResponse::build().set_id(7).set_item("payload").ok("OK");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "OK");
        assert_eq!(json["code"], 200);
        assert_eq!(json["id"], 7);
        assert_eq!(json["item"], "payload");
        assert!(json["list"].is_null());
    }

    #[test]
    fn error_constructors_map_onto_matching_status_codes() {
        let cases = [
            (
                JsonResponse::<()>::build().not_found("missing"),
                StatusCode::NOT_FOUND,
            ),
            (
                JsonResponse::<()>::build().bad_request("broken"),
                StatusCode::BAD_REQUEST,
            ),
            (
                JsonResponse::<()>::build().conflict("duplicate"),
                StatusCode::CONFLICT,
            ),
            (
                JsonResponse::<()>::build().internal_server_error("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.as_response_error().status_code(), expected);
        }
    }
}
