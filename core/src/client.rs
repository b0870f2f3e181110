//! Stateless HTTP request builder and response parser for the Students API.
//!
//! # Design
//! `StudentsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Responses go through `response::normalize` before the
//! payload is validated into typed records.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ACCEPT;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::response::{self, Payload};
use crate::types::{NewStudent, Student};

/// Synchronous, stateless client for the Students resource.
#[derive(Debug, Clone)]
pub struct StudentsClient {
    base_url: String,
}

impl StudentsClient {
    /// `base_url` is the resource itself, e.g. `https://host/api/Students`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.base_url.clone())
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create(&self, input: &NewStudent) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, self.base_url.clone(), input)
    }

    pub fn build_update(&self, id: i64, input: &Student) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, self.item_url(id))
    }

    /// An empty successful body counts as an empty list.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Student>, ApiError> {
        let payload = response::normalize(response)?;
        if payload.is_empty() {
            return Ok(Vec::new());
        }
        decode(payload)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Student, ApiError> {
        decode(response::normalize(response)?)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Student, ApiError> {
        decode(response::normalize(response)?)
    }

    /// `None` when the server acknowledges the update without a body.
    pub fn parse_update(&self, response: HttpResponse) -> Result<Option<Student>, ApiError> {
        let payload = response::normalize(response)?;
        if payload.is_empty() {
            return Ok(None);
        }
        decode(payload).map(Some)
    }

    /// The body of a successful delete is ignored.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        response::check_status(&response)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn request(&self, method: HttpMethod, url: String) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: vec![("accept".to_string(), ACCEPT.to_string())],
            body: None,
        }
    }

    fn json_request<B: Serialize>(
        &self,
        method: HttpMethod,
        url: String,
        input: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut req = self.request(method, url);
        req.headers
            .insert(0, ("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }
}

fn decode<T: DeserializeOwned>(payload: Payload) -> Result<T, ApiError> {
    match payload {
        Payload::Json(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
        }
        Payload::Text(text) => Err(ApiError::Decode(format!("expected JSON, got text: {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000/api/Students";

    fn client() -> StudentsClient {
        StudentsClient::new(BASE)
    }

    fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    fn empty_response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, BASE);
        assert!(req.body.is_none());
        assert_eq!(req.header("accept"), Some(ACCEPT));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn build_get_produces_correct_request() {
        let req = client().build_get(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE}/42"));
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_produces_correct_request() {
        let input = NewStudent {
            name: "Bo".to_string(),
            age: 22,
            email: "b@x.com".to_string(),
        };
        let req = client().build_create(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, BASE);
        assert_eq!(
            req.headers,
            vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("accept".to_string(), ACCEPT.to_string()),
            ]
        );
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"name":"Bo","age":22,"email":"b@x.com"}"#)
        );
    }

    #[test]
    fn build_update_produces_correct_request() {
        let input = Student {
            id: 3,
            name: "Cy".to_string(),
            age: 30,
            email: "c@x.com".to_string(),
        };
        let req = client().build_update(3, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, format!("{BASE}/3"));
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["name"], "Cy");
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete(5);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("{BASE}/5"));
        assert!(req.body.is_none());
        assert_eq!(req.header("accept"), Some(ACCEPT));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StudentsClient::new("http://localhost:3000/api/Students/");
        assert_eq!(client.build_list().url, BASE);
        assert_eq!(client.build_get(1).url, format!("{BASE}/1"));
    }

    #[test]
    fn parse_list_success() {
        let body = r#"[{"id":1,"name":"Ann","age":20,"email":"a@x.com"}]"#;
        let students = client().parse_list(json_response(200, body)).unwrap();
        assert_eq!(
            students,
            vec![Student {
                id: 1,
                name: "Ann".to_string(),
                age: 20,
                email: "a@x.com".to_string(),
            }]
        );
    }

    #[test]
    fn parse_list_empty_body_is_empty_list() {
        assert!(client().parse_list(empty_response(200)).unwrap().is_empty());
    }

    #[test]
    fn parse_list_rejects_non_array() {
        let err = client().parse_list(json_response(200, r#"{"id":1}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_list_rejects_plain_text() {
        let resp = HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "text/html".to_string())],
            body: "<html>maintenance</html>".to_string(),
        };
        assert!(matches!(client().parse_list(resp), Err(ApiError::Decode(_))));
    }

    #[test]
    fn parse_get_not_found() {
        let err = client().parse_get(empty_response(404)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Request failed (404)");
    }

    #[test]
    fn parse_get_missing_field_is_decode_error() {
        let err = client()
            .parse_get(json_response(200, r#"{"id":1,"name":"Ann","age":20}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_create_success() {
        let body = r#"{"id":9,"name":"Bo","age":22,"email":"b@x.com"}"#;
        let student = client().parse_create(json_response(201, body)).unwrap();
        assert_eq!(student.id, 9);
        assert_eq!(student.name, "Bo");
    }

    #[test]
    fn parse_create_server_message() {
        let resp = HttpResponse {
            status: 400,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: "Name is required.".to_string(),
        };
        let err = client().parse_create(resp).unwrap_err();
        assert_eq!(err.to_string(), "Name is required.");
    }

    #[test]
    fn parse_update_with_body() {
        let body = r#"{"id":3,"name":"Cy","age":31,"email":"c@x.com"}"#;
        let updated = client().parse_update(json_response(200, body)).unwrap();
        assert_eq!(updated.map(|s| s.age), Some(31));
    }

    #[test]
    fn parse_update_no_content() {
        assert_eq!(client().parse_update(empty_response(204)).unwrap(), None);
    }

    #[test]
    fn empty_json_body_on_success() {
        assert_eq!(client().parse_update(json_response(204, "")).unwrap(), None);
        assert!(client().parse_list(json_response(200, "")).unwrap().is_empty());
        assert!(client().parse_list(json_response(204, "")).unwrap().is_empty());
    }

    #[test]
    fn parse_delete_ignores_body() {
        assert!(client().parse_delete(empty_response(204)).is_ok());
        assert!(client().parse_delete(json_response(200, "garbage")).is_ok());
    }

    #[test]
    fn parse_delete_not_found() {
        let err = client().parse_delete(empty_response(404)).unwrap_err();
        assert_eq!(err.to_string(), "Request failed (404)");
    }
}
