//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! `HeroClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `HeroService` drives the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, NewHero};

/// Path of the hero collection below the base URL.
pub const HEROES_PATH: &str = "api/heroes";

/// Synchronous, stateless client for the heroes API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    heroes_url: String,
}

impl HeroClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            heroes_url: format!("{}/{HEROES_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// Absolute URL of the hero collection.
    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        get(self.heroes_url.clone())
    }

    pub fn build_get_hero(&self, id: u32) -> HttpRequest {
        get(format!("{}/{id}", self.heroes_url))
    }

    /// Filter the collection by id instead of addressing the record, so a
    /// missing hero comes back as an empty array rather than a 404.
    pub fn build_find_hero(&self, id: u32) -> HttpRequest {
        get(self.query_url("id", &id.to_string()))
    }

    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        get(self.query_url("name", term))
    }

    pub fn build_add_hero(&self, input: &NewHero) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.heroes_url.clone(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    /// Whole-record replace. The target is identified by the `id` in the body.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.heroes_url.clone(),
            headers: json_headers(),
            body: Some(to_json(hero)?),
        })
    }

    pub fn build_delete_hero(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.heroes_url),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    /// The filtered collection holds zero or one element; take the first.
    pub fn parse_find_hero(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        let heroes = self.parse_list_heroes(response)?;
        Ok(heroes.into_iter().next())
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        self.parse_list_heroes(response)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, &[201])?;
        from_json(&response.body)
    }

    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        check_status(&response, &[200, 204])?;
        optional_json(&response.body)
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        check_status(&response, &[200, 204])?;
        optional_json(&response.body)
    }

    fn query_url(&self, key: &str, value: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(key, value)
            .finish();
        format!("{}?{query}", self.heroes_url)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Empty bodies (204, or a 200 with nothing in it) mean "no record returned".
fn optional_json<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    from_json(trimmed).map(Some)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HeroClient {
        HeroClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_heroes_produces_correct_request() {
        let req = client().build_list_heroes();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/heroes");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_hero_addresses_the_record() {
        let req = client().build_get_hero(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/heroes/7");
    }

    #[test]
    fn build_find_hero_filters_by_id() {
        let req = client().build_find_hero(7);
        assert_eq!(req.path, "http://localhost:3000/api/heroes?id=7");
    }

    #[test]
    fn build_search_heroes_encodes_the_term() {
        let req = client().build_search_heroes("dr 'iq'&x");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/api/heroes?name=dr+%27iq%27%26x"
        );
    }

    #[test]
    fn build_add_hero_produces_correct_request() {
        let req = client().build_add_hero(&NewHero::new("Windstorm")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/heroes");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Windstorm" }));
    }

    #[test]
    fn build_update_hero_puts_the_whole_record_on_the_collection() {
        let req = client().build_update_hero(&Hero::new(13, "Bombasto II")).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/heroes");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 13);
        assert_eq!(body["name"], "Bombasto II");
    }

    #[test]
    fn build_delete_hero_produces_correct_request() {
        let req = client().build_delete_hero(15);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/api/heroes/15");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = HeroClient::new("http://localhost:3000/");
        assert_eq!(client.heroes_url(), "http://localhost:3000/api/heroes");
    }

    #[test]
    fn parse_list_heroes_keeps_backend_order() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":20,"name":"Tornado"},{"id":12,"name":"Dr. Nice"}]"#,
        );
        let heroes = client().parse_list_heroes(response).unwrap();
        assert_eq!(
            heroes,
            vec![Hero::new(20, "Tornado"), Hero::new(12, "Dr. Nice")]
        );
    }

    #[test]
    fn parse_list_heroes_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_heroes(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_hero_not_found() {
        let err = client().parse_get_hero(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_find_hero_takes_first_or_none() {
        let found = client()
            .parse_find_hero(HttpResponse::new(200, r#"[{"id":7,"name":"Windstorm"}]"#))
            .unwrap();
        assert_eq!(found, Some(Hero::new(7, "Windstorm")));

        let missing = client().parse_find_hero(HttpResponse::new(200, "[]")).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn parse_add_hero_wrong_status() {
        let err = client()
            .parse_add_hero(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_add_hero_requires_created() {
        let err = client()
            .parse_add_hero(HttpResponse::new(200, r#"{"id":21,"name":"Windstorm"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 200, .. }));

        let hero = client()
            .parse_add_hero(HttpResponse::new(201, r#"{"id":21,"name":"Windstorm"}"#))
            .unwrap();
        assert_eq!(hero, Hero::new(21, "Windstorm"));
    }

    #[test]
    fn parse_update_hero_accepts_no_content() {
        let result = client().parse_update_hero(HttpResponse::new(204, "")).unwrap();
        assert_eq!(result, None);

        let result = client()
            .parse_update_hero(HttpResponse::new(200, r#"{"id":13,"name":"B"}"#))
            .unwrap();
        assert_eq!(result, Some(Hero::new(13, "B")));
    }

    #[test]
    fn parse_delete_hero_not_found() {
        let err = client().parse_delete_hero(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
