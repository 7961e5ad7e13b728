//! Record access façade over the heroes API.
//!
//! # Design
//! `HeroService` owns a `HeroClient` for request building and response
//! parsing, a `Transport` for the round-trip, and a `NotificationSink` for
//! reporting. Every public operation resolves to a usable value: failures are
//! logged and replaced by the operation's fallback (`[]` for list-like
//! operations, `None` otherwise). Exactly one message is emitted per
//! completed round-trip, after the response (or failure) is in hand.
//!
//! No state is kept between calls, so operations may run concurrently.

use crate::client::HeroClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::NotificationSink;
use crate::transport::Transport;
use crate::types::{Hero, HeroRef, NewHero};

/// Prefix of every message this service sends to its sink.
const LOG_PREFIX: &str = "HeroService: ";

pub struct HeroService<T: Transport, N: NotificationSink> {
    client: HeroClient,
    transport: T,
    sink: N,
}

impl<T: Transport, N: NotificationSink> HeroService<T, N> {
    pub fn new(client: HeroClient, transport: T, sink: N) -> Self {
        Self {
            client,
            transport,
            sink,
        }
    }

    pub fn client(&self) -> &HeroClient {
        &self.client
    }

    /// All heroes, in the order the backend lists them.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        let result = async {
            let response = self.send(self.client.build_list_heroes()).await?;
            self.client.parse_list_heroes(response)
        }
        .await;

        match result {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(error) => self.handle_error("get_heroes", error, Vec::new()),
        }
    }

    /// The hero addressed by `id`. A 404 counts as a failure.
    pub async fn get_hero(&self, id: u32) -> Option<Hero> {
        let result = async {
            let response = self.send(self.client.build_get_hero(id)).await?;
            self.client.parse_get_hero(response)
        }
        .await;

        match result {
            Ok(hero) => {
                self.log(format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(error) => self.handle_error(&format!("get_hero id={id}"), error, None),
        }
    }

    /// Like [`get_hero`](Self::get_hero), but a missing hero is a normal
    /// outcome rather than an error.
    pub async fn get_hero_no_404(&self, id: u32) -> Option<Hero> {
        let result = async {
            let response = self.send(self.client.build_find_hero(id)).await?;
            self.client.parse_find_hero(response)
        }
        .await;

        match result {
            Ok(hero) => {
                let outcome = if hero.is_some() { "fetched" } else { "did not find" };
                self.log(format!("{outcome} hero id={id}"));
                hero
            }
            Err(error) => self.handle_error(&format!("get_hero_no_404 id={id}"), error, None),
        }
    }

    /// Heroes whose name matches `term`. The matching rule belongs to the
    /// backend. A blank term returns `[]` without a request or a message.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let result = async {
            let response = self.send(self.client.build_search_heroes(term)).await?;
            self.client.parse_search_heroes(response)
        }
        .await;

        match result {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(format!("no heroes matching {term}"));
                } else {
                    self.log(format!("found heroes matching {term}"));
                }
                heroes
            }
            Err(error) => {
                self.handle_error(&format!("search_heroes term={term}"), error, Vec::new())
            }
        }
    }

    /// Creates a hero and returns it with the id the backend assigned.
    pub async fn add_hero(&self, hero: impl Into<NewHero>) -> Option<Hero> {
        let input = hero.into();
        let result = async {
            let request = self.client.build_add_hero(&input)?;
            let response = self.send(request).await?;
            self.client.parse_add_hero(response)
        }
        .await;

        match result {
            Ok(created) => {
                self.log(format!("added hero w/ id={}", created.id));
                Some(created)
            }
            Err(error) => self.handle_error(&format!("add_hero name={}", input.name), error, None),
        }
    }

    /// Deletes by id; a full record is reduced to its id first. Returns the
    /// backend's echo of the deleted hero, if it sends one.
    pub async fn delete_hero(&self, hero: impl Into<HeroRef>) -> Option<Hero> {
        let hero: HeroRef = hero.into();
        let id = hero.id();
        let result = async {
            let response = self.send(self.client.build_delete_hero(id)).await?;
            self.client.parse_delete_hero(response)
        }
        .await;

        match result {
            Ok(deleted) => {
                self.log(format!("deleted hero id={id}"));
                deleted
            }
            Err(error) => self.handle_error(&format!("delete_hero id={id}"), error, None),
        }
    }

    /// Replaces the stored record with `hero`. Returns whatever record the
    /// backend sends back, which is usually nothing.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Hero> {
        let result = async {
            let request = self.client.build_update_hero(hero)?;
            let response = self.send(request).await?;
            self.client.parse_update_hero(response)
        }
        .await;

        match result {
            Ok(updated) => {
                self.log(format!("updated hero id={}", hero.id));
                updated
            }
            Err(error) => self.handle_error(&format!("update_hero id={}", hero.id), error, None),
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }

    /// Records the failure and hands back the fallback, so the caller
    /// carries on with a usable value.
    fn handle_error<R>(&self, operation: &str, error: ApiError, fallback: R) -> R {
        tracing::warn!(operation, error = %error, "hero operation failed");
        self.log(format!("{operation} failed: {error}"));
        fallback
    }

    fn log(&self, message: impl AsRef<str>) {
        self.sink.add(format!("{LOG_PREFIX}{}", message.as_ref()));
    }
}
