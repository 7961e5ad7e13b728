use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

/// Id handed out when the collection is empty.
pub const FIRST_ID: u32 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// Create payload. Any `id` in the body is ignored.
#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeroFilter {
    pub id: Option<u32>,
    pub name: Option<String>,
}

impl HeroFilter {
    /// Exact id, case-insensitive name substring. Absent fields match all.
    fn matches(&self, hero: &Hero) -> bool {
        if self.id.is_some_and(|id| id != hero.id) {
            return false;
        }
        match &self.name {
            Some(term) => hero.name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// The roster the server starts with.
pub fn seed_heroes() -> Vec<Hero> {
    [
        (12, "Dr. Nice"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr. IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    app_with(seed_heroes())
}

pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_heroes(State(db): State<Db>, Query(filter): Query<HeroFilter>) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    Json(heroes.values().filter(|hero| filter.matches(hero)).cloned().collect())
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let hero = Hero {
        id: next_id(&heroes),
        name: input.name,
    };
    heroes.insert(hero.id, hero.clone());
    tracing::info!(id = hero.id, name = %hero.name, "hero created");
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Whole-record replace keyed by the body's id.
async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            tracing::info!(id = input.id, name = %input.name, "hero updated");
            *hero = input;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(_) => {
            tracing::info!(id, "hero deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

fn next_id(heroes: &BTreeMap<u32, Hero>) -> u32 {
    heroes.keys().next_back().map_or(FIRST_ID, |max| max + 1)
}
