//! Domain DTOs for the heroes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single hero record. The `id` is assigned by the backend on creation and
/// never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

impl Hero {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Request payload for creating a hero. Carries no `id`; the backend picks one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Drops the id, so an already-identified record can be re-submitted for
/// creation and the backend still assigns a fresh one.
impl From<Hero> for NewHero {
    fn from(hero: Hero) -> Self {
        Self { name: hero.name }
    }
}

/// Either a full record or a bare identifier. Delete accepts both and only
/// ever needs the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroRef {
    Id(u32),
    Hero(Hero),
}

impl HeroRef {
    pub fn id(&self) -> u32 {
        match self {
            HeroRef::Id(id) => *id,
            HeroRef::Hero(hero) => hero.id,
        }
    }
}

impl From<u32> for HeroRef {
    fn from(id: u32) -> Self {
        HeroRef::Id(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        HeroRef::Hero(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        HeroRef::Hero(hero.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_ref_resolves_to_the_same_id() {
        let hero = Hero::new(7, "Windstorm");
        assert_eq!(HeroRef::from(&hero).id(), 7);
        assert_eq!(HeroRef::from(hero).id(), 7);
        assert_eq!(HeroRef::from(7).id(), 7);
    }

    #[test]
    fn new_hero_from_hero_drops_the_id() {
        let input = NewHero::from(Hero::new(99, "Magneta"));
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Magneta" }));
    }

    #[test]
    fn hero_rejects_missing_id() {
        let result: Result<Hero, _> = serde_json::from_str(r#"{"name":"Nameless"}"#);
        assert!(result.is_err());
    }
}
