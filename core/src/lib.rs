//! Async data-access client for the heroes API.
//!
//! # Overview
//! `HeroService` fetches, searches, creates, updates and deletes hero records
//! over HTTP and reports each outcome to a `NotificationSink`. It never
//! returns an error: failed operations are logged and resolve to a fallback
//! value instead.
//!
//! # Design
//! - `HeroClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `Transport` performs the round-trip. `UreqTransport` is the real one;
//!   tests plug in scripted transports.
//! - `NotificationSink` is injected, never global. `MessageLog` keeps the
//!   messages in memory, `TracingSink` forwards them to `tracing`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//!
//! # Example
//! ```no_run
//! use hero_core::{HeroClient, HeroService, TracingSink, UreqTransport};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let service = HeroService::new(
//!     HeroClient::new("http://127.0.0.1:3000"),
//!     UreqTransport::new(),
//!     TracingSink,
//! );
//! for hero in service.search_heroes("mag").await {
//!     println!("{}: {}", hero.id, hero.name);
//! }
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod notify;
pub mod service;
pub mod transport;
pub mod types;

pub use client::HeroClient;
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{MessageLog, NotificationSink, TracingSink};
pub use service::HeroService;
pub use transport::{Transport, UreqTransport};
pub use types::{Hero, HeroRef, NewHero};
