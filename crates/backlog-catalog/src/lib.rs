//! IGDB catalog client.
//!
//! Authenticates against Twitch with the OAuth client-credentials flow and
//! looks up game and genre records by id. Every call is a single blocking
//! request; there is no retry, caching or pagination.
//!
//! # Example
//!
//! ```no_run
//! use backlog_catalog::IgdbClient;
//!
//! fn lookup() -> backlog_catalog::Result<()> {
//!     let mut client = IgdbClient::new("my-client-id")?;
//!     client.request_auth_token("my-client-secret")?;
//!
//!     let game = client.game_by_id(1234)?;
//!     let genre = client.genre_by_id(game.genres[0])?;
//!     println!("{} ({})", game.name, genre.name);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod transport;

pub use backlog_model::{GAME_FIELDS, GENRE_FIELDS, IgdbGame, IgdbGenre};
pub use client::{API_BASE, AUTH_ENDPOINT, CatalogEndpoints, IgdbClient, build_query};
pub use error::{CatalogError, Result};
pub use transport::{HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport};
