pub mod catalog;
pub mod error;
pub mod mapping;

pub use catalog::{AuthToken, GAME_FIELDS, GENRE_FIELDS, IgdbGame, IgdbGenre};
pub use error::{MappingError, Result};
pub use mapping::{
    ColumnMapping, INFINITE_BACKLOG_COLUMNS, REPORT_COLUMNS, infinite_backlog_mapping,
};
