//! Keeps a search input and the page query string in sync.
//!
//! Keystrokes are fed to a [`Debouncer`], and once the user stops typing the
//! latest term is handed to the [`QuerySynchronizer`] which rewrites the
//! `query`/`page` parameters and replaces the current URL through a
//! [`Navigator`].

pub mod config;
pub mod debounce;
pub mod error;
pub mod navigation;
pub mod query;
pub mod search_input;
pub mod synchronizer;
pub mod timer;

pub use config::SearchConfig;
pub use debounce::Debouncer;
pub use error::ConfigError;
pub use navigation::{MemoryNavigator, Navigator};
pub use query::QueryParams;
pub use search_input::SearchInput;
pub use synchronizer::QuerySynchronizer;
pub use timer::Timer;
#[cfg(feature = "tokio")]
pub use timer::TokioTimer;
