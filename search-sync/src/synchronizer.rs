use tracing::debug;

use crate::{config::SearchConfig, navigation::Navigator, query::QueryParams};

/// Turns a search term into the next query string and replaces the current URL with it.
#[derive(Clone, Debug, Default)]
pub struct QuerySynchronizer {
    config: SearchConfig,
}

impl QuerySynchronizer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Resets pagination and sets the term, or drops it entirely when empty.
    /// Terms are used verbatim, whitespace included.
    pub fn next_query(&self, term: &str, current: &QueryParams) -> QueryParams {
        let mut params = current.clone();
        params.set(&self.config.page_param, &self.config.first_page);
        if term.is_empty() {
            params.remove(&self.config.query_param);
        } else {
            params.set(&self.config.query_param, term);
        }
        params
    }

    pub fn target_url(pathname: &str, params: &QueryParams) -> String {
        if params.is_empty() {
            pathname.to_string()
        } else {
            format!("{pathname}?{params}")
        }
    }

    /// Replaces the navigator's URL with the query for `term`, even when nothing changed.
    pub fn sync<N: Navigator + ?Sized>(&self, term: &str, navigator: &N) -> QueryParams {
        debug!("Searching for '{term}'");
        let params = self.next_query(term, &navigator.query());
        navigator.replace(&Self::target_url(&navigator.pathname(), &params));
        params
    }
}
