use std::{cell::RefCell, rc::Rc};

use crate::query::QueryParams;

/// The slice of the router a search input needs.
pub trait Navigator {
    /// Current path, without the query string.
    fn pathname(&self) -> String;
    /// Snapshot of the current query parameters.
    fn query(&self) -> QueryParams;
    /// Replaces the current history entry with `url` instead of pushing a new one.
    fn replace(&self, url: &str);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn pathname(&self) -> String {
        (**self).pathname()
    }

    fn query(&self) -> QueryParams {
        (**self).query()
    }

    fn replace(&self, url: &str) {
        (**self).replace(url)
    }
}

/// A single entry history kept in memory. Every call to `replace` is recorded.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    state: RefCell<MemoryHistory>,
}

#[derive(Debug, Default)]
struct MemoryHistory {
    pathname: String,
    query: QueryParams,
    replaced: Vec<String>,
}

fn split_url(url: &str) -> (String, QueryParams) {
    match url.split_once('?') {
        Some((path, query)) => (path.to_string(), QueryParams::parse(query)),
        None => (url.to_string(), QueryParams::new()),
    }
}

impl MemoryNavigator {
    pub fn new(url: &str) -> Self {
        let (pathname, query) = split_url(url);
        Self {
            state: RefCell::new(MemoryHistory {
                pathname,
                query,
                replaced: vec![],
            }),
        }
    }

    /// Every url passed to `replace`, oldest first.
    pub fn replaced(&self) -> Vec<String> {
        self.state.borrow().replaced.clone()
    }

    pub fn url(&self) -> String {
        let state = self.state.borrow();
        if state.query.is_empty() {
            state.pathname.clone()
        } else {
            format!("{}?{}", state.pathname, state.query)
        }
    }
}

impl Navigator for MemoryNavigator {
    fn pathname(&self) -> String {
        self.state.borrow().pathname.clone()
    }

    fn query(&self) -> QueryParams {
        self.state.borrow().query.clone()
    }

    fn replace(&self, url: &str) {
        let (pathname, query) = split_url(url);
        let mut state = self.state.borrow_mut();
        state.pathname = pathname;
        state.query = query;
        state.replaced.push(url.to_string());
    }
}
