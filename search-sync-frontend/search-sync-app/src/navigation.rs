use std::{rc::Rc, time::Duration};

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos_router::{
    hooks::{use_location, use_navigate},
    NavigateOptions,
};
use search_sync::{Navigator, QueryParams, Timer};

/// [`Navigator`] on top of the surrounding `<Router/>`.
///
/// Reads are untracked, the URL is only sampled when a search is applied.
pub struct RouterNavigator {
    pathname: Memo<String>,
    search: Memo<String>,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be called while a router is in context.
    pub fn new() -> Self {
        let location = use_location();
        Self {
            pathname: location.pathname,
            search: location.search,
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Default for RouterNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterNavigator {
    fn pathname(&self) -> String {
        self.pathname.get_untracked()
    }

    fn query(&self) -> QueryParams {
        self.search.with_untracked(|search| QueryParams::parse(search))
    }

    fn replace(&self, url: &str) {
        (self.navigate)(
            url,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }
}

/// Timeouts from `gloo-timers` spawned on the leptos executor.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}
