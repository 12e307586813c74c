use tracing::trace;

use crate::{
    config::SearchConfig, debounce::Debouncer, navigation::Navigator,
    synchronizer::QuerySynchronizer, timer::Timer,
};

/// State behind one mounted search field.
///
/// Holds the only pending timer for the field. Dropping it (or calling
/// [`SearchInput::unmount`]) guarantees no navigation happens afterwards.
pub struct SearchInput {
    initial_value: String,
    debouncer: Debouncer<String>,
}

impl SearchInput {
    pub fn mount<N>(navigator: N, timer: impl Timer + 'static, config: SearchConfig) -> Self
    where
        N: Navigator + 'static,
    {
        let initial_value = navigator
            .query()
            .get(&config.query_param)
            .unwrap_or_default()
            .to_string();
        let quiet_period = config.quiet_period();
        let synchronizer = QuerySynchronizer::new(config);
        let debouncer = Debouncer::new(timer, quiet_period, move |term: String| {
            synchronizer.sync(&term, &navigator);
        });
        Self {
            initial_value,
            debouncer,
        }
    }

    /// Value the field starts out with, the query parameter at mount time.
    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    /// Feed the raw text of the field after every change.
    pub fn on_input(&self, text: impl Into<String>) {
        let text = text.into();
        trace!("search input changed to '{text}'");
        self.debouncer.schedule(text);
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Cancels a search that hasn't been applied yet.
    pub fn cancel(&self) -> bool {
        self.debouncer.cancel()
    }

    pub fn unmount(self) {
        self.cancel();
    }
}
