use std::time::{Duration, Instant};

use tracing::debug;

use crate::catalog::{CategoryMatches, IconCatalog};
use crate::debounce::Debouncer;
use crate::theme::IconTheme;

/// Delay between the last keystroke and the search it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Headless state of the icon gallery: the active query and theme and the
/// results currently on screen.
pub struct IconSearch<'a> {
    catalog: &'a IconCatalog,
    query: String,
    theme: IconTheme,
    debouncer: Debouncer<String>,
    results: Vec<CategoryMatches>,
}

impl<'a> IconSearch<'a> {
    #[must_use]
    pub fn new(catalog: &'a IconCatalog) -> Self {
        Self::with_delay(catalog, SEARCH_DEBOUNCE)
    }

    #[must_use]
    pub fn with_delay(catalog: &'a IconCatalog, delay: Duration) -> Self {
        let theme = IconTheme::default();
        Self {
            catalog,
            query: String::new(),
            theme,
            debouncer: Debouncer::new(delay),
            results: catalog.search("", theme),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.theme
    }

    #[must_use]
    pub fn results(&self) -> &[CategoryMatches] {
        &self.results
    }

    /// Records a keystroke. The search runs once input has been idle for the
    /// debounce delay; see [`IconSearch::tick`].
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.trigger(text.into(), now);
    }

    /// Applies a pending query whose delay has elapsed. Returns whether the
    /// results changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };
        self.query = query;
        self.refresh()
    }

    /// Switching themes is not debounced.
    pub fn set_theme(&mut self, theme: IconTheme) -> bool {
        if theme == self.theme {
            return false;
        }
        self.theme = theme;
        self.refresh()
    }

    /// Cancels a pending query so nothing runs after the gallery is gone.
    pub fn teardown(&mut self) {
        if self.debouncer.cancel() {
            debug!("discarded pending icon search on teardown");
        }
    }

    fn refresh(&mut self) -> bool {
        let results = self.catalog.search(&self.query, self.theme);
        debug!(
            query = %self.query,
            theme = %self.theme,
            categories = results.len(),
            "icon search"
        );
        let changed = results != self.results;
        self.results = results;
        changed
    }
}
