//! View state for the listings screen
//!
//! The screen's state is a single snapshot struct transitioned by
//! discrete events on the UI task, so every rule about loading flags,
//! error slots, and the in-flight toggle marker lives in one testable
//! reducer instead of being scattered across event handlers.

use crate::types::Book;

/// Tab bucket a listing is displayed under.
///
/// Derived from the listing's text fields, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Active,
    Sold,
    Pending,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Active => "Active",
            Tab::Sold => "Sold",
            Tab::Pending => "Pending",
        }
    }

    pub fn variants() -> &'static [Tab] {
        &[Tab::Active, Tab::Sold, Tab::Pending]
    }
}

/// Bucket a listing by its status text.
///
/// Case-insensitive substring rules, sold check first: a soldstatus
/// containing "sold" or "out" wins over a pending/review lifecycle
/// status. Total over arbitrary input; anything unmatched is active.
pub fn classify(book: &Book) -> Tab {
    let sold = book.soldstatus.as_deref().unwrap_or("").to_lowercase();
    if sold.contains("sold") || sold.contains("out") {
        return Tab::Sold;
    }
    let status = book.status.as_deref().unwrap_or("").to_lowercase();
    if status.contains("pending") || status.contains("review") {
        return Tab::Pending;
    }
    Tab::Active
}

/// Events that transition the listings view state.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingsEvent {
    FetchStarted,
    FetchSucceeded(Vec<Book>),
    FetchFailed(String),
    ToggleStarted(String),
    ToggleFinished,
    TabSelected(Tab),
}

/// Snapshot of the listings view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingsState {
    pub tab: Tab,
    pub loading: bool,
    pub error: Option<String>,
    /// Cached copy of the seller's listings, in backend order.
    pub books: Vec<Book>,
    /// Id of the listing with a status mutation in flight, if any.
    pub updating_id: Option<String>,
}

impl ListingsState {
    /// Apply one event to the snapshot.
    pub fn apply(&mut self, event: ListingsEvent) {
        match event {
            ListingsEvent::FetchStarted => {
                self.loading = true;
                self.error = None;
            }
            ListingsEvent::FetchSucceeded(books) => {
                self.books = books;
                self.loading = false;
            }
            ListingsEvent::FetchFailed(message) => {
                // The previously cached listings stay untouched so a
                // failed refresh does not blank the screen.
                self.error = Some(message);
                self.loading = false;
            }
            ListingsEvent::ToggleStarted(id) => {
                // Only the latest toggle is tracked; callers must not
                // assume queuing.
                self.updating_id = Some(id);
            }
            ListingsEvent::ToggleFinished => {
                self.updating_id = None;
            }
            ListingsEvent::TabSelected(tab) => {
                self.tab = tab;
            }
        }
    }

    /// Listings belonging to the selected tab, in cached order.
    pub fn visible(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| classify(book) == self.tab)
            .collect()
    }

    /// Whether a status mutation is in flight for the given listing.
    pub fn is_updating(&self, id: Option<&str>) -> bool {
        match (&self.updating_id, id) {
            (Some(current), Some(id)) => current == id,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, status: &str, soldstatus: &str) -> Book {
        Book {
            id: Some(id.to_string()),
            status: if status.is_empty() {
                None
            } else {
                Some(status.to_string())
            },
            soldstatus: if soldstatus.is_empty() {
                None
            } else {
                Some(soldstatus.to_string())
            },
            ..Book::default()
        }
    }

    #[test]
    fn test_classify_soldstatus_wins() {
        assert_eq!(classify(&book("1", "pending", "soldout")), Tab::Sold);
    }

    #[test]
    fn test_classify_sold_variants() {
        assert_eq!(classify(&book("1", "", "SoldOut")), Tab::Sold);
        assert_eq!(classify(&book("1", "", "sold")), Tab::Sold);
        assert_eq!(classify(&book("1", "", "out of stock")), Tab::Sold);
    }

    #[test]
    fn test_classify_pending_review() {
        assert_eq!(classify(&book("1", "Pending Review", "")), Tab::Pending);
        assert_eq!(classify(&book("1", "under review", "")), Tab::Pending);
    }

    #[test]
    fn test_classify_defaults_to_active() {
        assert_eq!(classify(&book("1", "active", "")), Tab::Active);
        assert_eq!(classify(&Book::default()), Tab::Active);
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = ListingsState::default();

        state.apply(ListingsEvent::FetchStarted);
        assert!(state.loading);
        assert_eq!(state.error, None);

        state.apply(ListingsEvent::FetchSucceeded(vec![book("1", "active", "")]));
        assert!(!state.loading);
        assert_eq!(state.books.len(), 1);
    }

    #[test]
    fn test_fetch_failure_clears_loading_and_keeps_cache() {
        let mut state = ListingsState::default();
        state.apply(ListingsEvent::FetchSucceeded(vec![book("1", "active", "")]));

        state.apply(ListingsEvent::FetchStarted);
        state.apply(ListingsEvent::FetchFailed("Request failed (500)".into()));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Request failed (500)"));
        assert_eq!(state.books.len(), 1);
    }

    #[test]
    fn test_fetch_started_clears_previous_error() {
        let mut state = ListingsState::default();
        state.apply(ListingsEvent::FetchFailed("boom".into()));
        state.apply(ListingsEvent::FetchStarted);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_toggle_marker_tracks_latest_id() {
        let mut state = ListingsState::default();

        state.apply(ListingsEvent::ToggleStarted("b1".into()));
        assert!(state.is_updating(Some("b1")));
        assert!(!state.is_updating(Some("b2")));

        state.apply(ListingsEvent::ToggleStarted("b2".into()));
        assert!(state.is_updating(Some("b2")));

        state.apply(ListingsEvent::ToggleFinished);
        assert!(!state.is_updating(Some("b2")));
        assert!(!state.is_updating(None));
    }

    #[test]
    fn test_visible_filters_by_selected_tab() {
        let mut state = ListingsState::default();
        state.apply(ListingsEvent::FetchSucceeded(vec![
            book("1", "active", ""),
            book("2", "", "Soldout"),
            book("3", "pending review", ""),
        ]));

        assert_eq!(state.visible().len(), 1);

        state.apply(ListingsEvent::TabSelected(Tab::Sold));
        let sold: Vec<_> = state.visible();
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].id.as_deref(), Some("2"));

        state.apply(ListingsEvent::TabSelected(Tab::Pending));
        assert_eq!(state.visible().len(), 1);

        // Switching tabs never touches the cached listings.
        assert_eq!(state.books.len(), 3);
    }

    #[test]
    fn test_empty_fetch_renders_empty_everywhere() {
        let mut state = ListingsState::default();
        state.apply(ListingsEvent::FetchStarted);
        state.apply(ListingsEvent::FetchSucceeded(vec![]));

        for tab in Tab::variants() {
            state.apply(ListingsEvent::TabSelected(*tab));
            assert!(state.visible().is_empty());
        }
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }
}
