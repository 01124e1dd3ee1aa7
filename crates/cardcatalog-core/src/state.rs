//! UI State Controller
//!
//! [`CatalogController`] exclusively owns the [`UiState`] and the drawer
//! visibility. Every operation that changes something rebuilds one
//! [`RenderFrame`] from scratch, available through
//! [`CatalogController::frame`] and pushed to every [`CatalogView`]
//! registered with [`CatalogController::subscribe`].
//!
//! The desktop app does not register views: it keeps the controller in a
//! single Dioxus signal, and every surface re-renders from `frame()` when
//! the signal is written.

use crate::card::Card;
use crate::filter::{filter_cards, normalize_search};
use crate::loader::Catalog;
use crate::render::{render, BootStatus, HighlightRule, RenderFrame};

/// Filter-relevant state of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub all_cards: Vec<Card>,
    pub categories: Vec<String>,
    /// `None` means no category filter.
    pub active_category: Option<String>,
    /// Lower-cased, trimmed term used for matching.
    pub search_term: String,
    /// What the user literally typed, mirrored into every search input.
    pub search_input: String,
}

/// Visibility of the mobile category drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

/// A headless surface that projects frames pushed by the controller.
///
/// Views must not keep state of their own beyond what the last frame said.
pub trait CatalogView {
    fn update(&mut self, frame: &RenderFrame);
}

/// Owner of all mutable catalog state.
pub struct CatalogController {
    state: UiState,
    drawer: DrawerState,
    status: BootStatus,
    highlight: HighlightRule,
    frame: RenderFrame,
    views: Vec<Box<dyn CatalogView>>,
}

impl CatalogController {
    pub fn new(highlight: HighlightRule) -> Self {
        Self {
            state: UiState::default(),
            drawer: DrawerState::Closed,
            status: BootStatus::Loading,
            highlight,
            frame: RenderFrame::loading(),
            views: Vec::new(),
        }
    }

    /// Register a view. It immediately receives the current frame.
    pub fn subscribe(&mut self, mut view: Box<dyn CatalogView>) {
        view.update(&self.frame);
        self.views.push(view);
    }

    /// Commit the settled boot result and produce the first real frame.
    pub fn install(&mut self, catalog: Catalog) {
        if self.status == BootStatus::Failed {
            return;
        }

        tracing::info!(
            cards = catalog.cards.len(),
            categories = catalog.categories.len(),
            "Catalog installed"
        );

        self.state.all_cards = catalog.cards;
        self.state.categories = catalog.categories;
        self.status = BootStatus::Ready;
        self.publish();
    }

    /// Show the terminal failure indicator. Nothing renders afterwards.
    pub fn fail_boot(&mut self) {
        self.status = BootStatus::Failed;
        self.frame = RenderFrame::failed();
        for view in &mut self.views {
            view.update(&self.frame);
        }
    }

    /// Toggle the category filter, then dismiss the drawer.
    pub fn select_category(&mut self, category: &str) {
        if self.state.active_category.as_deref() == Some(category) {
            self.state.active_category = None;
        } else {
            self.state.active_category = Some(category.to_string());
        }
        self.drawer = DrawerState::Closed;
        self.publish();
    }

    /// Drop the category filter, then dismiss the drawer.
    pub fn clear_category(&mut self) {
        self.state.active_category = None;
        self.drawer = DrawerState::Closed;
        self.publish();
    }

    /// Store the normalized term and mirror the raw input to every search surface.
    pub fn set_search_term(&mut self, raw: &str) {
        let term = normalize_search(raw);
        if term == self.state.search_term && raw == self.state.search_input {
            return;
        }

        self.state.search_term = term;
        self.state.search_input = raw.to_string();
        self.publish();
    }

    pub fn toggle_drawer(&mut self) {
        match self.drawer {
            DrawerState::Open => self.close_drawer(),
            DrawerState::Closed => self.open_drawer(),
        }
    }

    pub fn open_drawer(&mut self) {
        if self.drawer == DrawerState::Open {
            return;
        }
        self.drawer = DrawerState::Open;
        self.publish();
    }

    /// Idempotent; closing a closed drawer does nothing.
    pub fn close_drawer(&mut self) {
        if self.drawer == DrawerState::Closed {
            return;
        }
        self.drawer = DrawerState::Closed;
        self.publish();
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn status(&self) -> BootStatus {
        self.status
    }

    pub fn highlight(&self) -> HighlightRule {
        self.highlight
    }

    /// The most recently published frame.
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Re-filter from the full card set.
    pub fn visible_cards(&self) -> Vec<Card> {
        filter_cards(
            &self.state.all_cards,
            self.state.active_category.as_deref(),
            &self.state.search_term,
        )
    }

    /// Rebuild the frame and notify every view. Only runs once boot has
    /// settled successfully.
    fn publish(&mut self) {
        if self.status != BootStatus::Ready {
            return;
        }

        let filtered = self.visible_cards();
        self.frame = render(&filtered, &self.state, self.drawer, self.highlight);
        for view in &mut self.views {
            view.update(&self.frame);
        }
    }
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(HighlightRule::default())
    }
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("state", &self.state)
            .field("drawer", &self.drawer)
            .field("status", &self.status)
            .field("views", &self.views.len())
            .finish()
    }
}
