//! Application state and logic.

use std::time::{Duration, Instant};

use crate::content::{Deck, Locale};
use crate::counter::Counter;
use crate::error::LapachoError;
use crate::form::{FormState, LogSubmitter, SubmitStatus, Submitter};
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gold-on-ink palette matching the firm's brand.
    LapachoDark,
    /// Light variant for bright terminals.
    LapachoLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::LapachoDark => Theme::LapachoLight,
            Theme::LapachoLight => Theme::LapachoDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::LapachoDark => "Lapacho Dark",
            Theme::LapachoLight => "Lapacho Light",
        }
    }
}

/// The five deck pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page with firm stats.
    Home,
    /// Who we are.
    About,
    /// The market-entry opportunity.
    Opportunity,
    /// Macro fundamentals and comparison charts.
    WhyParaguay,
    /// Contact form.
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Opportunity,
        Page::WhyParaguay,
        Page::Contact,
    ];

    /// The page after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Page::Home => Page::About,
            Page::About => Page::Opportunity,
            Page::Opportunity => Page::WhyParaguay,
            Page::WhyParaguay => Page::Contact,
            Page::Contact => Page::Home,
        }
    }

    /// The page before this one, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Page::Home => Page::Contact,
            Page::About => Page::Home,
            Page::Opportunity => Page::About,
            Page::WhyParaguay => Page::Opportunity,
            Page::Contact => Page::WhyParaguay,
        }
    }

    /// Page for a number key (1-based), if in range.
    pub fn from_digit(d: u32) -> Option<Self> {
        Self::ALL.get(d.checked_sub(1)? as usize).copied()
    }

    /// Position of this page in navigation order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

/// Animation state owned by one page: its stat counters and the moment the
/// page was first shown (which also starts the chart bar reveals).
#[derive(Debug)]
pub struct PageAnimations {
    /// One counter per stat, in content order.
    pub counters: Vec<Counter>,
    /// When the page first became visible; `None` until then.
    pub revealed_at: Option<Instant>,
}

impl PageAnimations {
    fn new(values: impl Iterator<Item = String>, duration: Duration) -> Self {
        Self {
            counters: values
                .map(|v| Counter::new(&v).with_duration(duration))
                .collect(),
            revealed_at: None,
        }
    }

    /// Mark the page visible and fire its counters, first time only.
    fn reveal(&mut self, now: Instant) {
        if self.revealed_at.is_none() {
            self.revealed_at = Some(now);
        }
        for counter in &mut self.counters {
            counter.trigger(now);
        }
    }
}

/// Application state.
pub struct App {
    /// Active content language.
    pub locale: Locale,
    /// Loaded deck content.
    pub deck: Deck,
    /// Page currently on screen.
    pub page: Page,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Vertical content scroll for the current page.
    pub scroll: u16,
    /// Contact form state.
    pub form: FormState,
    /// Whether keystrokes currently edit the contact form.
    pub form_editing: bool,
    /// Home page stat animations.
    pub home_anim: PageAnimations,
    /// Why-Paraguay stat animations and chart reveal clock.
    pub why_anim: PageAnimations,
    submitter: Box<dyn Submitter>,
}

impl App {
    /// Create a new application instance.
    pub fn new(locale: Locale, deck: Deck, counter_duration: Duration) -> Self {
        let home_anim = PageAnimations::new(
            deck.home.stats.iter().map(|s| s.value.clone()),
            counter_duration,
        );
        let why_anim = PageAnimations::new(
            deck.why_paraguay.stats.iter().map(|s| s.value.clone()),
            counter_duration,
        );

        Self {
            locale,
            deck,
            page: Page::Home,
            theme: Theme::LapachoDark,
            status: "Ready".to_string(),
            scroll: 0,
            form: FormState::new(),
            form_editing: false,
            home_anim,
            why_anim,
            submitter: Box::new(LogSubmitter),
        }
    }

    /// Replace the submission sink.
    pub fn with_submitter(mut self, submitter: Box<dyn Submitter>) -> Self {
        self.submitter = submitter;
        self
    }

    /// Called once per frame before drawing: fires run-once reveals for the
    /// visible page and completes any queued form submission.
    pub fn tick(&mut self, now: Instant) {
        match self.page {
            Page::Home => self.home_anim.reveal(now),
            Page::WhyParaguay => self.why_anim.reveal(now),
            Page::Contact => {
                if self.form.status == SubmitStatus::Submitting {
                    self.form
                        .finish_submit(self.submitter.as_ref(), &self.deck.contact.countries);
                    let labels = &self.deck.contact.form;
                    self.status = match self.form.status {
                        SubmitStatus::Success => labels.success.clone(),
                        SubmitStatus::Error => labels.error.clone(),
                        _ => self.status.clone(),
                    };
                }
            }
            _ => {}
        }
    }

    /// Switch to a page.
    pub fn goto(&mut self, page: Page) {
        self.page = page;
        self.scroll = 0;
        self.form_editing = false;
        self.status = self.page_title(page);
    }

    /// Scroll the current page down.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll the current page up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Go to the next page.
    pub fn next_page(&mut self) {
        self.goto(self.page.next());
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) {
        self.goto(self.page.prev());
    }

    /// Navigation label for a page, from the deck content.
    pub fn page_title(&self, page: Page) -> String {
        let nav = &self.deck.nav;
        match page {
            Page::Home => nav.home.clone(),
            Page::About => nav.about.clone(),
            Page::Opportunity => nav.opportunity.clone(),
            Page::WhyParaguay => nav.why_paraguay.clone(),
            Page::Contact => nav.contact.clone(),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the firm's contact card to the clipboard.
    pub fn copy_contact(&mut self) {
        match util::copy_contact_card(&self.deck.contact) {
            Ok(_) => self.status = "Contact card copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Queue the contact form for submission.
    pub fn submit_form(&mut self) {
        self.form.request_submit(&self.deck.contact.countries);
        if !self.form.errors.is_empty() {
            self.status = LapachoError::invalid_form(self.form.errors.len()).to_string();
        } else {
            self.status = self.deck.contact.form.sending.clone();
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.locale)
            .field("page", &self.page)
            .field("theme", &self.theme)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
