use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rusqlite::Connection;

use crate::cards;
use crate::config::Config;
use crate::db;
use crate::photos;
use crate::playlist::Playlist;
use crate::types::{Activity, ActivitySource, Card, Theme};

use super::{AppEvent, AppView};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub config: Config,
    pub db: Connection,
    pub view: AppView,
    pub theme: Theme,
    /// Backing deck, failed cards included.
    pub cards: Vec<Card>,
    /// Position within the visible cards.
    pub selected_card_index: usize,
    pub wakatime: Vec<Activity>,
    pub github: Vec<Activity>,
    pub playlist: Playlist,
    pub ticks: u64,
    pub status: Option<String>,
    rng: StdRng,
}

impl App {
    pub fn new(config: Config, db: Connection) -> Self {
        Self::with_rng(config, db, StdRng::seed_from_u64(rand::random()))
    }

    pub fn with_rng(config: Config, db: Connection, rng: StdRng) -> Self {
        let theme = config.theme;
        let playlist = Playlist::new(config.songs.clone(), theme);
        let mut app = Self {
            running: true,
            config,
            db,
            view: AppView::Dashboard,
            theme,
            cards: Vec::new(),
            selected_card_index: 0,
            wakatime: Vec::new(),
            github: Vec::new(),
            playlist,
            ticks: 0,
            status: None,
            rng,
        };

        app.load_cards();
        app.load_activity();

        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.ticks = self.ticks.wrapping_add(1),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('q') => self.running = false,
                _ => self.view = AppView::Dashboard,
            }
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Char('t') => self.set_theme(self.theme.toggled()),
            KeyCode::Up => self.select_card(-1),
            KeyCode::Down => self.select_card(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.send_selected_card_back(),
            KeyCode::Char('n') => self.playlist.next(),
            KeyCode::Char('p') => self.playlist.previous(),
            KeyCode::Char('m') => self.playlist.toggle_playing(),
            KeyCode::Char('r') => {
                self.load_cards();
                self.load_activity();
            }
            _ => {}
        }
    }

    pub fn visible_cards(&self) -> Vec<&Card> {
        cards::visible(&self.cards)
    }

    /// Replace the deck and playlist with the other theme's content.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        tracing::info!(%theme, "Theme changed");
        self.theme = theme;
        self.playlist.set_theme(theme);
        self.load_cards();
    }

    /// Rebuild the deck from the catalog, then resolve each card against the photos directory.
    pub fn load_cards(&mut self) {
        let catalog = photos::catalog(&self.config, self.theme);
        let mut deck = cards::initialize(&catalog, self.config.rotation_factor, &mut self.rng);

        for card in catalog.iter() {
            let path = photos::resolve_path(&self.config.photos_dir, &card.image_path);
            deck = if path.is_file() {
                cards::mark_loaded(&deck, card.id)
            } else {
                tracing::debug!(path = %path.display(), "Image failed to load");
                cards::mark_failed(&deck, card.id)
            };
        }

        self.cards = deck;
        self.selected_card_index = 0;
    }

    pub fn load_activity(&mut self) {
        self.status = None;
        for source in [ActivitySource::Wakatime, ActivitySource::Github] {
            let activities = match db::query_activities(source, &self.db) {
                Ok(activities) => activities,
                Err(err) => {
                    tracing::error!(source = source.as_str(), error = %err, "Failed to load activity");
                    self.status = Some(format!("Error loading {} data.", source.as_str()));
                    Vec::new()
                }
            };
            match source {
                ActivitySource::Wakatime => self.wakatime = activities,
                ActivitySource::Github => self.github = activities,
            }
        }
    }

    fn select_card(&mut self, step: isize) {
        let len = self.visible_cards().len();
        if len == 0 {
            self.selected_card_index = 0;
            return;
        }
        let current = self.selected_card_index.min(len - 1) as isize;
        self.selected_card_index = (current + step).rem_euclid(len as isize) as usize;
    }

    fn send_selected_card_back(&mut self) {
        self.cards = cards::move_to_end(
            &self.cards,
            self.selected_card_index,
            self.config.rotation_factor,
            &mut self.rng,
        );
        self.selected_card_index = 0;
    }
}
