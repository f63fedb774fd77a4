use crate::core::auto_advance::AutoAdvance;
use crate::core::likes::LikeRegistry;
use crate::core::rotator::{lock_rotator, FactRotator, SharedRotator};
use crate::domain::model::{
    BreedView, Catalog, PageInfo, SessionEvent, SessionSnapshot, SessionSummary, Tab,
};
use crate::utils::error::{FelineError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc;

pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(10);

/// Timer events not yet consumed; further ticks are dropped once this many are queued.
pub const EVENT_BUFFER: usize = 32;

pub type SessionEvents = mpsc::Receiver<SessionEvent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// `None` disables the timer.
    pub auto_advance: Option<Duration>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            auto_advance: Some(DEFAULT_AUTO_ADVANCE),
        }
    }
}

impl SessionSettings {
    pub fn manual() -> Self {
        Self { auto_advance: None }
    }
}

/// One viewing of the page: owns the rotator, the likes and the timer.
pub struct Session {
    catalog: Catalog,
    rotator: SharedRotator,
    likes: LikeRegistry,
    active_tab: Tab,
    auto_advance: Option<AutoAdvance>,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session. With auto-advance enabled this spawns a task, so it
    /// must run inside a tokio runtime.
    pub fn start(catalog: Catalog, settings: SessionSettings) -> Result<(Self, SessionEvents)> {
        catalog.validate()?;

        let rotator = FactRotator::new(catalog.facts.clone())?.into_shared();
        let likes = LikeRegistry::for_breeds(&catalog.breeds);
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);

        let auto_advance = match settings.auto_advance {
            Some(period) => Some(AutoAdvance::spawn(rotator.clone(), period, events_tx)?),
            None => None,
        };

        tracing::info!(
            "🐱 Session started: {} facts, {} breeds",
            catalog.facts.len(),
            catalog.breeds.len()
        );

        let session = Self {
            catalog,
            rotator,
            likes,
            active_tab: Tab::default(),
            auto_advance,
            started_at: Utc::now(),
        };
        Ok((session, events_rx))
    }

    pub fn page(&self) -> &PageInfo {
        &self.catalog.page
    }

    pub fn current_fact(&self) -> String {
        lock_rotator(&self.rotator).current().to_string()
    }

    pub fn fact_index(&self) -> usize {
        lock_rotator(&self.rotator).current_index()
    }

    pub fn fact_count(&self) -> usize {
        self.catalog.facts.len()
    }

    /// Moves to the next fact and returns it.
    pub fn advance(&self) -> String {
        self.advance_indexed().1
    }

    /// Like `advance`, with the index read under the same lock.
    pub fn advance_indexed(&self) -> (usize, String) {
        let mut rotator = lock_rotator(&self.rotator);
        rotator.advance();
        tracing::debug!("Advanced to fact #{}", rotator.current_index());
        (rotator.current_index(), rotator.current().to_string())
    }

    pub fn is_liked(&self, id: &str) -> Result<bool> {
        self.likes.is_liked(id)
    }

    pub fn toggle_like(&mut self, id: &str) -> Result<bool> {
        match self.likes.toggle(id) {
            Ok(liked) => {
                tracing::debug!("Breed '{}' liked={}", id, liked);
                Ok(liked)
            }
            Err(e) => {
                tracing::warn!("Rejected like toggle: {}", e);
                Err(e)
            }
        }
    }

    /// Maps a reference to a canonical breed id: exact id first, then a
    /// 1-based position, then a case-insensitive id.
    pub fn resolve_breed(&self, reference: &str) -> Option<&str> {
        let reference = reference.trim();
        let breeds = &self.catalog.breeds;

        if let Some(breed) = breeds.iter().find(|b| b.id == reference) {
            return Some(breed.id.as_str());
        }
        if let Some(breed) = reference
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|i| breeds.get(i))
        {
            return Some(breed.id.as_str());
        }
        breeds
            .iter()
            .find(|b| b.id.eq_ignore_ascii_case(reference))
            .map(|b| b.id.as_str())
    }

    pub fn breed_view(&self, id: &str) -> Result<BreedView> {
        let liked = self.likes.is_liked(id)?;
        let breed = self
            .catalog
            .breed(id)
            .ok_or_else(|| FelineError::UnknownBreed { id: id.to_string() })?;
        Ok(BreedView {
            id: breed.id.clone(),
            display_name: breed.display_name.clone(),
            description: breed.description.clone(),
            image_ref: breed.image_ref.clone(),
            liked,
        })
    }

    pub fn breeds(&self) -> Vec<BreedView> {
        self.catalog
            .breeds
            .iter()
            .map(|breed| BreedView {
                id: breed.id.clone(),
                display_name: breed.display_name.clone(),
                description: breed.description.clone(),
                image_ref: breed.image_ref.clone(),
                liked: self.likes.is_liked(&breed.id).unwrap_or(false),
            })
            .collect()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn auto_advance_running(&self) -> bool {
        self.auto_advance.as_ref().is_some_and(AutoAdvance::is_running)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (fact_index, fact) = {
            let rotator = lock_rotator(&self.rotator);
            (rotator.current_index(), rotator.current().to_string())
        };
        SessionSnapshot {
            title: self.catalog.page.title.clone(),
            active_tab: self.active_tab,
            fact_index,
            fact_count: self.fact_count(),
            fact,
            breeds: self.breeds(),
        }
    }

    /// Stops the timer and reports what the session ended with.
    pub async fn close(mut self) -> SessionSummary {
        if let Some(timer) = self.auto_advance.take() {
            timer.stop().await;
        }

        let summary = SessionSummary {
            started_at: self.started_at,
            ended_at: Utc::now(),
            fact_index: self.fact_index(),
            liked: self.likes.liked_ids().into_iter().map(String::from).collect(),
        };
        tracing::info!(
            "👋 Session closed after {}s, {} breed(s) liked",
            (summary.ended_at - summary.started_at).num_seconds(),
            summary.liked.len()
        );
        summary
    }
}
