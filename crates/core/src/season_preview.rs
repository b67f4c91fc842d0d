//! Session-scoped preview of a candidate season.
//!
//! The preview is kept next to, never merged into, the persisted season.
//! State machine:
//!
//! ```text
//! Inactive --set--> Previewing --clear--> Inactive
//! Previewing --set--> Previewing (candidate replaced)
//! Previewing --take (on promotion)--> Inactive
//! ```

use crate::season::SeasonPalette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Inactive,
    Previewing,
}

/// Transient season override held by one user session.
#[derive(Debug, Clone, Default)]
pub struct SeasonPreview {
    candidate: Option<SeasonPalette>,
}

impl SeasonPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PreviewState {
        if self.candidate.is_some() {
            PreviewState::Previewing
        } else {
            PreviewState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        self.candidate.is_some()
    }

    /// The candidate being previewed, if any.
    pub fn active(&self) -> Option<&SeasonPalette> {
        self.candidate.as_ref()
    }

    /// Start or replace the preview. Last write wins.
    pub fn set(&mut self, season: SeasonPalette) {
        self.candidate = Some(season);
    }

    pub fn clear(&mut self) {
        self.candidate = None;
    }

    /// Remove and return the candidate, leaving the preview inactive.
    pub fn take(&mut self) -> Option<SeasonPalette> {
        self.candidate.take()
    }

    /// The season the user is currently seeing: the preview if active,
    /// otherwise the persisted one.
    pub fn effective<'a>(&'a self, persisted: Option<&'a SeasonPalette>) -> Option<&'a SeasonPalette> {
        self.candidate.as_ref().or(persisted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
