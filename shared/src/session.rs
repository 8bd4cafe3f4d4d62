use strum_macros::Display;

use crate::intake::ImageHandle;
use crate::ranking::Ranking;

/// Identifies one `analyze` call so a late result can be matched to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

/// What the caller must classify after a successful `analyze`.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub ticket: AnalysisTicket,
    pub image: ImageHandle,
}

#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Idle,
    ImageSelected {
        image: ImageHandle,
    },
    Analyzing {
        image: ImageHandle,
        ticket: AnalysisTicket,
    },
    ResultsReady {
        image: ImageHandle,
        ranking: Ranking,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Idle,
    ImageSelected,
    Analyzing,
    ResultsReady,
}

/// Upload, analyze, show results, reset.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    issued: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        phase_of(&self.state)
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::ImageSelected { image }
            | SessionState::Analyzing { image, .. }
            | SessionState::ResultsReady { image, .. } => Some(image),
        }
    }

    pub fn ranking(&self) -> Option<&Ranking> {
        match &self.state {
            SessionState::ResultsReady { ranking, .. } => Some(ranking),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, SessionState::Analyzing { .. })
    }

    /// Selects a new image from any state; prior image and results are dropped.
    pub fn submit(&mut self, image: ImageHandle) {
        log::debug!("{} -> ImageSelected ({})", self.phase(), image.name());
        self.state = SessionState::ImageSelected { image };
    }

    /// Starts an analysis. Only fires from `ImageSelected`.
    pub fn analyze(&mut self) -> Option<AnalysisRequest> {
        let SessionState::ImageSelected { image } = &self.state else {
            log::debug!("analyze ignored in {}", self.phase());
            return None;
        };

        self.issued += 1;
        let request = AnalysisRequest {
            ticket: AnalysisTicket(self.issued),
            image: image.clone(),
        };
        self.state = SessionState::Analyzing {
            image: request.image.clone(),
            ticket: request.ticket,
        };
        log::debug!("ImageSelected -> Analyzing");
        Some(request)
    }

    /// Applies a finished analysis. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: AnalysisTicket, ranking: Ranking) -> bool {
        match std::mem::take(&mut self.state) {
            SessionState::Analyzing { image, ticket: current } if current == ticket => {
                log::debug!("Analyzing -> ResultsReady");
                self.state = SessionState::ResultsReady { image, ranking };
                true
            }
            other => {
                log::debug!("Dropping stale analysis result in {}", phase_of(&other));
                self.state = other;
                false
            }
        }
    }

    /// Returns a failed analysis to `ImageSelected` so it can be retried.
    pub fn fail(&mut self, ticket: AnalysisTicket) -> bool {
        match std::mem::take(&mut self.state) {
            SessionState::Analyzing { image, ticket: current } if current == ticket => {
                log::debug!("Analyzing -> ImageSelected (failed)");
                self.state = SessionState::ImageSelected { image };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    pub fn reset(&mut self) {
        log::debug!("{} -> Idle", self.phase());
        self.state = SessionState::Idle;
    }
}

fn phase_of(state: &SessionState) -> Phase {
    match state {
        SessionState::Idle => Phase::Idle,
        SessionState::ImageSelected { .. } => Phase::ImageSelected,
        SessionState::Analyzing { .. } => Phase::Analyzing,
        SessionState::ResultsReady { .. } => Phase::ResultsReady,
    }
}
