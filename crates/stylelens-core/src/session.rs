use crate::analysis::AnalysisResult;

/// An image the user picked, as it will be sent over the wire.
///
/// The display preview is derived from these bytes by the frontend and
/// released whenever the selection is replaced or the session resets.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Where the upload flow currently stands. Exactly one phase holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    Analyzing,
    ResultReady,
    Error,
}

/// The upload/analyze state machine:
/// `Idle -> FileSelected -> Analyzing -> ResultReady | Error`.
///
/// `ResultReady` and `Error` return to `Idle` via [`reset`](Self::reset).
/// Re-selecting before submission overwrites the pending file, and a failed
/// attempt keeps the selection so the user can resubmit immediately.
#[derive(Debug, Default)]
pub struct OutfitSession {
    phase: Phase,
    selected: Option<SelectedImage>,
    result: Option<AnalysisResult>,
    error: Option<String>,
}

impl OutfitSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when a submission would actually go out.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && matches!(self.phase, Phase::FileSelected | Phase::Error)
    }

    /// Take a new selection from the picker or a drop. Returns `false` (and
    /// changes nothing) while a request is in flight or a result is shown.
    pub fn select_image(&mut self, image: SelectedImage) -> bool {
        match self.phase {
            Phase::Idle | Phase::FileSelected | Phase::Error => {
                self.selected = Some(image);
                self.error = None;
                self.phase = Phase::FileSelected;
                true
            }
            Phase::Analyzing | Phase::ResultReady => false,
        }
    }

    /// Move to `Analyzing` and hand back the image to submit.
    ///
    /// Returns `None` without changing state when there is nothing to send or
    /// a request is already outstanding, which is what makes double-submits
    /// and file-less submits no-ops.
    pub fn begin_analysis(&mut self) -> Option<&SelectedImage> {
        if !self.can_submit() {
            return None;
        }
        self.phase = Phase::Analyzing;
        self.error = None;
        self.selected.as_ref()
    }

    /// Record a successful analysis. Ignored unless a request is in flight,
    /// so a stale worker reply cannot clobber a reset session.
    pub fn complete(&mut self, result: AnalysisResult) {
        if self.phase != Phase::Analyzing {
            return;
        }
        self.result = Some(result);
        self.phase = Phase::ResultReady;
    }

    /// Record a failed analysis with the user-facing message. The selection
    /// is kept so submission is immediately available again.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.phase != Phase::Analyzing {
            return;
        }
        self.error = Some(message.into());
        self.phase = Phase::Error;
    }

    /// Clear everything and return to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
