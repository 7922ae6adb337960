use super::state::Stage;

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { stage: Stage },
    PhaseFinish { stage: Stage },

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    /// A human-readable diagnostic line (merge warnings, intermediate values,
    /// deletion notices).
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + 'a>;

/// Optional sink for diagnostics emitted during generation.
///
/// Reporting through a reporter without a callback does nothing.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Reports a diagnostic line, formatting it only when a callback is installed.
    #[inline]
    pub fn message<F>(&self, line: F)
    where
        F: FnOnce() -> String,
    {
        if let Some(cb) = &self.callback {
            cb(Progress::Message(line()));
        }
    }
}
