//! Upload flow: validation-gated state machine with simulated progress.
//!
//! The Cram API exposes no transfer progress, so the percentage shown during
//! an upload is simulated: a fixed-interval ticker (driven by the caller)
//! advances it toward a 90 cap, and only a successful completion forces it to
//! 100. Progress is monotonically non-decreasing within one attempt.

use cram_core::enums::UploadState;
use cram_core::validate::validate_upload;

use crate::error::FlowError;

/// Highest percentage the simulated ticker may reach before the request
/// resolves.
const SIMULATED_CAP: u8 = 90;
/// Percentage points added per tick.
const TICK_STEP: u8 = 10;

/// State machine for a single upload attempt.
///
/// ```text
/// idle --begin--> uploading --complete--> success --reset--> idle
///                           --fail-----> error   --reset--> idle
/// ```
///
/// `begin` runs both local validations (size cap, MIME allow-list) before
/// the flow leaves `idle`; a failing file never reaches the network.
#[derive(Debug)]
pub struct UploadFlow {
    state: UploadState,
    percent: u8,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: UploadState::Idle,
            percent: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> UploadState {
        self.state
    }

    /// Displayed percentage for the current attempt.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Validate the file and enter `uploading`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] when the file is too large or its
    /// MIME type is outside the allow-list, and [`FlowError::Phase`] when the
    /// flow is not `idle`. The state is unchanged in both cases.
    pub fn begin(&mut self, size: u64, mime: &str) -> Result<(), FlowError> {
        if !self.state.can_transition_to(UploadState::Uploading) {
            return Err(FlowError::Phase {
                flow: "upload",
                action: "begin an upload",
                phase: self.state.as_str(),
            });
        }
        validate_upload(size, mime)?;
        self.state = UploadState::Uploading;
        self.percent = 0;
        Ok(())
    }

    /// Advance the simulated percentage one step toward the cap.
    ///
    /// Does nothing outside `uploading`. Returns the displayed percentage.
    pub fn tick(&mut self) -> u8 {
        if self.state == UploadState::Uploading {
            self.percent = self.percent.saturating_add(TICK_STEP).min(SIMULATED_CAP);
        }
        self.percent
    }

    /// Mark the upload as succeeded, forcing the percentage to 100.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Phase`] when the flow is not `uploading`.
    pub fn complete(&mut self) -> Result<(), FlowError> {
        if !self.state.can_transition_to(UploadState::Success) {
            return Err(FlowError::Phase {
                flow: "upload",
                action: "complete an upload",
                phase: self.state.as_str(),
            });
        }
        self.percent = 100;
        self.state = UploadState::Success;
        Ok(())
    }

    /// Mark the upload as failed. The percentage stops where it was.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Phase`] when the flow is not `uploading`.
    pub fn fail(&mut self) -> Result<(), FlowError> {
        if !self.state.can_transition_to(UploadState::Error) {
            return Err(FlowError::Phase {
                flow: "upload",
                action: "fail an upload",
                phase: self.state.as_str(),
            });
        }
        self.state = UploadState::Error;
        Ok(())
    }

    /// Return the flow to `idle` for the next attempt.
    pub fn reset(&mut self) {
        self.state = UploadState::Idle;
        self.percent = 0;
    }
}
