#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use feedback::{AnalysisResult, DEFAULT_TARGET_ROLE, NO_FILE_MESSAGE, Report, effective_role, error_message};

/// Metadata for the file the user picked.
///
/// The browser handle itself lives beside the signal in the page (it is not
/// `Send` and has no equality); this is what the view shows and tests see.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// What the page needs to issue the request started by
/// [`SubmissionState::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmit {
    /// Effective role: trimmed input, or the default when blank.
    pub target_role: String,
    /// MIME type the browser reported for the picked file (may be blank).
    pub mime: String,
}

/// Why [`SubmissionState::begin_submit`] refused to start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// No file selected; the validation error has been set.
    NoFile,
    /// A request is already outstanding.
    InFlight,
}

/// Transient state of the Submission View.
///
/// Lives for the life of the page and is provided as `RwSignal` context.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionState {
    pub file: Option<SelectedFile>,
    pub target_role: String,
    pub loading: bool,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            file: None,
            target_role: DEFAULT_TARGET_ROLE.to_owned(),
            loading: false,
            result: None,
            error: None,
        }
    }
}

impl SubmissionState {
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
    }

    pub fn edit_role(&mut self, role: String) {
        self.target_role = role;
    }

    /// Start a submission attempt.
    ///
    /// Clears the previous error. On success the loading flag is set, the
    /// previous result is dropped and the request parameters are returned; the
    /// caller must issue exactly one request and report back through
    /// [`SubmissionState::finish_submit`].
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::NoFile`] when no file is selected (the validation
    /// message is set), [`SubmitRejected::InFlight`] while a request is
    /// outstanding (state untouched).
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitRejected> {
        if self.loading {
            return Err(SubmitRejected::InFlight);
        }
        self.error = None;
        let Some(file) = self.file.as_ref() else {
            self.error = Some(NO_FILE_MESSAGE.to_owned());
            return Err(SubmitRejected::NoFile);
        };
        let pending = PendingSubmit {
            target_role: effective_role(&self.target_role).to_owned(),
            mime: file.mime.clone(),
        };
        self.loading = true;
        self.result = None;
        Ok(pending)
    }

    /// Record the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<AnalysisResult, String>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(reason) => self.error = Some(error_message(&reason)),
        }
    }

    /// Display model for the results section, `None` until a result arrives.
    #[must_use]
    pub fn report(&self) -> Option<Report> {
        self.result.as_ref().map(Report::from_result)
    }
}
