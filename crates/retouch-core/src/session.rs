//! Per-user edit state.
//!
//! An [`EditSession`] is created on the first upload and dropped when the
//! session ends. It holds the uploaded bitmap (never changed until the
//! next upload), the bitmap being edited, the last applied filter values
//! and the feedback given so far.

use crate::decode::Bitmap;
use crate::feedback::Feedback;
use crate::transform::reset;
use crate::FilterSettings;

#[derive(Debug, Clone)]
pub struct EditSession {
    original: Bitmap,
    current: Bitmap,
    filters: FilterSettings,
    feedback: Feedback,
}

impl EditSession {
    /// Start a session from a freshly decoded upload with the sliders at
    /// `filters`.
    pub fn new(original: Bitmap, filters: FilterSettings) -> Self {
        Self {
            current: original.clone(),
            original,
            filters,
            feedback: Feedback::default(),
        }
    }

    /// The bitmap as uploaded.
    pub fn original(&self) -> &Bitmap {
        &self.original
    }

    /// The bitmap with all edits so far.
    pub fn current(&self) -> &Bitmap {
        &self.current
    }

    /// Slider values of the last filter application.
    pub fn filters(&self) -> &FilterSettings {
        &self.filters
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut Feedback {
        &mut self.feedback
    }

    /// Replace the edited bitmap wholesale.
    pub fn replace_current(&mut self, bitmap: Bitmap) {
        self.current = bitmap;
    }

    pub(crate) fn set_filters(&mut self, filters: FilterSettings) {
        self.filters = filters;
    }

    /// Start over from a new upload with the sliders at `filters`, keeping
    /// the feedback given so far.
    pub fn replace_original(&mut self, original: Bitmap, filters: FilterSettings) {
        self.current = original.clone();
        self.original = original;
        self.filters = filters;
    }

    /// Throw away every edit.
    pub fn reset(&mut self) {
        self.current = reset(&self.original);
    }
}
