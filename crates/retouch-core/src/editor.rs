//! Command dispatcher.
//!
//! Every user interaction arrives as a [`Command`]. [`Editor::dispatch`]
//! runs it against the session, one at a time, and answers with a fresh
//! [`RenderView`]. Handlers receive the session explicitly; there is no
//! ambient state.
//!
//! A failed command leaves the session exactly as it was.

use tracing::{info, instrument, warn};

use crate::adjustments;
use crate::background::{self, BackgroundRemover, BorderMatte};
use crate::config::EditorConfig;
use crate::decode::{decode_upload, MediaType};
use crate::encode::{encode_png, EXPORT_MIME};
use crate::error::EditorError;
use crate::render::{Download, ImageInfo, Notice, RenderView, SliderView, GREETING, TITLE};
use crate::session::EditSession;
use crate::transform;
use crate::FilterSettings;

/// A user action and its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load a new image, replacing any previous upload.
    Upload { bytes: Vec<u8>, media_type: MediaType },
    /// Brightness, contrast and blur as one step.
    ApplyFilters(FilterSettings),
    RemoveBackground,
    CropToSquare,
    Reset,
    /// Export the current image as PNG.
    Save,
    /// Select star control 1..=5.
    Rate(u8),
    SetComment(String),
    SubmitFeedback,
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Upload { .. } => "upload",
            Command::ApplyFilters(_) => "apply_filters",
            Command::RemoveBackground => "remove_background",
            Command::CropToSquare => "crop_to_square",
            Command::Reset => "reset",
            Command::Save => "save",
            Command::Rate(_) => "rate",
            Command::SetComment(_) => "set_comment",
            Command::SubmitFeedback => "submit_feedback",
        }
    }
}

/// What a handler wants shown besides the updated state.
#[derive(Debug, Default)]
struct Outcome {
    notice: Option<Notice>,
    download: Option<Download>,
}

/// One user's editor: configuration, background model and session.
pub struct Editor {
    config: EditorConfig,
    remover: Box<dyn BackgroundRemover>,
    session: Option<EditSession>,
}

impl Editor {
    /// Editor using the built-in [`BorderMatte`] background model.
    pub fn new(config: EditorConfig) -> Self {
        let remover = Box::new(BorderMatte::new(config.background.clone()));
        Self::with_remover(config, remover)
    }

    /// Editor delegating background removal to `remover`.
    pub fn with_remover(config: EditorConfig, remover: Box<dyn BackgroundRemover>) -> Self {
        Self {
            config,
            remover,
            session: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The active session, if an image has been uploaded.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Drop the session and everything in it.
    pub fn end_session(&mut self) {
        if self.session.take().is_some() {
            info!("Session ended");
        }
    }

    /// Run one command and describe the resulting page.
    #[instrument(skip_all, fields(command = command.name()))]
    pub fn dispatch(&mut self, command: Command) -> Result<RenderView, EditorError> {
        let outcome = self.run(command).inspect_err(|e| {
            warn!(error = %e, "Command failed");
        })?;
        Ok(self.render(outcome))
    }

    /// Describe the page without changing anything.
    pub fn view(&self) -> RenderView {
        self.render(Outcome::default())
    }

    fn run(&mut self, command: Command) -> Result<Outcome, EditorError> {
        let Self {
            config,
            remover,
            session,
        } = self;

        match command {
            Command::Upload { bytes, media_type } => upload(session, config, &bytes, media_type),
            Command::ApplyFilters(settings) => apply_filters(active(session)?, config, settings),
            Command::RemoveBackground => remove_background(active(session)?, &**remover),
            Command::CropToSquare => Ok(crop_to_square(active(session)?)),
            Command::Reset => Ok(reset(active(session)?)),
            Command::Save => save(active(session)?, config),
            Command::Rate(stars) => rate(active(session)?, stars),
            Command::SetComment(comment) => Ok(set_comment(active(session)?, comment)),
            Command::SubmitFeedback => Ok(submit_feedback(active(session)?)),
        }
    }

    fn render(&self, outcome: Outcome) -> RenderView {
        let filters = self
            .session
            .as_ref()
            .map(|s| *s.filters())
            .unwrap_or_else(|| FilterSettings::from_config(&self.config));
        let feedback = self.session.as_ref().map(|s| s.feedback().clone()).unwrap_or_default();

        RenderView {
            title: TITLE,
            greeting: GREETING,
            image: self.session.as_ref().map(|s| ImageInfo::from(s.current())),
            sliders: [
                SliderView::new(
                    "brightness",
                    "Adjust Brightness",
                    &self.config.brightness,
                    filters.brightness,
                ),
                SliderView::new(
                    "contrast",
                    "Adjust Contrast",
                    &self.config.contrast,
                    filters.contrast,
                ),
                SliderView::new("blur", "Adjust Blur", &self.config.blur, filters.blur as f32),
            ],
            rating: feedback.rating.value(),
            stars: feedback.rating.stars(),
            rating_label: feedback.rating.label(),
            comment: feedback.comment,
            notice: outcome.notice,
            download: outcome.download,
        }
    }
}

fn active(session: &mut Option<EditSession>) -> Result<&mut EditSession, EditorError> {
    session.as_mut().ok_or(EditorError::NoImage)
}

fn upload(
    session: &mut Option<EditSession>,
    config: &EditorConfig,
    bytes: &[u8],
    media_type: MediaType,
) -> Result<Outcome, EditorError> {
    let bitmap = decode_upload(bytes, media_type)?;
    info!(
        width = bitmap.width,
        height = bitmap.height,
        size = bytes.len(),
        "Image uploaded"
    );

    let filters = FilterSettings::from_config(config);
    if let Some(existing) = session.as_mut() {
        existing.replace_original(bitmap, filters);
    } else {
        *session = Some(EditSession::new(bitmap, filters));
    }
    Ok(Outcome::default())
}

fn apply_filters(
    session: &mut EditSession,
    config: &EditorConfig,
    settings: FilterSettings,
) -> Result<Outcome, EditorError> {
    let checks = [
        ("brightness", settings.brightness, &config.brightness),
        ("contrast", settings.contrast, &config.contrast),
        ("blur", settings.blur as f32, &config.blur),
    ];
    for (name, value, range) in checks {
        if !range.contains(value) {
            return Err(EditorError::InvalidParameter {
                name,
                value,
                min: range.min,
                max: range.max,
            });
        }
    }

    info!(
        brightness = settings.brightness,
        contrast = settings.contrast,
        blur = settings.blur,
        "Applying filters"
    );
    let filtered = adjustments::apply_filters(session.current(), &settings);
    session.replace_current(filtered);
    session.set_filters(settings);
    Ok(Outcome::default())
}

fn remove_background(
    session: &mut EditSession,
    remover: &dyn BackgroundRemover,
) -> Result<Outcome, EditorError> {
    let matted = background::remove_background(session.current(), remover)?;
    session.replace_current(matted);
    Ok(Outcome::default())
}

fn crop_to_square(session: &mut EditSession) -> Outcome {
    let cropped = transform::crop_to_square(session.current());
    info!(side = cropped.width, "Cropped to square");
    session.replace_current(cropped);
    Outcome::default()
}

fn reset(session: &mut EditSession) -> Outcome {
    session.reset();
    info!("Edits reset");
    Outcome::default()
}

fn save(session: &mut EditSession, config: &EditorConfig) -> Result<Outcome, EditorError> {
    let bytes = encode_png(session.current())?;
    info!(size = bytes.len(), file = %config.export_file_name, "Image exported");
    Ok(Outcome {
        download: Some(Download {
            file_name: config.export_file_name.clone(),
            mime: EXPORT_MIME,
            byte_length: bytes.len(),
            bytes,
        }),
        ..Outcome::default()
    })
}

fn rate(session: &mut EditSession, stars: u8) -> Result<Outcome, EditorError> {
    let rating = session
        .feedback_mut()
        .select(stars)
        .ok_or(EditorError::InvalidRating(stars))?;
    info!(rating = rating.value(), "Rating selected");
    Ok(Outcome::default())
}

fn set_comment(session: &mut EditSession, comment: String) -> Outcome {
    session.feedback_mut().comment = comment;
    Outcome::default()
}

fn submit_feedback(session: &mut EditSession) -> Outcome {
    let feedback = session.feedback();
    info!(
        rating = feedback.rating.value(),
        comment_len = feedback.comment.len(),
        "Feedback submitted"
    );
    Outcome {
        notice: Some(Notice::Success(feedback.receipt())),
        ..Outcome::default()
    }
}
