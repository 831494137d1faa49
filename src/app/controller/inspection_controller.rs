use std::path::PathBuf;

use image::RgbImage;
use tracing::{error, info, warn};

use crate::app::session::{Session, SessionState};
use crate::config::PreviewSettings;
use crate::pipeline::services::image::render_preview;
use crate::pipeline::{ColorLabel, Inspector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Error,
}

/// A blocking message for the operator: title plus free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    Selection(PathBuf),
    Inspection { path: PathBuf, label: ColorLabel },
}

/// The single image shown in the window. `revision` increases with every replacement.
#[derive(Debug, Clone)]
pub struct Preview {
    pub image: RgbImage,
    pub source: PreviewSource,
    pub revision: u64,
}

/// Shell logic behind the window: owns the session and the current preview and turns
/// operator actions into dialogs.
pub struct InspectionController<I: Inspector> {
    inspector: I,
    session: Session,
    preview: Option<Preview>,
    preview_size: (u32, u32),
    revision: u64,
}

impl<I: Inspector> InspectionController<I> {
    pub fn new(inspector: I, preview: &PreviewSettings) -> Self {
        Self {
            inspector,
            session: Session::new(),
            preview: None,
            preview_size: (preview.width, preview.height),
            revision: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Handles the file chooser's answer. `None` means the chooser was cancelled.
    pub fn select_image(&mut self, choice: Option<PathBuf>) -> Option<Dialog> {
        let path = choice?;
        match self.inspector.load(&path) {
            Ok(image) => {
                info!("Image selected: {}", path.display());
                self.session.select(path.clone());
                let message = format!("Image selected: {}", path.display());
                self.replace_preview(&image, PreviewSource::Selection(path));
                Some(Dialog::info("Image Selected", message))
            }
            Err(e) => {
                error!("Failed to load selected image: {}", e);
                Some(Dialog::error(e.to_string()))
            }
        }
    }

    pub fn choose_color(&mut self, label: ColorLabel) -> Dialog {
        let path = match self.session.selected() {
            Ok(path) => path.to_path_buf(),
            Err(e) => {
                warn!("{} requested before any image was selected", label);
                return Dialog::error(e.to_string());
            }
        };

        match self.inspector.inspect(&path, label) {
            Ok(inspection) => {
                let dialog = Dialog::info("Result", inspection.message());
                self.replace_preview(
                    &inspection.crop,
                    PreviewSource::Inspection { path, label },
                );
                dialog
            }
            Err(e) => {
                error!("Inspection for {} failed: {}", label, e);
                Dialog::error(e.to_string())
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    fn replace_preview(&mut self, image: &RgbImage, source: PreviewSource) {
        let (width, height) = self.preview_size;
        self.revision += 1;
        self.preview = Some(Preview {
            image: render_preview(image, width, height),
            source,
            revision: self.revision,
        });
    }
}
