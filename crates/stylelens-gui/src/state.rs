/// Which entry tab is active. Both resolve to the same picker/drop mechanism;
/// the tab only changes the labels around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryTab {
    TakePhoto,
    #[default]
    Upload,
}

impl EntryTab {
    pub fn label(self) -> &'static str {
        match self {
            EntryTab::TakePhoto => "Take Photo",
            EntryTab::Upload => "Upload Photo",
        }
    }
}

/// The transient display handle for the selected image.
///
/// Dropping the `TextureHandle` frees the texture, so replacing or clearing
/// this state is what releases the preview resource.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
}

impl PreviewState {
    pub fn install(&mut self, texture: egui::TextureHandle, size: [usize; 2]) {
        self.texture = Some(texture);
        self.image_size = Some(size);
    }

    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
    }
}

/// View-only state that is not part of the upload flow itself.
#[derive(Default)]
pub struct UiState {
    /// Name of the staged file, shown in the status line.
    pub file_name: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Wall-clock time of the last successful analysis.
    pub last_elapsed: Option<std::time::Duration>,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
