use std::path::PathBuf;
use std::time::Duration;

use stylelens_core::analysis::AnalysisResult;
use stylelens_core::config::ClientConfig;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read an image from disk, decode a preview, and stage it for submission.
    LoadImage { path: PathBuf },

    /// Decode already-in-memory image bytes (window drops without a path).
    LoadImageBytes { file_name: String, bytes: Vec<u8> },

    /// Submit the staged image to the analysis service. One attempt.
    Analyze {
        config: ClientConfig,
        file_name: String,
        bytes: Vec<u8>,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Image decoded: raw bytes for the wire plus pixels for the preview.
    ImageLoaded {
        file_name: String,
        bytes: Vec<u8>,
        preview: image::RgbaImage,
    },

    /// Analysis round-trip succeeded.
    AnalysisComplete {
        result: AnalysisResult,
        elapsed: Duration,
    },

    /// Analysis failed; `message` is the user-facing text, the cause has
    /// already been logged.
    AnalysisFailed { message: String },

    /// Config imported from a TOML file via the menu.
    ConfigImported { config: ClientConfig },

    Error { message: String },
    Log { message: String },
}
