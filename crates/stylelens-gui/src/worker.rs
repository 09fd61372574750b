use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use stylelens_core::client::ApiClient;
use stylelens_core::config::ClientConfig;
use stylelens_core::error::ANALYZE_FAILED_MESSAGE;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
///
/// All blocking work (file IO, image decode, the HTTP round-trip) happens
/// here so the UI event loop never stalls.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("stylelens-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => {
                handle_load_image(&path, &tx, &ctx);
            }
            WorkerCommand::LoadImageBytes { file_name, bytes } => {
                handle_load_bytes(file_name, bytes, &tx, &ctx);
            }
            WorkerCommand::Analyze {
                config,
                file_name,
                bytes,
            } => {
                handle_analyze(&config, &file_name, bytes, &tx, &ctx);
            }
        }
    }
}

fn handle_load_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to read {}: {e}", path.display()));
            return;
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "outfit".to_string());

    handle_load_bytes(file_name, bytes, tx, ctx);
}

fn handle_load_bytes(
    file_name: String,
    bytes: Vec<u8>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let preview = match image::load_from_memory(&bytes) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            send_error(tx, ctx, format!("Not a usable image ({file_name}): {e}"));
            return;
        }
    };

    send_log(
        tx,
        ctx,
        format!(
            "Selected {} ({}x{}, {} KB)",
            file_name,
            preview.width(),
            preview.height(),
            bytes.len() / 1024
        ),
    );
    send(
        tx,
        ctx,
        WorkerResult::ImageLoaded {
            file_name,
            bytes,
            preview,
        },
    );
}

fn handle_analyze(
    config: &ClientConfig,
    file_name: &str,
    bytes: Vec<u8>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    send_log(tx, ctx, format!("Analyzing {file_name}..."));

    let outcome = ApiClient::new(config).and_then(|client| client.analyze_outfit(file_name, bytes));

    match outcome {
        Ok(result) => {
            let elapsed = start.elapsed();
            send(tx, ctx, WorkerResult::AnalysisComplete { result, elapsed });
        }
        Err(e) => {
            tracing::warn!(error = %e, "outfit analysis failed");
            send_log(tx, ctx, format!("Analysis failed: {e}"));
            send(
                tx,
                ctx,
                WorkerResult::AnalysisFailed {
                    message: ANALYZE_FAILED_MESSAGE.to_string(),
                },
            );
        }
    }
}
