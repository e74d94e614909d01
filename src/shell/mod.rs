//! Presentation shell state
//!
//! `ShellState` holds everything the graphical form shows: the three input
//! fields, the log pane, the progress bar and the completion dialog. A split
//! runs on one background worker thread and reports back over a channel;
//! only [`ShellState::poll`] mutates the display state, so the form can be
//! driven headless in tests.

#[cfg(feature = "gui")]
pub mod gui;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, error, info};

use crate::app::SplitInteractor;
use crate::domain::model::{ClipRequest, ProgressState, SplitReport};
use crate::error::{SplitError, SplitResult};
use crate::ports::{EventSink, SplitEvent};
use crate::utils::time::timestamped;

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Video splitting complete!";

/// Messages sent from the split worker to the shell
#[derive(Debug)]
pub enum ShellMessage {
    Event(SplitEvent),
    Done(SplitResult<SplitReport>),
}

/// Forwards split events into the shell channel
struct ChannelSink {
    sender: Sender<ShellMessage>,
}

impl EventSink for ChannelSink {
    fn emit(&self, event: SplitEvent) {
        // The receiver only goes away with the shell itself.
        let _ = self.sender.send(ShellMessage::Event(event));
    }
}

struct SplitJob {
    receiver: Receiver<ShellMessage>,
    handle: Option<JoinHandle<()>>,
}

/// Modal confirmation shown after a successful split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

/// Application state behind the splitter form
pub struct ShellState {
    pub source_path: String,
    pub output_dir: String,
    pub duration: String,
    log_lines: Vec<String>,
    log_enabled: bool,
    progress: ProgressState,
    dialog: Option<Dialog>,
    last_error: Option<String>,
    last_report: Option<SplitReport>,
    job: Option<SplitJob>,
    interactor: Arc<SplitInteractor>,
}

impl ShellState {
    pub fn new(interactor: Arc<SplitInteractor>) -> Self {
        Self {
            source_path: String::new(),
            output_dir: String::new(),
            duration: String::new(),
            log_lines: Vec::new(),
            log_enabled: false,
            progress: ProgressState::new(0),
            dialog: None,
            last_error: None,
            last_report: None,
            job: None,
            interactor,
        }
    }

    /// Fill the source field from a file picker; `None` means cancelled
    pub fn browse_input(&mut self, picked: Option<PathBuf>) {
        if let Some(path) = picked {
            self.source_path = path.display().to_string();
        }
    }

    /// Fill the output field from a directory picker; `None` means cancelled
    pub fn browse_output(&mut self, picked: Option<PathBuf>) {
        if let Some(path) = picked {
            self.output_dir = path.display().to_string();
        }
    }

    /// Start a split from the current field values.
    ///
    /// A duration that is not a positive integer is rejected before anything
    /// else changes. Otherwise the log is cleared and enabled, progress is
    /// reset and the split is handed to a worker thread.
    pub fn start_split(&mut self) -> SplitResult<()> {
        if self.is_busy() {
            debug!("Split already running, ignoring trigger");
            return Ok(());
        }

        let request = ClipRequest::from_fields(&self.source_path, &self.output_dir, &self.duration)?;

        self.log_lines.clear();
        self.log_enabled = true;
        self.progress = ProgressState::new(0);
        self.dialog = None;
        self.last_error = None;
        self.last_report = None;

        let (sender, receiver) = mpsc::channel();
        let interactor = Arc::clone(&self.interactor);
        let handle = thread::Builder::new()
            .name("split-worker".to_string())
            .spawn(move || {
                let sink = ChannelSink {
                    sender: sender.clone(),
                };
                let result = interactor.execute(&request, &sink);
                let _ = sender.send(ShellMessage::Done(result));
            });

        let handle = match handle {
            Ok(handle) => handle,
            Err(e) => {
                self.finish(Err(SplitError::Io(e)));
                return Ok(());
            }
        };

        info!("Split job started");
        self.job = Some(SplitJob {
            receiver,
            handle: Some(handle),
        });
        Ok(())
    }

    /// Drain pending worker messages without blocking.
    ///
    /// Returns true when the display state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            let message = match &self.job {
                Some(job) => job.receiver.try_recv(),
                None => return changed,
            };
            match message {
                Ok(message) => {
                    changed = true;
                    self.handle_message(message);
                }
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    self.finish(Err(worker_lost()));
                    return true;
                }
            }
        }
    }

    /// Block until the running job, if any, has finished
    pub fn wait_for_job(&mut self) {
        while let Some(job) = &self.job {
            match job.receiver.recv() {
                Ok(message) => self.handle_message(message),
                Err(_) => self.finish(Err(worker_lost())),
            }
        }
    }

    fn handle_message(&mut self, message: ShellMessage) {
        match message {
            ShellMessage::Event(event) => self.apply_event(event),
            ShellMessage::Done(result) => self.finish(result),
        }
    }

    fn apply_event(&mut self, event: SplitEvent) {
        match event {
            SplitEvent::Started { total, .. } => {
                self.progress = ProgressState::new(total);
            }
            SplitEvent::Log { message, .. } => {
                self.append_log(&message);
            }
            SplitEvent::ClipStarted { path, .. } => {
                self.append_log(&format!("Building video {}", path.display()));
            }
            SplitEvent::ClipWritten { progress, .. } => {
                self.progress = progress;
            }
        }
    }

    fn finish(&mut self, result: SplitResult<SplitReport>) {
        if let Some(mut job) = self.job.take() {
            if let Some(handle) = job.handle.take() {
                if handle.join().is_err() {
                    error!("Split worker panicked");
                }
            }
        }

        match result {
            Ok(report) => {
                info!(
                    clips = report.clip_count(),
                    complete = self.progress.is_complete(),
                    "Split finished"
                );
                self.dialog = Some(Dialog {
                    title: SUCCESS_TITLE.to_string(),
                    message: SUCCESS_MESSAGE.to_string(),
                });
                self.last_report = Some(report);
            }
            Err(e) => {
                error!(kind = ?e.kind(), "Split failed: {}", e);
                self.append_log(&format!("Error: {}", e));
                self.last_error = Some(e.to_string());
            }
        }
        self.log_enabled = false;
    }

    fn append_log(&mut self, message: &str) {
        self.log_lines.push(timestamped(message));
    }

    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log_lines
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_report(&self) -> Option<&SplitReport> {
        self.last_report.as_ref()
    }
}

fn worker_lost() -> SplitError {
    SplitError::MediaTool {
        message: "Split worker stopped unexpectedly".to_string(),
    }
}
