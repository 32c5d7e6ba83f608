use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use netscan_core::scanner::batch::{BatchProgress, ProgressFn};

const TIP_DURATION: Duration = Duration::from_secs(3);
const MESSAGE_READ_TIME: Duration = Duration::from_secs(4);
const MIN_TIP_VISIBILITY: Duration = Duration::from_millis(750);
const TICK_RATE: Duration = Duration::from_millis(100);
const TIPS: &[&str] = &[
    "Press Ctrl+C to abort",
    "--profile fast shortens every banner read",
    "Fewer ports finish sooner",
];

pub struct SpinnerHandle {
    pub spinner: ProgressBar,
    tx: Mutex<Option<Sender<String>>>,
}

impl SpinnerHandle {
    pub fn send_to_queue(&self, message: String) {
        let tx = self.tx.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tx) = tx.as_ref() {
            let _ = tx.send(message);
        }
    }

    /// Starts ticking and spawns the message pump. Calling it twice is a no-op.
    pub fn start(&self, msg: String) {
        let mut tx = self.tx.lock().unwrap_or_else(PoisonError::into_inner);
        if tx.is_some() {
            return;
        }

        let (sender, rx) = mpsc::channel::<String>();
        *tx = Some(sender);

        self.spinner.set_message(msg);
        self.spinner.enable_steady_tick(TICK_RATE);

        let pb = self.spinner.clone();
        thread::spawn(move || pump_messages(pb, rx));
    }

    pub fn finish_and_clear(&self) {
        // dropping the sender ends the pump thread
        self.tx.lock().unwrap_or_else(PoisonError::into_inner).take();
        self.spinner.finish_and_clear();
    }
}

static SPINNER: OnceLock<SpinnerHandle> = OnceLock::new();

pub fn get_spinner() -> &'static SpinnerHandle {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> SpinnerHandle {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);
    pb.set_style(style);

    SpinnerHandle {
        spinner: pb,
        tx: Mutex::new(None),
    }
}

/// Shows the newest progress message, and rotates tips while nothing new
/// arrives.
fn pump_messages(pb: ProgressBar, rx: mpsc::Receiver<String>) {
    let mut tip_index = 0;
    let mut next_action_time = Instant::now() + TIP_DURATION;
    let mut is_showing_tip = false;
    let mut last_tip_time = Instant::now();

    loop {
        if pb.is_finished() {
            break;
        }

        let wait_time = next_action_time.saturating_duration_since(Instant::now());

        match rx.recv_timeout(wait_time) {
            Ok(mut msg) => {
                if is_showing_tip {
                    let elapsed = last_tip_time.elapsed();
                    if elapsed < MIN_TIP_VISIBILITY {
                        thread::sleep(MIN_TIP_VISIBILITY - elapsed);
                    }
                    is_showing_tip = false;
                }
                while let Ok(newer_msg) = rx.try_recv() {
                    msg = newer_msg;
                }
                pb.set_message(msg);
                next_action_time = Instant::now() + MESSAGE_READ_TIME;
            }
            Err(RecvTimeoutError::Timeout) => {
                let tip = TIPS[tip_index % TIPS.len()];
                pb.set_message(format!("{}", tip.italic().white()));

                tip_index += 1;
                is_showing_tip = true;
                last_tip_time = Instant::now();
                next_action_time = Instant::now() + TIP_DURATION;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Progress callback for the scanner that feeds the spinner.
pub fn batch_reporter(what: &'static str) -> ProgressFn {
    Arc::new(move |progress: BatchProgress| {
        get_spinner().send_to_queue(format!(
            "{what}: batch {}/{} done, {}/{} processed, {} found",
            progress.batch,
            progress.total_batches,
            progress.processed,
            progress.total_items,
            progress.found.to_string().green().bold()
        ));
    })
}

/// Routes log output around the spinner so lines never tear its frame.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        get_spinner()
            .spinner
            .suspend(|| io::stdout().lock().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
