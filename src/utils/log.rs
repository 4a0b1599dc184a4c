//! Logging with colored module prefixes and build progress bars.
//!
//! ```ignore
//! log!("build"; "rendering {} pages", count);
//!
//! let progress = ProgressBars::new(&[("pages", 14), ("assets", 3)]);
//! progress.inc(0);
//! progress.finish();
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::{
        Mutex, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Minimum progress bar width in characters
const MIN_BAR_WIDTH: usize = 10;
/// Maximum progress bar width in characters
const MAX_BAR_WIDTH: usize = 40;

/// Display length of "[module] " for a module name.
#[inline]
const fn prefix_len(module_len: usize) -> usize {
    // brackets + trailing space
    module_len + 3
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120)) as usize
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix, truncated to terminal width.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let max_msg_len = terminal_width().saturating_sub(prefix_len(module.len()));
    let message = truncate_str(message, max_msg_len);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" => prefix.bright_blue().bold(),
        "error" | "warn" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes, respecting UTF-8
/// character boundaries.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Progress Bars
// ============================================================================

/// Multiple progress bars on separate terminal lines, updated in place via
/// ANSI cursor control. Bars are indexed by creation order.
///
/// A mutex synchronizes terminal updates from rayon worker threads.
pub struct ProgressBars {
    bars: Vec<ProgressBar>,
    lock: Mutex<()>,
}

struct ProgressBar {
    /// Colored "[module]" prefix
    prefix: ColoredString,
    prefix_len: usize,
    total: usize,
    current: AtomicUsize,
    /// Row index within the progress area (0 = first bar)
    row: usize,
}

impl ProgressBars {
    /// Create one bar per `(module_name, total_count)` entry.
    pub fn new(modules: &[(&'static str, usize)]) -> Self {
        // Reserve terminal lines for the progress area
        let mut stdout = stdout().lock();
        for _ in 0..modules.len() {
            writeln!(stdout).ok();
        }
        stdout.flush().ok();

        let bars = modules
            .iter()
            .enumerate()
            .map(|(row, (module, total))| ProgressBar {
                prefix: colorize_prefix(module),
                prefix_len: prefix_len(module.len()),
                total: *total,
                current: AtomicUsize::new(0),
                row,
            })
            .collect();

        Self {
            bars,
            lock: Mutex::new(()),
        }
    }

    /// Increment progress for the bar at the given index.
    ///
    /// Thread-safe: can be called from multiple threads simultaneously.
    #[inline]
    pub fn inc(&self, index: usize) {
        if let Some(bar) = self.bars.get(index) {
            let current = bar.current.fetch_add(1, Ordering::Relaxed) + 1;
            self.display(bar, current);
        }
    }

    /// Render a progress bar at its designated row.
    fn display(&self, bar: &ProgressBar, current: usize) {
        let _guard = self.lock.lock().ok();

        let progress_text = format!("{}/{}", current, bar.total);
        // prefix + " []" wrapper + " " before the count
        let overhead = bar.prefix_len + 4 + progress_text.len();
        let available = terminal_width().saturating_sub(overhead);
        let bar_width = available.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);

        let filled = if bar.total > 0 {
            (current * bar_width) / bar.total
        } else {
            0
        };
        let rendered: String = "█".repeat(filled) + &"░".repeat(bar_width.saturating_sub(filled));

        let mut stdout = stdout().lock();
        let lines_up = self.bars.len() - bar.row;
        execute!(stdout, cursor::MoveUp(lines_up as u16)).ok();
        execute!(stdout, Clear(ClearType::CurrentLine)).ok();
        write!(stdout, "{} [{}] {}", bar.prefix, rendered, progress_text).ok();
        execute!(stdout, cursor::MoveDown(lines_up as u16)).ok();
        write!(stdout, "\r").ok();
        stdout.flush().ok();
    }

    /// Clear the progress area when processing is complete.
    pub fn finish(&self) {
        let _guard = self.lock.lock().ok();

        let mut stdout = stdout().lock();
        execute!(stdout, cursor::MoveUp(self.bars.len() as u16)).ok();
        for _ in &self.bars {
            execute!(stdout, Clear(ClearType::CurrentLine)).ok();
            execute!(stdout, cursor::MoveDown(1)).ok();
        }
        execute!(stdout, cursor::MoveUp(self.bars.len() as u16)).ok();
        stdout.flush().ok();
    }
}
