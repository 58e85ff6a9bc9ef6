//! Execution-trace capture for error values.
//!
//! A trace is captured exactly once, when an error value is built, and is
//! stored as an already-rendered string:
//!
//! ```text
//! VError: top: mid: root cause
//!     at my_app::load_config (./src/config.rs:42:17)
//!     at my_app::main (./src/main.rs:9:5)
//! ```
//!
//! Frames belonging to the construction machinery are trimmed: everything up
//! to and including the outermost frame whose symbol names the boundary is
//! dropped. Each variant uses its fully qualified type path as the boundary, and callers
//! wrapping construction in helpers can move the boundary outward with
//! [`Options::constructor_opt`](crate::types::Options::constructor_opt).
//!
//! Whether frames are captured at all is controlled process-wide by
//! [`set_capture_mode`].

use std::backtrace::{Backtrace, BacktraceStatus};
use std::sync::atomic::{AtomicU8, Ordering};

/// Policy for capturing stack frames when error values are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// Only the `name: message` header is recorded.
    Disabled,
    /// Frames are captured when `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` enable it.
    #[default]
    Environment,
    /// Frames are always captured, regardless of environment settings.
    Always,
}

impl CaptureMode {
    const fn to_u8(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Environment => 1,
            Self::Always => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Disabled,
            2 => Self::Always,
            _ => Self::Environment,
        }
    }
}

static CAPTURE_MODE: AtomicU8 = AtomicU8::new(CaptureMode::Environment.to_u8());

/// Sets the process-wide capture policy for subsequently built errors.
pub fn set_capture_mode(mode: CaptureMode) {
    CAPTURE_MODE.store(mode.to_u8(), Ordering::Relaxed);
}

/// Returns the current process-wide capture policy.
pub fn capture_mode() -> CaptureMode {
    CaptureMode::from_u8(CAPTURE_MODE.load(Ordering::Relaxed))
}

/// One rendered stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub symbol: String,
    pub location: Option<String>,
}

impl Frame {
    /// Whether `boundary` appears in the symbol as whole path segments.
    ///
    /// `VError` matches `app::VError::new` but not `app::RpcVError::new` or
    /// `app::VErrors::new`.
    fn names(&self, boundary: &str) -> bool {
        let boundary = boundary.trim_end_matches("::");
        if boundary.is_empty() {
            return false;
        }
        // v0 mangling renders inherent methods as `<path::Type>::method`.
        let plain: String = self.symbol.chars().filter(|c| !matches!(c, '<' | '>')).collect();
        plain.match_indices(boundary).any(|(start, matched)| {
            let end = start + matched.len();
            (start == 0 || plain[..start].ends_with("::"))
                && (end == plain.len() || plain[end..].starts_with("::"))
        })
    }

    fn is_crate_internal(&self) -> bool {
        self.symbol.trim_start_matches('<').starts_with("causal_error::")
    }

    fn is_construction_machinery(&self) -> bool {
        self.symbol.contains("causal_error::types::")
    }

    fn is_capture_machinery(&self) -> bool {
        self.symbol.starts_with("std::backtrace")
            || self.symbol.contains("causal_error::types::trace::")
    }
}

/// Renders the header line used at the top of every trace.
pub fn header(name: &str, message: &str) -> String {
    if message.is_empty() {
        name.to_owned()
    } else {
        format!("{name}: {message}")
    }
}

/// Captures the current stack under `header`, trimmed at `boundary`.
pub fn capture(header: String, boundary: &str) -> String {
    let backtrace = match capture_mode() {
        CaptureMode::Disabled => return header,
        CaptureMode::Environment => Backtrace::capture(),
        CaptureMode::Always => Backtrace::force_capture(),
    };
    if backtrace.status() != BacktraceStatus::Captured {
        return header;
    }

    let frames = trim(parse_frames(&backtrace.to_string()), boundary);
    render(header, &frames)
}

/// Splits std's backtrace rendering into frames.
///
/// Frame lines look like `   3: path::to::function`, optionally followed by
/// an indented `at file:line:col` line.
pub fn parse_frames(rendered: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for line in rendered.lines() {
        let line = line.trim_start();
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                frame.location.get_or_insert_with(|| location.trim().to_owned());
            }
            continue;
        }
        let Some((index, symbol)) = line.split_once(": ") else { continue };
        if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
            frames.push(Frame { symbol: symbol.trim().to_owned(), location: None });
        }
    }
    frames
}

/// Drops capture frames and everything up to the outermost `boundary` frame.
///
/// `boundary` is a path such as `causal_error::types::verror::VError` or a
/// function name; it only matches whole path segments. When no frame names the
/// boundary (inlining can erase it), trimming falls back to the outermost
/// frame inside this crate's value types. Frames of this crate directly above
/// the cut (such as `chain::error_from_list`) are dropped as well.
pub fn trim(frames: Vec<Frame>, boundary: &str) -> Vec<Frame> {
    let cut = frames
        .iter()
        .rposition(|frame| frame.names(boundary))
        .or_else(|| frames.iter().rposition(Frame::is_construction_machinery));
    let Some(cut) = cut else {
        return frames.into_iter().filter(|frame| !frame.is_capture_machinery()).collect();
    };
    frames.into_iter().skip(cut + 1).skip_while(Frame::is_crate_internal).collect()
}

/// Renders `frames` beneath `header`.
pub fn render(header: String, frames: &[Frame]) -> String {
    let mut out = header;
    for frame in frames {
        out.push_str("\n    at ");
        out.push_str(&frame.symbol);
        if let Some(location) = &frame.location {
            out.push_str(" (");
            out.push_str(location);
            out.push(')');
        }
    }
    out
}
