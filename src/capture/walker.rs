//! Stack walking collaborators.
//!
//! Capture never walks the stack itself. It asks a [`StackWalker`] for
//! opaque program counters and then for the records behind them, which
//! keeps the rest of the crate independent of the unwinder and lets tests
//! substitute a scripted stack.

use crate::parser::qualify;
use crate::trace::RawFrame;
use log::{trace, warn};
use std::ffi::c_void;

/// Host stack-walking facility
pub trait StackWalker {
    /// Fill `pcs` with program counters of the live stack, innermost first,
    /// after omitting `skip` frames from the walker's origin.
    ///
    /// Returns the number of entries written (at most `pcs.len()`).
    fn callers(&self, skip: usize, pcs: &mut [usize]) -> usize;

    /// Resolve program counters into frame records, innermost first.
    ///
    /// Records are produced lazily; exhausting the iterator means no more
    /// frames remain. One counter may yield several records when calls
    /// were inlined.
    fn resolve<'a>(&'a self, pcs: &'a [usize]) -> Box<dyn Iterator<Item = RawFrame> + 'a>;
}

/// Walker backed by the `backtrace` crate.
///
/// The origin is the caller of the anchor function: every frame up to and
/// including the one whose symbol address equals the anchor is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacktraceWalker {
    anchor: usize,
}

impl BacktraceWalker {
    /// `anchor` is a function address, e.g. `my_capture_fn as usize`.
    /// The anchor function must be `#[inline(never)]`.
    pub fn anchored_at(anchor: usize) -> Self {
        Self { anchor }
    }
}

impl StackWalker for BacktraceWalker {
    fn callers(&self, skip: usize, pcs: &mut [usize]) -> usize {
        let mut written = 0;
        let mut to_skip = skip;
        let mut anchored = false;

        backtrace::trace(|frame| {
            if !anchored && frame.symbol_address() as usize == self.anchor {
                // Clear the walker's own frames and start over at the call site
                anchored = true;
                written = 0;
                to_skip = skip;
                return true;
            }

            if to_skip > 0 {
                to_skip -= 1;
                return true;
            }

            if written < pcs.len() {
                pcs[written] = frame.ip() as usize;
                written += 1;
            }

            // Keep looking for the anchor even once the buffer is full
            !(anchored && written == pcs.len())
        });

        if !anchored {
            warn!(
                "Capture anchor {:#x} not found on the stack, frames start at the unwinder",
                self.anchor
            );
        }

        written
    }

    fn resolve<'a>(&'a self, pcs: &'a [usize]) -> Box<dyn Iterator<Item = RawFrame> + 'a> {
        Box::new(pcs.iter().flat_map(|&pc| resolve_pc(pc)))
    }
}

/// Resolve one program counter, innermost inlined call first.
///
/// A counter without symbol information still yields one empty record so
/// the frame count matches the walk.
fn resolve_pc(pc: usize) -> Vec<RawFrame> {
    let mut frames = Vec::new();

    backtrace::resolve(pc as *mut c_void, |symbol| {
        // `{:#}` omits the trailing hash of legacy mangled names
        let function = symbol
            .name()
            .map(|name| qualify(&format!("{:#}", name)))
            .unwrap_or_default();
        let file = symbol
            .filename()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        let line = symbol.lineno().unwrap_or(0);

        trace!("Resolved {:#x} to {} at {}:{}", pc, function, file, line);
        frames.push(RawFrame { function, file, line });
    });

    if frames.is_empty() {
        trace!("No symbol information for {:#x}", pc);
        frames.push(RawFrame::default());
    }

    frames
}
