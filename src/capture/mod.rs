//! Stack capture.
//!
//! `capture(skip)` records the current call stack:
//! 1. Walk up to `MAX_STACK_DEPTH` program counters into a scratch buffer
//! 2. Resolve them into frame records
//! 3. Copy the records into an owned `StackTrace`
//!
//! There is no failure path. An empty walk gives an empty trace and
//! deeper stacks are truncated.

pub mod walker;

pub use walker::{BacktraceWalker, StackWalker};

use crate::trace::{Frame, StackTrace};
use crate::utils::config::MAX_STACK_DEPTH;
use log::debug;

/// Capture the current call stack.
///
/// `skip` is the number of frames to omit, counted from the caller of
/// `capture`: with 0 the first frame is the direct caller, with 1 it is
/// the caller's caller, and so on.
///
/// # Example
/// ```
/// let stack = caller_trace::capture(0);
/// println!("{}", stack); // [lib.rs:12 main.rs:4 ...]
/// ```
#[inline(never)]
pub fn capture(skip: usize) -> StackTrace {
    let walker = BacktraceWalker::anchored_at(capture as usize);
    let stack = capture_with(&walker, skip);

    debug!("Captured {} frames (skip {})", stack.len(), skip);

    stack
}

/// Capture through an explicit walker.
///
/// `skip` is handed to the walker unchanged.
pub fn capture_with<W: StackWalker + ?Sized>(walker: &W, skip: usize) -> StackTrace {
    let mut pcs = [0usize; MAX_STACK_DEPTH];
    let n = walker.callers(skip, &mut pcs).min(pcs.len());

    if n == MAX_STACK_DEPTH {
        debug!(
            "Stack is at least {} frames deep, outer callers are dropped",
            MAX_STACK_DEPTH
        );
    }

    walker.resolve(&pcs[..n]).map(Frame::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RawFrame;
    use std::cell::Cell;

    /// Scripted stack: program counter `i` resolves to `frames[i]`
    struct ScriptedWalker {
        frames: Vec<RawFrame>,
        requested_skip: Cell<Option<usize>>,
    }

    impl ScriptedWalker {
        fn with_depth(depth: usize) -> Self {
            let frames = (0..depth)
                .map(|i| RawFrame::new(format!("example.com/sample/a.F{}", i), "a/a.go", i as u32 + 1))
                .collect();
            Self {
                frames,
                requested_skip: Cell::new(None),
            }
        }
    }

    impl StackWalker for ScriptedWalker {
        fn callers(&self, skip: usize, pcs: &mut [usize]) -> usize {
            self.requested_skip.set(Some(skip));
            let available = self.frames.len().saturating_sub(skip);
            let n = available.min(pcs.len());
            for (i, pc) in pcs.iter_mut().take(n).enumerate() {
                *pc = skip + i;
            }
            n
        }

        fn resolve<'a>(&'a self, pcs: &'a [usize]) -> Box<dyn Iterator<Item = RawFrame> + 'a> {
            Box::new(pcs.iter().map(|&pc| self.frames[pc].clone()))
        }
    }

    #[test]
    fn test_skip_is_forwarded() {
        let walker = ScriptedWalker::with_depth(5);
        let stack = capture_with(&walker, 2);

        assert_eq!(walker.requested_skip.get(), Some(2));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.first().map(|f| f.func_name()), Some("F2"));
    }

    #[test]
    fn test_deep_stack_is_truncated() {
        let walker = ScriptedWalker::with_depth(MAX_STACK_DEPTH + 10);
        let stack = capture_with(&walker, 0);

        assert_eq!(stack.len(), MAX_STACK_DEPTH);
        assert_eq!(stack.get(MAX_STACK_DEPTH - 1).map(|f| f.line()), Some(MAX_STACK_DEPTH as u32));
    }

    #[test]
    fn test_empty_walk() {
        let walker = ScriptedWalker::with_depth(0);
        assert!(capture_with(&walker, 0).is_empty());

        let walker = ScriptedWalker::with_depth(3);
        assert!(capture_with(&walker, 7).is_empty());
    }

    #[inline(never)]
    fn capture_here() -> (StackTrace, u32) {
        (capture(0), line!())
    }

    #[test]
    fn test_capture_starts_at_caller() {
        let (stack, line) = capture_here();
        let frame = stack.first().expect("stack must not be empty");

        assert_eq!(frame.func_name(), "capture_here");
        assert_eq!(frame.pkg_name(), "tests");
        assert!(frame.file().ends_with("mod.rs"), "file: {}", frame.file());
        assert_eq!(frame.line(), line);
    }
}
