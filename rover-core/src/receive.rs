//! Receive path of the serial link
//!
//! Producer side of the command queue, called from the UART receive interrupt
//! with the byte it just read. A full queue means the brain has fallen behind;
//! the buffered commands are stale by then, so they are dropped in favour of the
//! newest byte instead of dropping the newest byte or stalling the link. The
//! loss is silent by design.

use crate::queue::{CommandQueue, Enqueued};
use crate::Wake;

/// Stores one received byte and wakes the brain.
///
/// The wake is binary, so signaling it on every byte, including right after an
/// overflow reset, never makes the brain handle a byte twice.
pub fn on_byte<const N: usize>(queue: &CommandQueue<N>, brain: &Wake, byte: u8) -> Enqueued {
    let outcome = queue.enqueue_or_reset(byte);
    brain.signal(());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_wakes_the_brain() {
        let queue = CommandQueue::<2>::new();
        let wake = Wake::new();

        assert_eq!(on_byte(&queue, &wake, 1), Enqueued::Queued);
        assert!(wake.try_take().is_some());

        on_byte(&queue, &wake, 2);
        assert_eq!(on_byte(&queue, &wake, 3), Enqueued::AfterOverflow);
        assert!(wake.try_take().is_some());
        assert!(wake.try_take().is_none());
        assert_eq!(queue.size(), 1);
    }
}
