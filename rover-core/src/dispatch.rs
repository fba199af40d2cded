//! Brain
//!
//! The single consumer of the receive queue. It turns command bytes into
//! movement and connection state and wakes the consumers of that state. It never
//! touches hardware, so each byte is handled in a short, bounded time.

use crate::command::{self, Command};
use crate::fmt::{debug, warn};
use crate::queue::CommandQueue;
use crate::state::{MovementState, SharedState};
use crate::Wake;

/// What dispatching one byte did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatched {
    /// CONNECTED handled, `first` when the flag went from false to true
    Connected { first: bool },
    /// Movement state set and the motor task woken
    Movement(MovementState),
    /// Reserved or unknown byte, nothing changed
    Ignored(u8),
}

/// Dispatcher from command bytes to shared state and consumer wakes
pub struct Brain<'a> {
    state: &'a SharedState,
    motor: &'a Wake,
    audio: &'a Wake,
}

impl<'a> Brain<'a> {
    pub const fn new(state: &'a SharedState, motor: &'a Wake, audio: &'a Wake) -> Self {
        Self {
            state,
            motor,
            audio,
        }
    }

    /// Handles one command byte
    pub fn dispatch(&self, byte: u8) -> Dispatched {
        self.state.set_last_received(byte);

        match Command::from_byte(byte) {
            Some(Command::Connected) => {
                let first = self.state.mark_connected();
                self.audio.signal(());
                self.state.set_last_received(command::RESERVED);
                Dispatched::Connected { first }
            }
            Some(Command::MoveForward) => self.set_movement(MovementState::Forward),
            Some(Command::MoveBack) => self.set_movement(MovementState::Backward),
            Some(Command::MoveLeft) => self.set_movement(MovementState::Left),
            Some(Command::MoveRight) => self.set_movement(MovementState::Right),
            Some(Command::MoveStop) => self.set_movement(MovementState::Stop),
            Some(Command::Reserved) | None => Dispatched::Ignored(byte),
        }
    }

    /// Dispatches every byte waiting in the queue, oldest first, and returns how
    /// many were handled
    pub fn drain<const N: usize>(&self, queue: &CommandQueue<N>) -> usize {
        let mut handled = 0;
        while let Ok(byte) = queue.dequeue() {
            let outcome = self.dispatch(byte);
            debug!("dispatched {=u8:#x}: {:?}", byte, outcome);
            handled += 1;
        }
        handled
    }

    /// Waits for the receive wake, then drains the queue.
    ///
    /// The wake is binary, so several received bytes may stand behind a single
    /// wake, and a wake may find its bytes already handled by the previous
    /// drain. The latter returns 0 and is harmless.
    pub async fn serve<const N: usize>(&self, queue: &CommandQueue<N>, wake: &Wake) -> usize {
        wake.wait().await;
        let handled = self.drain(queue);
        if handled == 0 {
            debug!("woken with nothing queued");
        }
        handled
    }

    /// Runs the brain forever
    pub async fn run<const N: usize>(&self, queue: &CommandQueue<N>, wake: &Wake) -> ! {
        let mut overflows = queue.overflow_count();
        loop {
            self.serve(queue, wake).await;

            let seen = queue.overflow_count();
            if seen != overflows {
                warn!(
                    "receive queue overflowed {=u32} time(s), stale commands dropped",
                    seen.wrapping_sub(overflows)
                );
                overflows = seen;
            }
        }
    }

    fn set_movement(&self, movement: MovementState) -> Dispatched {
        self.state.set_movement(movement);
        self.motor.signal(());
        Dispatched::Movement(movement)
    }
}
