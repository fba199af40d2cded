//! Serial Command Link
//!
//! Receive side of the link to the remote controller. The UART is configured
//! once through the HAL, then its receive FIFO is switched off so that every
//! byte raises its own interrupt, and the interrupt handler below becomes the
//! only producer into the command queue.

use embassy_rp::interrupt::InterruptExt;
use embassy_rp::uart::{self, UartRx};
use embassy_rp::{interrupt, pac};
use rover_core::config::COMMAND_QUEUE_CAPACITY;
use rover_core::queue::CommandQueue;
use rover_core::receive;

use crate::system::config::{LINK_BAUD_RATE, LINK_IRQ_PRIORITY};
use crate::system::resources::LinkResources;
use crate::system::wake::BRAIN_WAKE;

/// Received command bytes waiting for the brain
pub static RX_QUEUE: CommandQueue<COMMAND_QUEUE_CAPACITY> = CommandQueue::new();

/// Configures UART0 for the link and starts taking receive interrupts.
///
/// Call this after the brain is spawned, so the first byte already has a
/// consumer.
pub fn init(r: LinkResources) {
    let mut config = uart::Config::default();
    config.baudrate = LINK_BAUD_RATE;
    let rx = UartRx::new_blocking(r.uart, r.rx_pin, config);
    // Register access moves to the interrupt handler, the driver must not
    // reset the pin on drop.
    core::mem::forget(rx);

    let regs = pac::UART0;
    regs.uartcr().modify(|w| w.set_uarten(false));
    regs.uartlcr_h().modify(|w| w.set_fen(false));
    regs.uartcr().modify(|w| w.set_uarten(true));
    regs.uartimsc().write(|w| w.set_rxim(true));

    RX_QUEUE.init();

    interrupt::UART0_IRQ.set_priority(LINK_IRQ_PRIORITY);
    // Safety: the handler only touches the queue and the brain wake, both of
    // which are interrupt-safe
    unsafe { interrupt::UART0_IRQ.enable() };
}

#[interrupt]
fn UART0_IRQ() {
    let regs = pac::UART0;
    if regs.uartfr().read().rxfe() {
        return;
    }

    // Reading the data register clears the receive interrupt, so this happens
    // exactly once per interrupt, also when the queue turns out to be full.
    let byte = regs.uartdr().read().data();
    receive::on_byte(&RX_QUEUE, &BRAIN_WAKE, byte);
}
