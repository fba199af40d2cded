//! Serial rover firmware entry point
//!
//! Initializes the system, spawns the tasks on their priority tiers and only
//! then opens the command link.

#![no_std]
#![no_main]

use crate::task::{
    audio::audio, brain::brain, led_indicate::led_indicate, motor_control::motor_control,
    run_finish_button::run_finish_button,
};
use defmt::info;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::InterruptExt;
use system::config::BRAIN_PRIORITY;
use system::link;
use system::resources::{
    AssignedResources, BuzzerResources, IndicatorResources, LinkResources, MotorDriverResources,
    RunFinishButtonResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Executor for the brain, preempting the thread-mode tasks
static EXECUTOR_BRAIN: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_BRAIN.on_interrupt()
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());
    info!("Serial rover starting");

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    // The brain gets its own, higher priority executor
    interrupt::SWI_IRQ_1.set_priority(BRAIN_PRIORITY);
    let brain_spawner = EXECUTOR_BRAIN.start(interrupt::SWI_IRQ_1);
    brain_spawner.spawn(brain()).unwrap();

    // Consumers of the shared state on the thread-mode executor
    spawner.spawn(motor_control(r.motor_driver)).unwrap();
    spawner.spawn(led_indicate(spawner, r.indicator)).unwrap();
    spawner.spawn(audio(r.buzzer)).unwrap();
    spawner.spawn(run_finish_button(r.run_finish_button)).unwrap();

    // Finally open the link, every consumer is in place now
    link::init(r.link);
}
