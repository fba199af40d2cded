//! LED Indicator Tasks
//!
//! Visual feedback on the link and the movement state.
//!
//! Before the link is up a single supervisor task alternates the red LED and the
//! green row. Once the connection flag is set it blinks the green row twice,
//! hands the pins to two connected-phase tasks, one per indicator, and parks
//! for the rest of the run. The connected-phase tasks poll the movement state at
//! their own pace:
//! - Red: slow blink while moving, fast blink while stopped
//! - Green: all on while stopped, a running light while moving

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use rover_core::config::{CONNECT_BLINK, CONNECT_BLINK_COUNT, GREEN_LED_COUNT, SEARCH_BLINK};
use rover_core::indicator::{red_half_period, GreenPattern, IndicatorPhase, RunningLight};

use crate::system::resources::IndicatorResources;
use crate::system::state::ROBOT_STATE;

type GreenRow = [Output<'static>; GREEN_LED_COUNT];

/// Searching-phase supervisor, started from main
#[embassy_executor::task]
pub async fn led_indicate(spawner: Spawner, r: IndicatorResources) {
    let mut red = Output::new(r.red_pin, Level::Low);
    let mut green: GreenRow = [
        Output::new(r.green_0, Level::Low),
        Output::new(r.green_1, Level::Low),
        Output::new(r.green_2, Level::Low),
        Output::new(r.green_3, Level::Low),
        Output::new(r.green_4, Level::Low),
        Output::new(r.green_5, Level::Low),
        Output::new(r.green_6, Level::Low),
        Output::new(r.green_7, Level::Low),
    ];

    info!("Indicators searching for link");
    let mut phase = IndicatorPhase::Searching;
    let mut red_turn = true;
    while !phase.advance(ROBOT_STATE.is_connected()) {
        red.set_level(Level::from(red_turn));
        set_row(&mut green, !red_turn);
        red_turn = !red_turn;
        Timer::after(SEARCH_BLINK).await;
    }

    info!("Link up, starting connected indicators");
    red.set_low();
    for _ in 0..CONNECT_BLINK_COUNT {
        set_row(&mut green, false);
        Timer::after(CONNECT_BLINK).await;
        set_row(&mut green, true);
        Timer::after(CONNECT_BLINK).await;
    }

    if let Err(e) = spawner.spawn(red_indicate(red)) {
        error!("red indicator not started: {}", e);
    }
    if let Err(e) = spawner.spawn(green_indicate(green)) {
        error!("green indicator not started: {}", e);
    }

    // the connected phase is owned by the two tasks above from now on
    core::future::pending::<()>().await;
}

#[embassy_executor::task]
async fn red_indicate(mut red: Output<'static>) {
    loop {
        let half_period = red_half_period(ROBOT_STATE.movement());
        red.set_high();
        Timer::after(half_period).await;
        red.set_low();
        Timer::after(half_period).await;
    }
}

#[embassy_executor::task]
async fn green_indicate(mut green: GreenRow) {
    let mut light = RunningLight::<GREEN_LED_COUNT>::new();

    loop {
        let pattern = GreenPattern::for_movement(ROBOT_STATE.movement());
        match pattern {
            GreenPattern::Steady => {
                light.reset();
                set_row(&mut green, true);
            }
            GreenPattern::Running => {
                let lit = light.step();
                for (index, led) in green.iter_mut().enumerate() {
                    led.set_level(Level::from(index == lit));
                }
            }
        }
        Timer::after(pattern.frame()).await;
    }
}

fn set_row(row: &mut GreenRow, on: bool) {
    for led in row.iter_mut() {
        led.set_level(Level::from(on));
    }
}
