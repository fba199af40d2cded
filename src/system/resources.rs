//! Hardware Resource Management
//!
//! Assigns the RP2350 pins and peripherals to the tasks that own them.
//! Every group is moved into exactly one task (or into the link setup), so no
//! resource is shared between tasks.
//!
//! # Resource Groups
//! - Link: UART0 receive side, connected to the remote link module
//! - Motor Driver: TB6612FNG dual motor driver pins and PWM slices
//! - Indicator: red status LED and the row of green LEDs
//! - Buzzer: PWM-driven piezo buzzer
//! - Run Finish Button: push button marking the end of a run

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// Serial command link, receive only
    link: LinkResources {
        uart: UART0,
        rx_pin: PIN_1,
    },
    /// TB6612FNG dual motor driver pins and PWM channels
    motor_driver: MotorDriverResources {
        standby_pin: PIN_22,
        // Motor drive PWM
        left_slice: PWM_SLICE6,
        left_pwm_pin: PIN_28,
        left_forward_pin: PIN_21,
        left_backward_pin: PIN_20,
        // Motor drive PWM
        right_slice: PWM_SLICE5,
        right_pwm_pin: PIN_27,
        right_forward_pin: PIN_19,
        right_backward_pin: PIN_18,
    },
    /// Red status LED and the green LED row, front to back
    indicator: IndicatorResources {
        red_pin: PIN_2,
        green_0: PIN_6,
        green_1: PIN_7,
        green_2: PIN_8,
        green_3: PIN_9,
        green_4: PIN_10,
        green_5: PIN_11,
        green_6: PIN_12,
        green_7: PIN_13,
    },
    /// Piezo buzzer on PWM slice 0, channel A
    buzzer: BuzzerResources {
        slice: PWM_SLICE0,
        pin: PIN_16,
    },
    /// Run finished push button, active low
    run_finish_button: RunFinishButtonResources {
        button_pin: PIN_17,
    },
}
