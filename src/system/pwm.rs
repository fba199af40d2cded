//! PWM timing shared by the motor driver and the buzzer

/// Divider and top value for a PWM slice running at `freq_hz`
pub fn pwm_timing(freq_hz: u32) -> (u8, u16) {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz
    rover_core::pwm::pwm_timing(clock_freq_hz, freq_hz)
}
