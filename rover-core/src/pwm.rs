//! PWM slice timing

/// Divider and top value that make a PWM slice clocked at `clock_hz` run at
/// `freq_hz`. The divider is the smallest one that keeps the period within
/// the 16-bit counter.
pub const fn pwm_timing(clock_hz: u32, freq_hz: u32) -> (u8, u16) {
    let divider = ((clock_hz / freq_hz) / 65535 + 1) as u8;
    let period = (clock_hz / (freq_hz * divider as u32)) as u16 - 1;
    (divider, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCK_HZ: u32 = 150_000_000;

    #[test]
    fn motor_frequency_needs_no_division() {
        assert_eq!(pwm_timing(CLOCK_HZ, 10_000), (1, 14_999));
    }

    #[test]
    fn low_tones_raise_the_divider() {
        // 262 Hz would need a period of 572519 ticks undivided
        assert_eq!(pwm_timing(CLOCK_HZ, 262), (9, 63_612));
    }

    #[test]
    fn buzzer_range_stays_close_to_the_tone() {
        for freq in [262_u32, 440, 523, 1047] {
            let (divider, period) = pwm_timing(CLOCK_HZ, freq);
            let actual = CLOCK_HZ / (u32::from(divider) * (u32::from(period) + 1));
            assert!(actual.abs_diff(freq) <= 1, "{freq} Hz came out as {actual} Hz");
        }
    }
}
