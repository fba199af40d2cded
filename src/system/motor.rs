//! Track drive on the TB6612FNG motor driver
//!
//! Motor A is the left track, motor B the right track. Turns are executed in
//! place by running the tracks in opposite directions.

use defmt::Format;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::{self, Pwm};
use rover_core::motion::Drive;
use tb6612fng::{DriveCommand, Motor, Tb6612fng};

use crate::system::config::MOTOR_PWM_FREQ_HZ;
use crate::system::pwm::pwm_timing;
use crate::system::resources::MotorDriverResources;

type TrackMotors = Tb6612fng<
    Output<'static>,
    Output<'static>,
    Pwm<'static>,
    Output<'static>,
    Output<'static>,
    Pwm<'static>,
    Output<'static>,
>;

/// Motor driver failures
#[derive(Debug, Clone, Copy, PartialEq, Format)]
pub enum MotorFault {
    /// The driver could not be set up or taken out of standby
    Setup,
    /// The driver rejected a drive command
    Drive,
}

/// Both tracks behind one driver controller
pub struct TrackDrive {
    control: TrackMotors,
}

impl TrackDrive {
    /// Sets up both motors and wakes the driver from standby
    pub fn new(r: MotorDriverResources) -> Result<Self, MotorFault> {
        let (divider, period) = pwm_timing(MOTOR_PWM_FREQ_HZ);

        let mut pwm_config = pwm::Config::default();
        pwm_config.divider = divider.into();
        pwm_config.top = period;

        let stby = Output::new(r.standby_pin, Level::Low);

        // motor A, here defined to be the left motor
        let left_fwd = Output::new(r.left_forward_pin, Level::Low);
        let left_bckw = Output::new(r.left_backward_pin, Level::Low);
        let left_pwm = Pwm::new_output_a(r.left_slice, r.left_pwm_pin, pwm_config.clone());
        let left_motor = Motor::new(left_fwd, left_bckw, left_pwm).map_err(|_| MotorFault::Setup)?;

        // motor B, here defined to be the right motor
        let right_fwd = Output::new(r.right_forward_pin, Level::Low);
        let right_bckw = Output::new(r.right_backward_pin, Level::Low);
        let right_pwm = Pwm::new_output_b(r.right_slice, r.right_pwm_pin, pwm_config);
        let right_motor =
            Motor::new(right_fwd, right_bckw, right_pwm).map_err(|_| MotorFault::Setup)?;

        let mut control =
            Tb6612fng::new(left_motor, right_motor, stby).map_err(|_| MotorFault::Setup)?;
        control.disable_standby().map_err(|_| MotorFault::Setup)?;

        Ok(Self { control })
    }

    fn tracks(&mut self, left: DriveCommand, right: DriveCommand) -> Result<(), MotorFault> {
        self.control.motor_a.drive(left).map_err(|_| MotorFault::Drive)?;
        self.control.motor_b.drive(right).map_err(|_| MotorFault::Drive)
    }
}

impl Drive for TrackDrive {
    type Error = MotorFault;

    fn stop(&mut self) -> Result<(), MotorFault> {
        self.tracks(DriveCommand::Stop, DriveCommand::Stop)
    }

    fn forward(&mut self, speed: u8) -> Result<(), MotorFault> {
        self.tracks(DriveCommand::Forward(speed), DriveCommand::Forward(speed))
    }

    fn backward(&mut self, speed: u8) -> Result<(), MotorFault> {
        self.tracks(DriveCommand::Backward(speed), DriveCommand::Backward(speed))
    }

    fn left(&mut self, speed: u8) -> Result<(), MotorFault> {
        self.tracks(DriveCommand::Backward(speed), DriveCommand::Forward(speed))
    }

    fn right(&mut self, speed: u8) -> Result<(), MotorFault> {
        self.tracks(DriveCommand::Forward(speed), DriveCommand::Backward(speed))
    }
}
