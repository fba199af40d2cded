pub mod audio;
pub mod brain;
pub mod led_indicate;
pub mod motor_control;
pub mod run_finish_button;
