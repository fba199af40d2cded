//! Hardware-facing system components: configuration, resources, shared state,
//! wakes, the serial link and the actuator shims
pub mod buzzer;
pub mod config;
pub mod link;
pub mod motor;
pub mod pwm;
pub mod resources;
pub mod state;
pub mod wake;
