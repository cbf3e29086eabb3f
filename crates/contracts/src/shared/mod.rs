pub mod booking_steps;
pub mod indicators;
