#![no_std]

pub mod rgb_led;
pub mod time;
