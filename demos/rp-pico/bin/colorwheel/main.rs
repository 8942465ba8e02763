//! Spins an RGB LED around the HSB hue wheel.
//!
//! Full saturation and brightness, one hue step every 10 ms, so a whole
//! turn takes about 2.5 seconds. The main loop just polls the wheel; all
//! timing comes from the hardware timer.

#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    pac,
    pwm::{A, B, Channel, FreeRunning, Pwm1, Pwm2, Slice},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_demos::rgb_led::PwmRgbLed;
use rp_pico_demos::time::{Duration, HardwareTimer, Instant};

use hsb_colorwheel::{ColorWheel, TimeDuration, WheelConfig};

pub const STEP_MS: u64 = 10;

/// Type alias for the RGB LED using PWM channels
pub type Led = PwmRgbLed<
    Channel<Slice<Pwm1, FreeRunning>, A>,
    Channel<Slice<Pwm1, FreeRunning>, B>,
    Channel<Slice<Pwm2, FreeRunning>, A>,
>;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Color Wheel ===");

    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    rprintln!(
        "System clock configured: {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // GPIO2 (Red), GPIO3 (Green), GPIO4 (Blue)
    let mut pwm_slices = rp_pico::hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);

    pwm_slices.pwm1.set_ph_correct();
    pwm_slices.pwm1.set_div_int(125u8); // 125 MHz / 125 = 1 MHz
    pwm_slices.pwm1.set_top(1000u16); // 1 MHz / 1000 = 1 kHz PWM frequency
    pwm_slices.pwm1.enable();

    pwm_slices.pwm2.set_ph_correct();
    pwm_slices.pwm2.set_div_int(125u8);
    pwm_slices.pwm2.set_top(1000u16);
    pwm_slices.pwm2.enable();

    let mut red_channel = pwm_slices.pwm1.channel_a;
    let mut green_channel = pwm_slices.pwm1.channel_b;
    let mut blue_channel = pwm_slices.pwm2.channel_a;

    red_channel.output_to(pins.gpio2);
    green_channel.output_to(pins.gpio3);
    blue_channel.output_to(pins.gpio4);

    // Common anode
    let led: Led = PwmRgbLed::new(red_channel, green_channel, blue_channel, true);

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);

    let config = WheelConfig::builder()
        .step_interval(Duration::from_millis(STEP_MS))
        .saturation(255)
        .brightness(255)
        .build()
        .unwrap();

    let mut wheel: ColorWheel<Instant, Led, HardwareTimer> =
        ColorWheel::new(led, &time_source, config);

    wheel.start().unwrap();
    rprintln!("Color wheel started");

    // Cooperative polling: the wheel only pushes a color when its step
    // timer has expired, then wraps the hue and re-arms.
    loop {
        wheel.service().unwrap();
    }
}
