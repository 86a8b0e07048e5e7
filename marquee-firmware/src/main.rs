//! Marquee - Message Cycling Demo Firmware
//!
//! Main firmware binary for RP2040 boards with an SSD1306 OLED, two
//! buttons, a buzzer and an LED. Button A steps forward through the
//! message catalog, button B steps back; every press clicks, beeps and
//! flashes the LED.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_time::Timer;
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use marquee_core::state::ButtonId;
use marquee_core::Marquee;
use marquee_display::Ssd1306;
use marquee_drivers::{Button, Buzzer, StatusLed};
use marquee_hal::I2cConfig;
use marquee_hal_rp2040::i2c::rp_config;
use marquee_hal_rp2040::{
    BlockingDelay, BlockingI2c, GpioInput, GpioOutput, PinBank, PinError, PinSpec,
};

mod config;

// Heap allocator for wrapped lines
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 8KB
const HEAP_SIZE: usize = 8 * 1024;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Marquee firmware starting...");

    // Initialize heap allocator
    init_heap();

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let (mut bank, board) = PinBank::new(p);
    info!("Peripherals initialized");

    // OLED on I2C1, pins fixed by the board
    let bus_config = rp_config(&I2cConfig {
        frequency: config::I2C_FREQUENCY_HZ,
    });
    let i2c = I2c::new_blocking(board.i2c1, board.i2c_scl, board.i2c_sda, bus_config);
    let mut display = Ssd1306::with_address(BlockingI2c::new(i2c), config::DISPLAY_ADDRESS);
    match display.init() {
        Ok(()) => info!("SSD1306 initialized at {=u8:#x}", config::DISPLAY_ADDRESS),
        Err(e) => warn!("SSD1306 init failed: {}", e),
    }

    // Config-driven pins
    let pins = match config::pins() {
        Ok(pins) => pins,
        Err(e) => {
            error!("Invalid pin string: {}", e);
            park().await
        }
    };

    let (button_a, button_b, buzzer_pin, led_pin) = match (
        take_input(&mut bank, pins.button_a),
        take_input(&mut bank, pins.button_b),
        take_output(&mut bank, pins.buzzer),
        take_output(&mut bank, pins.led),
    ) {
        (Ok(a), Ok(b), Ok(buzzer), Ok(led)) => (a, b, buzzer, led),
        (a, b, buzzer, led) => {
            for (name, result) in [
                ("button_a", a.err()),
                ("button_b", b.err()),
                ("buzzer", buzzer.err()),
                ("led", led.err()),
            ] {
                if let Some(e) = result {
                    error!("Cannot use pin for {}: {}", name, e);
                }
            }
            park().await
        }
    };

    // Buttons are active-low unless the pin string is inverted
    let button_a = Button::new(button_a, pins.button_a.inverted);
    let button_b = Button::new(button_b, pins.button_b.inverted);
    let mut buzzer = Buzzer::new(buzzer_pin, BlockingDelay::embassy());
    let mut led = StatusLed::new(led_pin, BlockingDelay::embassy(), pins.led.inverted);
    info!(
        "Pins: A=gpio{} B=gpio{} buzzer=gpio{} led=gpio{}",
        pins.button_a.pin, pins.button_b.pin, pins.buzzer.pin, pins.led.pin
    );

    let demo = config::DEMO_CONFIG;
    let catalog = match config::catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Invalid message catalog: {}", e);
            park().await
        }
    };
    let mut marquee = match Marquee::new(catalog, &demo) {
        Ok(marquee) => marquee,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            park().await
        }
    };
    info!("{} messages loaded", marquee.catalog().len());

    // Boot splash: every message once, then settle on the first
    if demo.timing.splash_frame_ms > 0 {
        for index in 0..marquee.catalog().len() {
            if let Err(e) = marquee.render(index, &mut display) {
                warn!("Splash frame {} failed: {}", index, e);
            }
            Timer::after_millis(u64::from(demo.timing.splash_frame_ms)).await;
        }
    }
    if let Err(e) = marquee.show_current(&mut display) {
        warn!("Display update failed: {}", e);
    }

    info!("Ready");

    loop {
        // Both buttons are read every pass, A first
        let mut handled = false;
        for (id, button) in ButtonId::ALL.into_iter().zip([&button_a, &button_b]) {
            let Some(transition) =
                marquee.poll_button(id, button, &mut display, &mut buzzer, &mut led)
            else {
                continue;
            };
            debug!(
                "{} -> message {} \"{}\", LED {}",
                transition.event,
                transition.index,
                marquee.message(),
                transition.shown_color
            );
            if let Err(e) = transition.display {
                warn!("Display update failed: {}", e);
            }
            handled = true;
            Timer::after_millis(u64::from(demo.timing.debounce_ms)).await;
        }

        if !handled {
            Timer::after_millis(u64::from(demo.timing.poll_interval_ms)).await;
        }
    }
}

/// Take a config pin as a push-pull output, idle (logically off)
fn take_output(bank: &mut PinBank, spec: PinSpec) -> Result<GpioOutput, PinError> {
    let pin = bank.take(spec.pin)?;
    let idle = if spec.inverted { Level::High } else { Level::Low };
    Ok(GpioOutput::new(Output::new(pin, idle)))
}

/// Take a config pin as an input
fn take_input(bank: &mut PinBank, spec: PinSpec) -> Result<GpioInput, PinError> {
    let pin = bank.take(spec.pin)?;
    let pull = if spec.pull_up { Pull::Up } else { Pull::None };
    Ok(GpioInput::new(Input::new(pin, pull)))
}

/// Stop here after a fatal configuration error
async fn park() -> ! {
    loop {
        Timer::after_secs(60).await;
    }
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
