//! Board pin map and peripheral bring-up
//!
//! # Pin Assignments
//!
//! ## Motion sensing
//! - **GPIO26 / ADC0**: IR receiver A level
//! - **GPIO27 / ADC1**: IR receiver B level
//! - **GPIO15**: external comparator output (high when A > B)
//!
//! ## Outputs
//! - **GPIO6**: eye LED (PWM slice 3, channel A)
//! - **GPIO10..GPIO13**: drive bus, coil A..D

use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{self, Pwm, PwmOutput};

use headturn_drivers::led::PwmLed;
use headturn_drivers::motor::GpioDriveBus;

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

/// RP2040 ADC resolution
pub const ADC_BITS: u8 = 12;

/// PWM counter top for the eye LED (10-bit brightness)
const LED_PWM_TOP: u16 = 0x03FF;

/// Every peripheral the controller uses, configured and ready
pub struct Board {
    /// Eye LED
    pub led: PwmLed<PwmOutput<'static>>,
    /// Stepper coil lines
    pub drive: GpioDriveBus<Output<'static>>,
    /// Comparator output between the two receivers
    pub comparator: Input<'static>,
    /// Shared ADC
    pub adc: Adc<'static, adc::Async>,
    /// Receiver A analog input
    pub receiver_a: Channel<'static>,
    /// Receiver B analog input
    pub receiver_b: Channel<'static>,
}

impl Board {
    /// Configure all peripherals from the RP2040 singleton
    ///
    /// LED starts dark and every coil line starts low; the drive loop
    /// writes the power-on pattern itself.
    pub fn new(p: embassy_rp::Peripherals) -> Self {
        let mut pwm_config = pwm::Config::default();
        pwm_config.top = LED_PWM_TOP;
        pwm_config.compare_a = 0;
        let (led_channel, _) = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, pwm_config).split();

        Self {
            led: PwmLed::new(led_channel.expect("PWM slice 3 channel A")),
            drive: GpioDriveBus::new(
                Output::new(p.PIN_10, Level::Low),
                Output::new(p.PIN_11, Level::Low),
                Output::new(p.PIN_12, Level::Low),
                Output::new(p.PIN_13, Level::Low),
            ),
            comparator: Input::new(p.PIN_15, Pull::None),
            adc: Adc::new(p.ADC, Irqs, adc::Config::default()),
            receiver_a: Channel::new_pin(p.PIN_26, Pull::None),
            receiver_b: Channel::new_pin(p.PIN_27, Pull::None),
        }
    }
}
