//! PWM eye LED
//!
//! Scales the controller's `0..=DUTY_MAX` duty cycle onto the native
//! resolution of the PWM channel.
//!
//! ```ignore
//! let mut led = PwmLed::new(pwm_channel);
//!
//! // In the tick handler:
//! led.set_duty(duty)?;
//! ```

use embedded_hal::pwm::SetDutyCycle;
use headturn_core::config::DUTY_MAX;
use headturn_core::traits::{DutyOutput, OutputError};

/// Eye LED on a PWM channel
pub struct PwmLed<P> {
    pwm: P,
    /// LED wired to sink current (lit when the output is low)
    inverted: bool,
}

impl<P: SetDutyCycle> PwmLed<P> {
    /// LED lit when the output is high
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            inverted: false,
        }
    }

    /// LED lit when the output is low
    pub fn inverted(pwm: P) -> Self {
        Self {
            pwm,
            inverted: true,
        }
    }

    /// Release the PWM channel
    pub fn into_inner(self) -> P {
        self.pwm
    }

    /// Map a controller duty onto `0..=max`
    fn scale(duty: u16, max: u16) -> u16 {
        let duty = duty.min(DUTY_MAX) as u32;
        (duty * max as u32 / DUTY_MAX as u32) as u16
    }
}

impl<P: SetDutyCycle> DutyOutput for PwmLed<P> {
    fn set_duty(&mut self, duty: u16) -> Result<(), OutputError> {
        let max = self.pwm.max_duty_cycle();
        let mut native = Self::scale(duty, max);
        if self.inverted {
            native = max - native;
        }
        self.pwm
            .set_duty_cycle(native)
            .map_err(|_| OutputError::Pwm)
    }
}
