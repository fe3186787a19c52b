/*!
 * The carrier-generation boundary.
 *
 * Driving a pin at 38 kHz is the platform's business; this crate only
 * tells it what to do. [`transmit`] walks a finished [`Message`] and calls
 * the [`Transmitter`] once per mark and space, after announcing the
 * carrier.
 */

use crate::Message;
use num_integer::Integer;

/// The interface a carrier-generation backend implements. `mark` means
/// carrier on for the duration, `space` means idle.
pub trait Transmitter {
    /// Announce the carrier in kHz and the duty cycle, if known, before
    /// the first mark.
    fn carrier(&mut self, khz: u32, duty_cycle: Option<u8>);

    fn mark(&mut self, usec: u32);

    fn space(&mut self, usec: u32);
}

/// Drive a message through a transmitter. Returns once the whole
/// sequence, including the trailing gap, has been requested.
pub fn transmit<T: Transmitter>(message: &Message, transmitter: &mut T) {
    if let Some(carrier) = message.carrier {
        transmitter.carrier(carrier / 1000, message.duty_cycle);
    }

    for (i, &duration) in message.raw.iter().enumerate() {
        if i.is_even() {
            transmitter.mark(duration);
        } else {
            transmitter.space(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        carrier_khz: Option<u32>,
        calls: Vec<(bool, u32)>,
    }

    impl Transmitter for Recorder {
        fn carrier(&mut self, khz: u32, _duty_cycle: Option<u8>) {
            self.carrier_khz = Some(khz);
        }

        fn mark(&mut self, usec: u32) {
            self.calls.push((true, usec));
        }

        fn space(&mut self, usec: u32) {
            self.calls.push((false, usec));
        }
    }

    #[test]
    fn drives_marks_and_spaces_in_order() {
        let message = crate::encode::nec_repeat();
        let mut recorder = Recorder::default();

        transmit(&message, &mut recorder);

        assert_eq!(recorder.carrier_khz, Some(38));
        assert_eq!(
            recorder.calls,
            vec![(true, 9000), (false, 2250), (true, 560), (false, 40000)]
        );
    }
}
