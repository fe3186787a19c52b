/*!
 * The capture session boundary.
 *
 * The interrupt-driven sampler is not part of this crate; it only needs to
 * report the elapsed ticks between pin transitions to [`Receiver::edge`].
 * The receiver assembles those durations into a bounded buffer and, when
 * the frame gap arrives, hands the finished [`Capture`] off by move. The
 * sampler never shares a buffer with the decoder, so no locking is needed
 * on the capture path.
 */

use crate::{RAW_CAPACITY, USEC_PER_TICK};
use log::{debug, warn};
use std::mem;

/// A finished, immutable capture in receiver ticks.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Capture {
    ticks: Vec<u32>,
}

impl Capture {
    /// Wrap a tick buffer recorded elsewhere.
    pub fn from_ticks(ticks: &[u32]) -> Result<Capture, String> {
        if ticks.len() > RAW_CAPACITY {
            return Err(format!(
                "capture of {} entries exceeds the {} entry bound",
                ticks.len(),
                RAW_CAPACITY
            ));
        }

        Ok(Capture {
            ticks: ticks.to_vec(),
        })
    }

    /// The raw durations in ticks, first entry a mark.
    pub fn ticks(&self) -> &[u32] {
        &self.ticks
    }

    /// The raw durations in microseconds.
    pub fn to_microseconds(&self) -> Vec<u32> {
        self.ticks.iter().map(|t| t * USEC_PER_TICK).collect()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Default space length that terminates a frame, in microseconds. Long
/// enough to keep a Sharp frame and its echo together, short enough to
/// split NEC repeats from their frame.
const DEFAULT_GAP: u32 = 20000;

/// A capture session. `start` arms it, `edge` feeds it transition
/// durations, `poll` takes the finished capture, `resume` discards state
/// and waits for the next frame.
pub struct Receiver {
    running: bool,
    overflow: bool,
    ticks: Vec<u32>,
    ready: Option<Capture>,
    gap_ticks: u32,
}

impl Receiver {
    pub fn new() -> Receiver {
        Receiver::with_gap(DEFAULT_GAP)
    }

    /// A receiver with a custom frame gap in microseconds.
    pub fn with_gap(gap_usec: u32) -> Receiver {
        Receiver {
            running: false,
            overflow: false,
            ticks: Vec::with_capacity(RAW_CAPACITY),
            ready: None,
            gap_ticks: gap_usec / USEC_PER_TICK,
        }
    }

    /// Begin capturing. The next reported duration is the first mark of a
    /// frame.
    pub fn start(&mut self) {
        self.running = true;
        self.overflow = false;
        self.ticks.clear();
    }

    /// Stop capturing; further edges are ignored.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Discard any pending capture and re-arm for the next frame.
    pub fn resume(&mut self) {
        self.ready = None;
        self.overflow = false;
        self.ticks.clear();
        self.running = true;
    }

    /// Record the duration in ticks since the previous pin transition.
    /// Durations alternate mark, space, mark starting with a mark.
    pub fn edge(&mut self, ticks: u32) {
        if !self.running || ticks == 0 {
            return;
        }

        // after an overflow, drop edges until the next frame gap
        if self.overflow {
            if ticks >= self.gap_ticks {
                self.overflow = false;
                self.ticks.clear();
            }
            return;
        }

        // a long space ends the frame; the gap itself is not recorded
        if self.ticks.len() % 2 == 1 && ticks >= self.gap_ticks {
            if self.ready.is_some() {
                debug!("previous capture not yet consumed, frame dropped");
                self.ticks.clear();
                return;
            }

            self.ready = Some(Capture {
                ticks: mem::take(&mut self.ticks),
            });
            self.ticks.reserve(RAW_CAPACITY);
            return;
        }

        if self.ticks.len() == RAW_CAPACITY {
            warn!("capture overflow, frame dropped");
            self.overflow = true;
            return;
        }

        self.ticks.push(ticks);
    }

    /// Take the finished capture, if a frame has completed.
    pub fn poll(&mut self) -> Option<Capture> {
        self.ready.take()
    }
}

impl Default for Receiver {
    fn default() -> Self {
        Receiver::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(receiver: &mut Receiver, durations: &[u32]) {
        for &d in durations {
            receiver.edge(d);
        }
    }

    #[test]
    fn frame_handoff() {
        let mut receiver = Receiver::new();

        receiver.start();
        feed(&mut receiver, &[180, 90, 11, 11, 11, 34, 11]);
        assert_eq!(receiver.poll(), None);

        // the frame gap completes the capture and is not recorded
        receiver.edge(2000);

        let capture = receiver.poll().unwrap();
        assert_eq!(capture.ticks(), &[180, 90, 11, 11, 11, 34, 11]);
        assert_eq!(capture.to_microseconds()[0], 9000);

        // polling again yields nothing
        assert_eq!(receiver.poll(), None);
    }

    #[test]
    fn stopped_receiver_ignores_edges() {
        let mut receiver = Receiver::new();

        receiver.edge(180);
        receiver.start();
        receiver.stop();
        feed(&mut receiver, &[180, 90, 2000]);

        assert_eq!(receiver.poll(), None);
    }

    #[test]
    fn resume_discards_partial_frame() {
        let mut receiver = Receiver::new();

        receiver.start();
        feed(&mut receiver, &[180, 90, 11]);
        receiver.resume();
        feed(&mut receiver, &[180, 90, 11, 2000]);

        let capture = receiver.poll().unwrap();
        assert_eq!(capture.ticks(), &[180, 90, 11]);
    }

    #[test]
    fn overflow_drops_frame() {
        let mut receiver = Receiver::new();

        receiver.start();
        feed(&mut receiver, &vec![10; RAW_CAPACITY + 6]);
        receiver.edge(2000);

        // parity was lost with the dropped frame; nothing completes
        assert_eq!(receiver.poll(), None);
    }

    #[test]
    fn pending_capture_is_kept() {
        let mut receiver = Receiver::new();

        receiver.start();
        feed(&mut receiver, &[180, 90, 11, 2000]);
        feed(&mut receiver, &[180, 90, 34, 2000]);

        let capture = receiver.poll().unwrap();
        assert_eq!(capture.ticks(), &[180, 90, 11]);
    }
}
