//! # Pointer-velocity estimator
//!
//! [`PointerTracker`] derives a speed and a travel vector from
//! timestamped pointer samples. The host feeds it two independent
//! streams: pointer-move events update the current position immediately
//! via [`PointerTracker::set_position`], and the frame loop calls
//! [`PointerTracker::update`] once per frame with a timestamp.
//!
//! Everything runs on one logical thread; event dispatch and frame
//! updates interleave cooperatively, so there is no locking.
//!
//! Of the two historical designs (counter-gated speed vs. a debounce
//! timer flag) this implements the counter-gated one. The reported speed
//! stays at zero until the pointer has been moving for more than
//! [`MOVE_FRAME_THRESHOLD`] consecutive updates, which swallows startup
//! noise from the first frames.

use easel_core::Vector;

/// Consecutive moving updates required before `speed` reports nonzero.
pub const MOVE_FRAME_THRESHOLD: u32 = 2;

/// A position/timestamp pair snapshotted by `update`.
#[derive(Copy, Clone, Debug)]
struct Sample {
    position: Vector,
    timestamp: f64,
}

/// Tracks pointer position and derives speed and direction of travel.
///
/// The tracker is *uninitialized* until the first [`update`] records a
/// sample; until then speed and velocity both report zero. The historic
/// sample always reflects the state as of the previous `update` call.
///
/// [`update`]: PointerTracker::update
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Vector,
    historic: Option<Sample>,
    speed: f32,
    move_frames: u32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current pointer position. Call from the host's
    /// pointer-move signal; takes effect immediately, independent of
    /// [`update`](PointerTracker::update).
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vector::new(x, y);
    }

    /// The current pointer position.
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Folds the current position into the tracker at `timestamp_ms`.
    ///
    /// The derived speed is `distance * delta` — the product, not the
    /// ratio, of the distance travelled and the elapsed time. True speed
    /// would divide by the delta; the product form is what the original
    /// shipped and what its consumers calibrated against, so it is kept.
    pub fn update(&mut self, timestamp_ms: f64) {
        if let Some(historic) = &self.historic {
            let dist = historic.position.distance_to(self.position);
            let delta = (timestamp_ms - historic.timestamp) as f32;
            self.speed = dist * delta;
            self.move_frames = if self.speed > 0.0 {
                self.move_frames + 1
            } else {
                0
            };
        }
        self.historic = Some(Sample {
            position: self.position,
            timestamp: timestamp_ms,
        });
    }

    /// The last derived speed, once the pointer has been moving for more
    /// than [`MOVE_FRAME_THRESHOLD`] consecutive updates; zero before
    /// that.
    pub fn speed(&self) -> f32 {
        if self.move_frames > MOVE_FRAME_THRESHOLD {
            self.speed
        } else {
            0.0
        }
    }

    /// Direction and magnitude of travel since the last recorded sample.
    ///
    /// Zero while uninitialized, and zero immediately after an `update`
    /// (the historic sample catches up to the current position).
    pub fn velocity(&self) -> Vector {
        match &self.historic {
            Some(historic) => {
                let rad = historic.position.angle_to(self.position);
                let mag = self.position.sub(historic.position).mag();
                Vector::new(rad.cos() * mag, rad.sin() * mag)
            }
            None => Vector::ZERO,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.speed() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_reports_zero() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.speed(), 0.0);
        assert_eq!(tracker.velocity(), Vector::ZERO);
        assert!(!tracker.is_moving());
    }

    #[test]
    fn test_speed_is_distance_times_delta() {
        let mut tracker = PointerTracker::new();
        tracker.set_position(0.0, 0.0);
        tracker.update(0.0);

        tracker.set_position(3.0, 4.0);
        tracker.update(1.0);
        // distance 5, delta 1 -> product 5, still gated by the counter
        assert_eq!(tracker.speed(), 0.0);

        tracker.set_position(6.0, 8.0);
        tracker.update(2.0);
        assert_eq!(tracker.speed(), 0.0);

        tracker.set_position(9.0, 12.0);
        tracker.update(3.0);
        // third consecutive moving update clears the threshold
        assert_eq!(tracker.speed(), 5.0);
        assert!(tracker.is_moving());
    }

    #[test]
    fn test_speed_scales_with_delta() {
        let mut tracker = PointerTracker::new();
        tracker.set_position(0.0, 0.0);
        tracker.update(0.0);
        for step in 1..=3 {
            tracker.set_position(3.0 * step as f32, 4.0 * step as f32);
            tracker.update(step as f64 * 2.0);
        }
        // distance 5 per step, delta 2 -> product 10
        assert_eq!(tracker.speed(), 10.0);
    }

    #[test]
    fn test_pause_resets_the_gate() {
        let mut tracker = PointerTracker::new();
        tracker.set_position(0.0, 0.0);
        tracker.update(0.0);
        for step in 1..=4 {
            tracker.set_position(step as f32, 0.0);
            tracker.update(step as f64);
        }
        assert!(tracker.is_moving());

        // Pointer holds still for one frame: counter resets to zero
        tracker.update(5.0);
        assert_eq!(tracker.speed(), 0.0);
        assert!(!tracker.is_moving());

        // One moving frame is not enough to reopen the gate
        tracker.set_position(10.0, 0.0);
        tracker.update(6.0);
        assert_eq!(tracker.speed(), 0.0);
    }

    #[test]
    fn test_velocity_between_samples() {
        let mut tracker = PointerTracker::new();
        tracker.set_position(0.0, 0.0);
        tracker.update(0.0);

        // Moves arrive before the next update; velocity reflects them
        tracker.set_position(3.0, 4.0);
        let v = tracker.velocity();
        assert!((v.x - 3.0).abs() < 1e-5);
        assert!((v.y - 4.0).abs() < 1e-5);
        assert!((v.mag() - 5.0).abs() < 1e-5);

        // After update the historic sample catches up
        tracker.update(1.0);
        assert_eq!(tracker.velocity(), Vector::ZERO);
    }

    #[test]
    fn test_position_updates_are_immediate() {
        let mut tracker = PointerTracker::new();
        tracker.set_position(7.0, -2.0);
        assert_eq!(tracker.position(), Vector::new(7.0, -2.0));
    }
}
