//! Interpolation primitives for position smoothing.

use glam::Vec2;

/// Fraction of the remaining distance to close this frame, from an
/// exponential decay with the given rate over `dt` seconds.
///
/// Frame-rate independent: two 8 ms frames close the same total
/// fraction as one 16 ms frame.
#[inline]
#[must_use]
pub fn decay_fraction(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.max(0.0)).exp()
}

/// Move `pos` a decayed fraction of the way toward `target`, snapping
/// exactly once the remaining distance falls below `epsilon`.
#[inline]
#[must_use]
pub fn approach(pos: Vec2, target: Vec2, rate: f32, dt: f32, epsilon: f32) -> Vec2 {
    let next = pos.lerp(target, decay_fraction(rate, dt));
    if next.distance_squared(target) < epsilon * epsilon {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT_60HZ: f32 = 1.0 / 60.0;

    #[test]
    fn decay_fraction_bounds() {
        assert_eq!(decay_fraction(5.0, 0.0), 0.0);
        let f = decay_fraction(5.0, DT_60HZ);
        assert!(f > 0.0 && f < 1.0);
        // Negative dt is clamped rather than overshooting backward.
        assert_eq!(decay_fraction(5.0, -1.0), 0.0);
    }

    #[test]
    fn decay_is_frame_rate_independent() {
        let one_step = decay_fraction(5.0, 0.2);
        let half = decay_fraction(5.0, 0.1);
        let two_steps = half + (1.0 - half) * half;
        assert!((one_step - two_steps).abs() < 1e-5);
    }

    #[test]
    fn approach_converges_within_bounded_frames() {
        let target = Vec2::new(350.0, 80.0);
        let mut pos = Vec2::new(350.0, -100.0);
        let mut frames = 0u32;
        while pos != target {
            pos = approach(pos, target, 5.0, DT_60HZ, 0.5);
            frames += 1;
            assert!(frames < 600, "failed to converge within 10s of frames");
        }
        // rate 5.0 halves the distance roughly every 8 frames; the
        // 180px gap should settle in well under 2 seconds.
        assert!(frames < 120, "took {frames} frames");
        assert_eq!(pos, target);
    }

    #[test]
    fn approach_snaps_inside_epsilon() {
        let target = Vec2::new(10.0, 10.0);
        let pos = Vec2::new(10.2, 10.0);
        assert_eq!(approach(pos, target, 5.0, DT_60HZ, 0.5), target);
    }

    #[test]
    fn approach_holds_at_target() {
        let target = Vec2::new(1.0, 2.0);
        assert_eq!(approach(target, target, 5.0, DT_60HZ, 0.5), target);
    }
}
