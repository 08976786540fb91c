//! One-shot impact flash: grows and fades, then removes itself.

use glam::DVec3;

/// Shape of the flash ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashParams {
    /// Scale on the frame the flash is spawned.
    pub start_scale: f64,
    /// Scale added per tick.
    pub scale_step: f64,
    /// Scale at which the flash is fully transparent and removed.
    pub end_scale: f64,
}

impl Default for FlashParams {
    fn default() -> Self {
        Self {
            start_scale: 1.0,
            scale_step: 0.15,
            end_scale: 3.0,
        }
    }
}

impl FlashParams {
    /// Ticks from start until the flash finishes.
    pub fn lifetime_ticks(&self) -> u32 {
        if self.scale_step <= 0.0 {
            return u32::MAX;
        }
        ((self.end_scale - self.start_scale) / self.scale_step)
            .ceil()
            .max(1.0) as u32
    }
}

/// What the renderer should do with the flash this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlashFrame {
    /// Still visible with this uniform scale and opacity.
    Active {
        /// Uniform scale.
        scale: f64,
        /// Opacity in `[0, 1]`.
        opacity: f64,
    },
    /// Done; the flash must be removed from the scene.
    Finished,
}

/// A flash spawned at the impact point.
///
/// There is no restart and no external control: once started it ramps on its
/// own each tick until it finishes.
#[derive(Clone, Copy, Debug)]
pub struct ImpactFlash {
    position: DVec3,
    scale: f64,
    params: FlashParams,
    finished: bool,
}

impl ImpactFlash {
    /// Start a flash at `position`.
    pub fn start(position: DVec3, params: FlashParams) -> Self {
        Self {
            position,
            scale: params.start_scale,
            params,
            finished: false,
        }
    }

    /// Where the flash sits.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Current uniform scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Opacity implied by the current scale: `max(0, 1 - scale / end_scale)`.
    pub fn opacity(&self) -> f64 {
        (1.0 - self.scale / self.params.end_scale).max(0.0)
    }

    /// Whether the flash has run its course.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Grow by one step. Returns [`FlashFrame::Finished`] on the tick the
    /// scale reaches `end_scale` and on every tick after.
    pub fn tick(&mut self) -> FlashFrame {
        if self.finished {
            return FlashFrame::Finished;
        }

        self.scale += self.params.scale_step;
        if self.scale >= self.params.end_scale {
            self.finished = true;
            return FlashFrame::Finished;
        }

        FlashFrame::Active {
            scale: self.scale,
            opacity: self.opacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_unit_scale() {
        let flash = ImpactFlash::start(DVec3::X, FlashParams::default());
        assert_eq!(flash.position(), DVec3::X);
        assert_eq!(flash.scale(), 1.0);
        assert!((flash.opacity() - 2.0 / 3.0).abs() < 1e-12);
        assert!(!flash.is_finished());
    }

    #[test]
    fn test_ramp_grows_and_fades() {
        let mut flash = ImpactFlash::start(DVec3::ZERO, FlashParams::default());
        let mut last_scale = flash.scale();
        let mut last_opacity = flash.opacity();
        let mut active = 0;

        loop {
            match flash.tick() {
                FlashFrame::Active { scale, opacity } => {
                    assert!(scale > last_scale);
                    assert!(opacity < last_opacity);
                    assert!((opacity - (1.0 - scale / 3.0)).abs() < 1e-12);
                    last_scale = scale;
                    last_opacity = opacity;
                    active += 1;
                }
                FlashFrame::Finished => break,
            }
        }

        // 1.0 + 13 * 0.15 = 2.95 is the last visible frame.
        assert_eq!(active, 13);
        assert!(flash.is_finished());
        assert!(flash.scale() >= 3.0);
        assert_eq!(flash.opacity(), 0.0);
    }

    #[test]
    fn test_lifetime_matches_ramp() {
        let params = FlashParams::default();
        let mut flash = ImpactFlash::start(DVec3::ZERO, params);
        let mut ticks = 0;
        while flash.tick() != FlashFrame::Finished {
            ticks += 1;
        }
        assert_eq!(ticks + 1, params.lifetime_ticks());
    }

    #[test]
    fn test_finished_is_sticky() {
        let mut flash = ImpactFlash::start(DVec3::ZERO, FlashParams::default());
        while flash.tick() != FlashFrame::Finished {}
        let scale = flash.scale();
        for _ in 0..5 {
            assert_eq!(flash.tick(), FlashFrame::Finished);
        }
        assert_eq!(flash.scale(), scale);
    }

    #[test]
    fn test_custom_params() {
        let params = FlashParams {
            start_scale: 1.0,
            scale_step: 0.5,
            end_scale: 3.0,
        };
        assert_eq!(params.lifetime_ticks(), 4);
        let mut flash = ImpactFlash::start(DVec3::ZERO, params);
        assert_eq!(
            flash.tick(),
            FlashFrame::Active {
                scale: 1.5,
                opacity: 0.5
            }
        );
    }
}
