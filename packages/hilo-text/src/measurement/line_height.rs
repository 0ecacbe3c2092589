//! Line height estimation
//!
//! Ascent and descent are not portable across backends, so the height of one line is read
//! back from a hidden probe element styled with the font and filled with [`PROBE_SAMPLE`].
//! The probe is attached and detached within the same call.

use std::num::NonZeroUsize;

use hilo_render::{Probe, ProbeHost, ProbeStyle, SurfaceResult};
use lru::LruCache;

/// Sample covering a tall ascender, an accented capital and a descender.
pub const PROBE_SAMPLE: &str = "|MÉq";

const DEFAULT_CAPACITY: usize = 16;

/// Probe-based line height measurement, memoized per font string.
pub struct LineHeightEstimator {
    memo: LruCache<String, f64>,
    probes: u64,
}

impl LineHeightEstimator {
    pub fn new() -> Self {
        Self::with_capacity(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            memo: LruCache::new(capacity),
            probes: 0,
        }
    }

    /// Pixel height of one line of `font`.
    pub fn estimate<H: ProbeHost + ?Sized>(&mut self, font: &str, host: &H) -> SurfaceResult<f64> {
        if let Some(height) = self.memo.get(font) {
            return Ok(*height);
        }

        let height = {
            let probe = Probe::attach(
                host,
                &ProbeStyle {
                    font,
                    content: PROBE_SAMPLE,
                },
            )?;
            probe.height()?
        };
        self.probes += 1;
        log::debug!("line height of {:?} probed at {}px", font, height);

        self.memo.put(font.to_owned(), height);
        Ok(height)
    }

    /// Forget every memoized height. Paired with the glyph width cache reset on font change.
    pub fn reset(&mut self) {
        self.memo.clear();
    }

    /// Number of probes attached so far.
    pub fn probes(&self) -> u64 {
        self.probes
    }
}

impl Default for LineHeightEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use hilo_render_headless::{GlyphMetrics, HeadlessPlatform};

    use super::*;

    #[test]
    fn probes_once_per_font_and_releases_the_probe() {
        let platform = HeadlessPlatform::new(GlyphMetrics::proportional(0.5, 1.25));
        let mut estimator = LineHeightEstimator::new();

        assert_eq!(estimator.estimate("16px serif", &platform).unwrap(), 20.0);
        assert_eq!(estimator.estimate("16px serif", &platform).unwrap(), 20.0);
        assert_eq!(estimator.estimate("32px serif", &platform).unwrap(), 40.0);

        assert_eq!(estimator.probes(), 2);
        assert_eq!(platform.probes_attached(), 2);
        assert_eq!(platform.live_probes(), 0);
    }

    #[test]
    fn reset_forces_a_new_probe() {
        let platform = HeadlessPlatform::default();
        let mut estimator = LineHeightEstimator::new();
        estimator.estimate("12px arial", &platform).unwrap();
        estimator.reset();
        estimator.estimate("12px arial", &platform).unwrap();
        assert_eq!(platform.probes_attached(), 2);
    }
}
