use std::cell::{Cell, RefCell};
use std::sync::Arc;

use ahash::AHashMap;
use hilo_render::{
    OffscreenSurface, Platform, ProbeHost, ProbeId, ProbeStyle, SurfaceError, SurfaceResult,
};

use crate::{GlyphMetrics, HeadlessSurface};

/// An environment backed entirely by [`GlyphMetrics`].
///
/// Probe elements are accounted for so tests can assert that none outlive the call that
/// attached them.
#[derive(Debug)]
pub struct HeadlessPlatform {
    metrics: Arc<GlyphMetrics>,
    supports_canvas: bool,
    probes: RefCell<AHashMap<ProbeId, f64>>,
    next_probe: Cell<u64>,
    probes_attached: Cell<u64>,
    surfaces_created: Cell<u64>,
}

impl HeadlessPlatform {
    pub fn new(metrics: GlyphMetrics) -> Self {
        Self {
            metrics: Arc::new(metrics),
            supports_canvas: true,
            probes: RefCell::new(AHashMap::new()),
            next_probe: Cell::new(1),
            probes_attached: Cell::new(0),
            surfaces_created: Cell::new(0),
        }
    }

    /// A platform with no pixel surfaces; only probes and retained elements are available.
    pub fn without_canvas(metrics: GlyphMetrics) -> Self {
        Self {
            supports_canvas: false,
            ..Self::new(metrics)
        }
    }

    pub fn metrics(&self) -> Arc<GlyphMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Probes currently attached to the environment.
    pub fn live_probes(&self) -> usize {
        self.probes.borrow().len()
    }

    /// Probes attached over the platform's lifetime.
    pub fn probes_attached(&self) -> u64 {
        self.probes_attached.get()
    }

    pub fn surfaces_created(&self) -> u64 {
        self.surfaces_created.get()
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new(GlyphMetrics::default())
    }
}

impl ProbeHost for HeadlessPlatform {
    fn attach_probe(&self, style: &ProbeStyle<'_>) -> SurfaceResult<ProbeId> {
        let id = ProbeId(self.next_probe.get());
        self.next_probe.set(id.0 + 1);
        self.probes_attached.set(self.probes_attached.get() + 1);

        let height = if style.content.is_empty() {
            0.0
        } else {
            self.metrics.line_height(style.font)
        };
        self.probes.borrow_mut().insert(id, height);
        log::trace!("attached probe {:?} for {:?}: {}px", id, style.font, height);
        Ok(id)
    }

    fn probe_height(&self, probe: ProbeId) -> SurfaceResult<f64> {
        self.probes
            .borrow()
            .get(&probe)
            .copied()
            .ok_or(SurfaceError::ProbeDetached(probe))
    }

    fn detach_probe(&self, probe: ProbeId) {
        self.probes.borrow_mut().remove(&probe);
    }
}

impl Platform for HeadlessPlatform {
    fn create_surface(&self) -> Option<Box<dyn OffscreenSurface>> {
        if !self.supports_canvas {
            return None;
        }
        self.surfaces_created.set(self.surfaces_created.get() + 1);
        Some(Box::new(HeadlessSurface::new(Arc::clone(&self.metrics))))
    }
}
