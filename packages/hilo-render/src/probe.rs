//! Offscreen probe elements.
//!
//! A probe is a hidden, absolutely positioned element styled with a font and filled with a
//! sample string. Reading back its rendered box height is how line heights are obtained
//! without relying on font metric tables. Probes are scoped: [`Probe`] detaches its element
//! when dropped, so nothing leaks into the visible environment even on early returns.

use crate::{SurfaceError, SurfaceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStyle<'a> {
    pub font: &'a str,
    pub content: &'a str,
}

pub trait ProbeHost {
    fn attach_probe(&self, style: &ProbeStyle<'_>) -> SurfaceResult<ProbeId>;

    /// Rendered box height of an attached probe.
    fn probe_height(&self, probe: ProbeId) -> SurfaceResult<f64>;

    fn detach_probe(&self, probe: ProbeId);
}

/// An attached probe element, detached again on drop.
pub struct Probe<'h, H: ProbeHost + ?Sized> {
    host: &'h H,
    id: ProbeId,
}

impl<'h, H: ProbeHost + ?Sized> Probe<'h, H> {
    pub fn attach(host: &'h H, style: &ProbeStyle<'_>) -> SurfaceResult<Self> {
        let id = host.attach_probe(style)?;
        Ok(Self { host, id })
    }

    pub fn id(&self) -> ProbeId {
        self.id
    }

    pub fn height(&self) -> SurfaceResult<f64> {
        let height = self.host.probe_height(self.id)?;
        if height.is_finite() {
            Ok(height)
        } else {
            Err(SurfaceError::ProbeDetached(self.id))
        }
    }
}

impl<H: ProbeHost + ?Sized> Drop for Probe<'_, H> {
    fn drop(&mut self) {
        self.host.detach_probe(self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Host {
        attached: RefCell<Vec<ProbeId>>,
    }

    impl ProbeHost for Host {
        fn attach_probe(&self, _style: &ProbeStyle<'_>) -> SurfaceResult<ProbeId> {
            let id = ProbeId(self.attached.borrow().len() as u64 + 1);
            self.attached.borrow_mut().push(id);
            Ok(id)
        }

        fn probe_height(&self, probe: ProbeId) -> SurfaceResult<f64> {
            if self.attached.borrow().contains(&probe) {
                Ok(14.0)
            } else {
                Err(SurfaceError::ProbeDetached(probe))
            }
        }

        fn detach_probe(&self, probe: ProbeId) {
            self.attached.borrow_mut().retain(|id| *id != probe);
        }
    }

    #[test]
    fn probe_detaches_on_drop() {
        let host = Host::default();
        let style = ProbeStyle { font: "12px arial", content: "|MÉq" };
        {
            let probe = Probe::attach(&host, &style).unwrap();
            assert_eq!(probe.height().unwrap(), 14.0);
            assert_eq!(host.attached.borrow().len(), 1);
        }
        assert!(host.attached.borrow().is_empty());
    }
}
