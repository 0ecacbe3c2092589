//! Errors raised by rendering backends

use crate::ProbeId;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("Surface has no text measurement capability")]
    MeasurementUnavailable,

    #[error("Probe {0:?} is not attached")]
    ProbeDetached(ProbeId),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
