//! Memoization of the last layout result

use crate::types::LayoutResult;

/// Holds the last [`LayoutResult`] of a node until text, font or width budget change.
///
/// Results are replaced wholesale, never patched.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    current: Option<LayoutResult>,
    passes: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&LayoutResult> {
        self.current.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    /// Return the memoized result, computing it with `compute` when there is none.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        compute: impl FnOnce() -> Result<LayoutResult, E>,
    ) -> Result<&LayoutResult, E> {
        let result = match self.current.take() {
            Some(result) => result,
            None => {
                let result = compute()?;
                self.passes += 1;
                log::debug!(
                    "layout pass {}: {} lines, {}x{}",
                    self.passes,
                    result.line_count(),
                    result.width,
                    result.height
                );
                result
            }
        };
        Ok(self.current.insert(result))
    }

    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// Number of layout computations performed.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
