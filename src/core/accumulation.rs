use log::debug;

/// Why accumulated convergence was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    Resize,
    Camera,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulationPhase {
    /// No surfaces have been allocated yet
    Uninitialized,
    Accumulating { pass_count: u32 },
    /// Surfaces will be rebuilt at the start of the next pass
    InvalidatedPendingRebuild,
}

/// Blend parameters for the pass about to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassInfo {
    pub pass_count: u32,
    pub first_pass: bool,
}

impl PassInfo {
    /// Weight of this pass in the running average
    pub fn blend_weight(&self) -> f32 {
        1.0 / (self.pass_count as f32 + 1.0)
    }
}

/// Owns the two accumulation surfaces and decides when convergence restarts.
///
/// The surfaces live in a two-slot arena indexed by a parity bit. Each pass
/// reads the slot the parity points at and writes the other one, and the
/// parity flips after every completed pass.
#[derive(Debug)]
pub struct AccumulationController<S> {
    slots: Option<[S; 2]>,
    /// True while slot 0 is the previous (read) surface
    active_is_a: bool,
    phase: AccumulationPhase,
    extent: (u32, u32),
}

impl<S> AccumulationController<S> {
    pub fn new() -> Self {
        Self {
            slots: None,
            active_is_a: true,
            phase: AccumulationPhase::Uninitialized,
            extent: (0, 0),
        }
    }

    pub fn phase(&self) -> AccumulationPhase {
        self.phase
    }

    pub fn active_is_a(&self) -> bool {
        self.active_is_a
    }

    pub fn pass_count(&self) -> u32 {
        match self.phase {
            AccumulationPhase::Accumulating { pass_count } => pass_count,
            _ => 0,
        }
    }

    /// Dimensions of the currently allocated surfaces
    pub fn extent(&self) -> Option<(u32, u32)> {
        self.slots.as_ref().map(|_| self.extent)
    }

    /// Discard convergence. Takes effect at the next [`begin_pass`].
    ///
    /// [`begin_pass`]: Self::begin_pass
    pub fn invalidate(&mut self, reason: Invalidation) {
        debug!("Accumulation invalidated: {:?} after {} passes", reason, self.pass_count());
        if self.phase != AccumulationPhase::Uninitialized {
            self.phase = AccumulationPhase::InvalidatedPendingRebuild;
        }
    }

    /// Prepare the surfaces for a pass at `width` x `height`.
    ///
    /// Returns `Ok(None)` while the viewport has a zero dimension, in which
    /// case nothing is allocated and no pass should run. Both surfaces are
    /// reallocated after an invalidation or a change of extent.
    pub fn begin_pass<E>(
        &mut self,
        width: u32,
        height: u32,
        mut allocate: impl FnMut(u32, u32) -> Result<S, E>,
    ) -> Result<Option<PassInfo>, E> {
        if width == 0 || height == 0 {
            return Ok(None);
        }

        let stale_extent = self.slots.is_some() && self.extent != (width, height);
        let needs_rebuild = match self.phase {
            AccumulationPhase::Uninitialized | AccumulationPhase::InvalidatedPendingRebuild => true,
            AccumulationPhase::Accumulating { .. } => stale_extent,
        };

        if needs_rebuild {
            // A failed allocation below must not leave the phase claiming
            // surfaces that are gone.
            if self.slots.take().is_some() {
                self.phase = AccumulationPhase::InvalidatedPendingRebuild;
            }
            let slots = [allocate(width, height)?, allocate(width, height)?];
            self.slots = Some(slots);
            self.extent = (width, height);
            self.phase = AccumulationPhase::Accumulating { pass_count: 0 };
            debug!("Allocated accumulation surfaces {}x{}", width, height);
        }

        let pass_count = self.pass_count();
        Ok(Some(PassInfo {
            pass_count,
            first_pass: pass_count == 0,
        }))
    }

    /// `(previous, next)` for the current pass
    pub fn surfaces(&self) -> Option<(&S, &S)> {
        let [a, b] = self.slots.as_ref()?;
        Some(if self.active_is_a { (a, b) } else { (b, a) })
    }

    /// Finish the current pass: count it and swap surface roles.
    pub fn end_pass(&mut self) {
        if let AccumulationPhase::Accumulating { pass_count } = self.phase {
            self.phase = AccumulationPhase::Accumulating {
                pass_count: pass_count.saturating_add(1),
            };
        }
        self.active_is_a = !self.active_is_a;
    }
}

impl<S> Default for AccumulationController<S> {
    fn default() -> Self {
        Self::new()
    }
}
