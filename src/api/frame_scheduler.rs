use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ParcoordResult;
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{InvalidationMask, ParallelEngine};

/// Host hook asking the platform for one animation-frame callback.
///
/// The engine calls it at most once per frame; the host answers by calling
/// `ParallelEngine::on_animation_frame` from its frame callback.
pub trait FrameRequester {
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameRequester for F {
    fn request_frame(&mut self) {
        self();
    }
}

/// Counters describing how mutations were coalesced into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameSchedulerStats {
    pub frame_requests: u64,
    pub coalesced_invalidations: u64,
    pub frames_rendered: u64,
}

/// Dirty flag plus a single pending frame request.
pub(super) struct FrameScheduler {
    pending: InvalidationMask,
    frame_requested: bool,
    requester: Option<Box<dyn FrameRequester>>,
    stats: FrameSchedulerStats,
}

impl FrameScheduler {
    #[must_use]
    pub(super) fn with_full_invalidation() -> Self {
        Self {
            pending: InvalidationMask::full(),
            frame_requested: false,
            requester: None,
            stats: FrameSchedulerStats::default(),
        }
    }

    #[must_use]
    pub(super) fn pending(&self) -> InvalidationMask {
        self.pending
    }

    #[must_use]
    pub(super) fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    #[must_use]
    pub(super) fn stats(&self) -> FrameSchedulerStats {
        self.stats
    }

    pub(super) fn set_requester(&mut self, requester: Option<Box<dyn FrameRequester>>) {
        self.requester = requester;
        if !self.pending.is_none() {
            self.frame_requested = false;
            self.request_frame();
        }
    }

    /// Merges `mask` into the dirty state, requesting a frame only when none
    /// is outstanding.
    pub(super) fn invalidate(&mut self, mask: InvalidationMask) {
        if mask.is_none() {
            return;
        }
        self.pending.merge(mask);
        if self.frame_requested {
            self.stats.coalesced_invalidations += 1;
            return;
        }
        self.request_frame();
    }

    /// Consumes the outstanding request; returns whether a draw is due.
    pub(super) fn begin_frame(&mut self) -> bool {
        self.frame_requested = false;
        !self.pending.is_none()
    }

    pub(super) fn finish_frame(&mut self) {
        self.pending = InvalidationMask::none();
        self.stats.frames_rendered += 1;
    }

    pub(super) fn clear(&mut self) {
        self.pending = InvalidationMask::none();
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
        self.stats.frame_requests += 1;
        if let Some(requester) = self.requester.as_mut() {
            requester.request_frame();
        }
    }
}

impl<R: Renderer> ParallelEngine<R> {
    /// Installs the host frame hook. A pending invalidation immediately asks
    /// for a frame through it.
    pub fn set_frame_requester(&mut self, requester: Box<dyn FrameRequester>) {
        self.core.runtime.scheduler.set_requester(Some(requester));
    }

    pub fn clear_frame_requester(&mut self) {
        self.core.runtime.scheduler.set_requester(None);
    }

    /// `true` while a frame was requested and its callback has not run yet.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.core.runtime.scheduler.is_frame_requested()
    }

    #[must_use]
    pub fn frame_scheduler_stats(&self) -> FrameSchedulerStats {
        self.core.runtime.scheduler.stats()
    }

    /// Host animation-frame callback.
    ///
    /// Draws once when the view is dirty and returns whether it did.
    pub fn on_animation_frame(&mut self) -> ParcoordResult<bool> {
        if !self.core.runtime.scheduler.begin_frame() {
            trace!("animation frame skipped: nothing invalidated");
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Frame callback for retained toolkits that clear the widget before each
    /// draw: consumes the pending request and always paints.
    #[cfg(feature = "cairo-backend")]
    pub fn on_animation_frame_on_cairo_context(
        &mut self,
        context: &cairo::Context,
    ) -> ParcoordResult<()>
    where
        R: CairoContextRenderer,
    {
        self.core.runtime.scheduler.begin_frame();
        self.render_on_cairo_context(context)
    }

    /// Renders immediately when something is invalidated, ignoring frame
    /// pacing. Returns whether a draw happened.
    pub fn render_if_invalidated(&mut self) -> ParcoordResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    pub(super) fn schedule_render(&mut self, mask: InvalidationMask) {
        trace!(level = ?mask.level(), "render scheduled");
        self.core.runtime.scheduler.invalidate(mask);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::FrameScheduler;
    use crate::api::InvalidationMask;

    #[test]
    fn repeated_invalidations_share_one_request() {
        let requests = Rc::new(Cell::new(0_u32));
        let counter = requests.clone();
        let mut scheduler = FrameScheduler::with_full_invalidation();
        scheduler.finish_frame();
        scheduler.set_requester(Some(Box::new(move || counter.set(counter.get() + 1))));

        scheduler.invalidate(InvalidationMask::hover());
        scheduler.invalidate(InvalidationMask::brush());
        scheduler.invalidate(InvalidationMask::full());

        assert_eq!(requests.get(), 1);
        assert_eq!(scheduler.stats().coalesced_invalidations, 2);
        assert!(scheduler.begin_frame());
        assert!(!scheduler.is_frame_requested());
    }

    #[test]
    fn empty_mask_does_not_request_a_frame() {
        let mut scheduler = FrameScheduler::with_full_invalidation();
        scheduler.finish_frame();
        scheduler.invalidate(InvalidationMask::none());

        assert!(!scheduler.is_frame_requested());
        assert!(!scheduler.begin_frame());
    }
}
