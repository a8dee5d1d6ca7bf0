//! Lifecycle bookkeeping for active shockwaves.
//!
//! The registry owns every live [`ShockwaveInstance`], ages them once per
//! frame and drops those that have run their course or no longer fit in the
//! fixed uniform capacity. It never touches the GPU; the packer reads the
//! live slice after [`ShockwaveRegistry::advance`].

use crate::config::TriggerRequest;
use crate::constants::MAX_SHOCKWAVES;
use glam::Vec2;
use smallvec::SmallVec;

/// One active shockwave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShockwaveInstance {
    pub center: Vec2,
    pub duration_ms: f32,
    pub max_radius: f32,
    pub thickness: f32,
    rate: f32,
    steps: u32,
}

impl ShockwaveInstance {
    pub fn new(req: TriggerRequest) -> Self {
        // A zero duration carries no usable rate; it is expired from birth.
        let rate = if req.duration_ms == 0.0 {
            0.0
        } else {
            req.speed / req.duration_ms
        };
        Self {
            center: req.location,
            duration_ms: req.duration_ms,
            max_radius: req.max_radius,
            thickness: req.thickness,
            rate,
            steps: 0,
        }
    }

    /// Age increment applied on every advance.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Normalized progress: 0 at trigger, past 1 once expired.
    ///
    /// Computed as `steps * rate` rather than accumulated, so an instance
    /// with `rate = 1/n` lands exactly on 1.0 after `n` advances.
    #[inline]
    pub fn age(&self) -> f32 {
        if self.steps == 0 {
            return 0.0;
        }
        self.steps as f32 * self.rate
    }

    /// Zero durations and non-finite rates (NaN inputs, or a duration so
    /// small the division overflows) are expired from birth.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.duration_ms == 0.0 || !self.rate.is_finite() || self.age() > 1.0
    }

    fn step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }
}

/// Ordered, capacity-bounded set of live shockwaves.
#[derive(Clone, Debug)]
pub struct ShockwaveRegistry {
    instances: SmallVec<[ShockwaveInstance; MAX_SHOCKWAVES + 1]>,
    capacity: usize,
}

impl Default for ShockwaveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShockwaveRegistry {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SHOCKWAVES)
    }

    /// Capacities above [`MAX_SHOCKWAVES`] are clamped: the uniform arrays
    /// cannot hold more.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: SmallVec::new(),
            capacity: capacity.min(MAX_SHOCKWAVES),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Start a new shockwave at `location` (normalized, top-left origin).
    pub fn trigger(
        &mut self,
        location: Vec2,
        duration_ms: f32,
        speed: f32,
        max_radius: f32,
        thickness: f32,
    ) {
        self.trigger_request(TriggerRequest {
            location,
            duration_ms,
            speed,
            max_radius,
            thickness,
        });
    }

    pub fn trigger_request(&mut self, req: TriggerRequest) {
        let instance = ShockwaveInstance::new(req);
        if instance.is_expired() {
            log::debug!(
                "[shockwave] dropped trigger at ({:.3},{:.3}): duration={} speed={}",
                req.location.x,
                req.location.y,
                req.duration_ms,
                req.speed
            );
            return;
        }
        self.instances.push(instance);
        self.enforce_capacity(self.capacity);
        log::debug!(
            "[shockwave] trigger at ({:.3},{:.3}) rate={:.4} live={}",
            req.location.x,
            req.location.y,
            instance.rate,
            self.instances.len()
        );
    }

    /// Age every live instance by its rate, then drop the expired ones.
    ///
    /// `_elapsed_ms` is unused: each call advances by a fixed
    /// `speed / duration`, so playback speed follows the frame rate.
    pub fn advance(&mut self, _elapsed_ms: f32) {
        self.enforce_capacity(self.capacity);
        for instance in self.instances.iter_mut() {
            instance.step();
        }
        let before = self.instances.len();
        self.instances.retain(|s| !s.is_expired());
        let expired = before - self.instances.len();
        if expired > 0 {
            log::trace!("[shockwave] {} expired, {} live", expired, self.instances.len());
        }
    }

    /// Keep only the `k` most recently triggered instances.
    pub fn enforce_capacity(&mut self, k: usize) {
        let len = self.instances.len();
        if len > k {
            self.instances.drain(..len - k);
            log::debug!("[shockwave] capacity {} reached, evicted {} oldest", k, len - k);
        }
    }

    /// Live instances in insertion order (oldest first).
    pub fn live_instances(&self) -> &[ShockwaveInstance] {
        &self.instances
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }
}
