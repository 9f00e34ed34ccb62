use std::time::{Duration, Instant};

/// Default duration for overlay show/hide animations.
pub const DEFAULT_ANIM_DURATION: Duration = Duration::from_millis(300);

/// Easing function for animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Timing configuration for a single animation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::new(DEFAULT_ANIM_DURATION, Easing::EaseInOut)
    }
}

/// A single in-flight animation run.
#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    from: f32,
    to: f32,
    start: Instant,
    spec: AnimationSpec,
}

impl ActiveAnimation {
    fn progress(&self, now: Instant) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.duration_since(self.start);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            // Avoid float drift at the endpoint.
            return self.to;
        }
        lerp(self.from, self.to, self.spec.easing.apply(progress))
    }

    fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A continuously animatable scalar with snap and animate-to operations.
///
/// At most one animation is in flight; starting a new one replaces it,
/// picking up from the current interpolated value (last caller wins).
/// The value advances against wall time and is read lazily, so there is
/// no per-frame bookkeeping beyond an occasional `tick` to commit
/// completed runs.
#[derive(Debug, Clone)]
pub struct Animatable {
    value: f32,
    active: Option<ActiveAnimation>,
}

impl Animatable {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            active: None,
        }
    }

    /// Set the value immediately, cancelling any in-flight animation.
    pub fn snap_to(&mut self, value: f32) {
        self.active = None;
        self.value = value;
    }

    /// Animate from the current instantaneous value toward `target`,
    /// replacing any in-flight animation.
    pub fn animate_to(&mut self, target: f32, spec: AnimationSpec) {
        let now = Instant::now();
        let from = self.value_at(now);
        self.value = from;
        self.active = Some(ActiveAnimation {
            from,
            to: target,
            start: now,
            spec,
        });
    }

    /// Instantaneous value at `now`. Exactly the target once the run has
    /// completed.
    pub fn value_at(&self, now: Instant) -> f32 {
        match &self.active {
            Some(active) => active.value_at(now),
            None => self.value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value_at(Instant::now())
    }

    /// The value this animatable is heading toward (or resting at).
    pub fn target(&self) -> f32 {
        self.active.map_or(self.value, |active| active.to)
    }

    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.active.is_some_and(|active| !active.finished(now))
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating_at(Instant::now())
    }

    /// Commit and prune a completed animation run.
    pub fn tick(&mut self, now: Instant) {
        if let Some(active) = self.active {
            if active.finished(now) {
                self.value = active.to;
                self.active = None;
            }
        }
    }
}

/// Linear interpolation between two values.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
