// Declarative entrance animations for page sections and the tween state that
// evaluates them. DOM access lives in the web-side driver; everything here is
// plain data and arithmetic.

/// Visual state written to an element: opacity plus a vertical offset in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Pose {
    pub const HIDDEN_LOW: Pose = Pose {
        opacity: 0.0,
        offset_y: 30.0,
    };
    pub const CARD_START: Pose = Pose {
        opacity: 0.0,
        offset_y: 60.0,
    };
    pub const TRANSPARENT: Pose = Pose {
        opacity: 0.0,
        offset_y: 0.0,
    };
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
    };

    #[inline]
    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
        }
    }
}

/// Named easing curve of a table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Cubic ease-out: fast start, gentle settle.
    Power3Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Fires as soon as the controller starts.
    Immediate,
    /// Fires when the top edge of the first element matching the selector
    /// reaches the vertical centre of the viewport.
    TopReachesCenter(&'static str),
}

impl Trigger {
    /// `trigger_top` is the trigger element's top edge relative to the
    /// viewport; `None` means the element is absent and can never fire.
    #[inline]
    pub fn crossed(self, trigger_top: Option<f64>, viewport_height: f64) -> bool {
        match self {
            Trigger::Immediate => true,
            Trigger::TopReachesCenter(_) => match trigger_top {
                Some(top) => top <= viewport_height * 0.5,
                None => false,
            },
        }
    }

    #[inline]
    pub fn selector(self) -> Option<&'static str> {
        match self {
            Trigger::Immediate => None,
            Trigger::TopReachesCenter(sel) => Some(sel),
        }
    }
}

/// One entry of the entrance-animation table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    /// Selector for the animated elements (all matches are animated).
    pub targets: &'static str,
    pub trigger: Trigger,
    pub from: Pose,
    pub to: Pose,
    /// Seconds per element.
    pub duration: f32,
    /// Seconds before the first element starts.
    pub delay: f32,
    /// Extra seconds added per element index.
    pub stagger: f32,
    pub ease: Ease,
}

impl RevealSpec {
    /// Seconds from firing until the last of `count` elements settles.
    pub fn total_duration(&self, count: usize) -> f32 {
        let last = count.saturating_sub(1) as f32;
        self.delay + self.stagger * last + self.duration
    }

    /// Whether the entry moves its elements vertically. Fade-only entries
    /// must leave the element's `transform` untouched.
    #[inline]
    pub fn animates_offset(&self) -> bool {
        self.from.offset_y != self.to.offset_y
    }

    /// Pose of element `index`, `elapsed` seconds after firing.
    pub fn pose_at(&self, index: usize, elapsed: f32) -> Pose {
        let start = self.delay + self.stagger * index as f32;
        let t = if self.duration > 0.0 {
            (elapsed - start) / self.duration
        } else if elapsed >= start {
            1.0
        } else {
            0.0
        };
        self.from.lerp(self.to, self.ease.apply(t))
    }
}

pub const ENTRANCE_ANIMATIONS: [RevealSpec; 6] = [
    RevealSpec {
        targets: ".hero-content",
        trigger: Trigger::Immediate,
        from: Pose::HIDDEN_LOW,
        to: Pose::SETTLED,
        duration: 1.0,
        delay: 0.5,
        stagger: 0.0,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".feature-card",
        trigger: Trigger::TopReachesCenter(".features"),
        from: Pose::CARD_START,
        to: Pose::SETTLED,
        duration: 0.8,
        delay: 0.0,
        stagger: 0.2,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".showcase-content",
        trigger: Trigger::TopReachesCenter(".showcase"),
        from: Pose::HIDDEN_LOW,
        to: Pose::SETTLED,
        duration: 1.0,
        delay: 0.0,
        stagger: 0.0,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".mockup",
        trigger: Trigger::TopReachesCenter(".showcase"),
        from: Pose::TRANSPARENT,
        to: Pose::SETTLED,
        duration: 1.0,
        delay: 0.3,
        stagger: 0.0,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".testimonial-card",
        trigger: Trigger::TopReachesCenter(".testimonials"),
        from: Pose::CARD_START,
        to: Pose::SETTLED,
        duration: 0.8,
        delay: 0.0,
        stagger: 0.2,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".pricing-card",
        trigger: Trigger::TopReachesCenter(".pricing"),
        from: Pose::CARD_START,
        to: Pose::SETTLED,
        duration: 0.8,
        delay: 0.0,
        stagger: 0.2,
        ease: Ease::Power3Out,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    Armed,
    Playing { started_at: f64 },
    Finished,
}

/// Tween state for one table entry over `element_count` elements.
/// Fires at most once; there is no path back to `Armed`.
#[derive(Clone, Debug)]
pub struct RevealTrack {
    pub spec: RevealSpec,
    pub element_count: usize,
    pub phase: RevealPhase,
}

impl RevealTrack {
    pub fn new(spec: RevealSpec, element_count: usize) -> Self {
        Self {
            spec,
            element_count,
            phase: RevealPhase::Armed,
        }
    }

    /// Fire if armed and the trigger has been crossed. Returns true only on
    /// the call that fires.
    pub fn check_trigger(
        &mut self,
        trigger_top: Option<f64>,
        viewport_height: f64,
        now: f64,
    ) -> bool {
        if self.phase != RevealPhase::Armed {
            return false;
        }
        if !self.spec.trigger.crossed(trigger_top, viewport_height) {
            return false;
        }
        self.phase = RevealPhase::Playing { started_at: now };
        true
    }

    /// Pose of element `index` at time `now` (seconds, same clock as `check_trigger`).
    pub fn pose(&self, index: usize, now: f64) -> Pose {
        match self.phase {
            RevealPhase::Armed => self.spec.from,
            RevealPhase::Playing { started_at } => {
                self.spec.pose_at(index, (now - started_at).max(0.0) as f32)
            }
            RevealPhase::Finished => self.spec.to,
        }
    }

    /// Move a playing track to `Finished` once its last element has settled.
    pub fn advance(&mut self, now: f64) {
        if let RevealPhase::Playing { started_at } = self.phase {
            let total = self.spec.total_duration(self.element_count) as f64;
            if now - started_at >= total {
                self.phase = RevealPhase::Finished;
            }
        }
    }

    /// Jump straight to the final pose, e.g. when the trigger element is missing.
    pub fn settle(&mut self) {
        self.phase = RevealPhase::Finished;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == RevealPhase::Finished
    }

    /// Tracks with nothing to animate are done before they start.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.element_count == 0 || self.is_finished()
    }
}
