use crate::core::reveal::{Pose, RevealTrack, ENTRANCE_ANIMATIONS};
use crate::dom::{self, ElementList};
use crate::frame::RenderLoop;
use fnv::FnvHashMap;
use instant::Instant;
use std::ops::ControlFlow;
use web_sys as web;

struct TrackedReveal {
    track: RevealTrack,
    elements: ElementList,
    trigger: Option<web::Element>,
}

/// Fade-only tracks (`with_offset == false`) never touch `transform`, so any
/// transform from the stylesheet survives.
fn apply_pose(el: &web::HtmlElement, pose: Pose, with_offset: bool) {
    let style = el.style();
    _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
    if with_offset {
        _ = style.set_property("transform", &format!("translateY({:.2}px)", pose.offset_y));
    }
}

/// Owns the per-section tween state and writes poses to the page.
pub struct RevealController {
    tracks: Vec<TrackedReveal>,
    epoch: Instant,
}

impl RevealController {
    /// Resolve every entry of the entrance table against the document. Each
    /// trigger selector is looked up once and shared between entries.
    pub fn new(document: &web::Document) -> Self {
        let mut triggers: FnvHashMap<&'static str, Option<web::Element>> =
            FnvHashMap::default();
        let mut tracks = Vec::with_capacity(ENTRANCE_ANIMATIONS.len());
        for spec in ENTRANCE_ANIMATIONS {
            let elements = dom::query_html_all(document, spec.targets);
            let mut track = RevealTrack::new(spec, elements.len());
            let trigger = match spec.trigger.selector() {
                Some(sel) => {
                    let found = triggers
                        .entry(sel)
                        .or_insert_with(|| dom::query(document, sel))
                        .clone();
                    if found.is_none() && !elements.is_empty() {
                        log::warn!(
                            "[reveal] trigger {} missing; showing {} as-is",
                            sel,
                            spec.targets
                        );
                        track.settle();
                    }
                    found
                }
                None => None,
            };
            log::debug!("[reveal] {} x{}", spec.targets, elements.len());
            tracks.push(TrackedReveal {
                track,
                elements,
                trigger,
            });
        }
        Self {
            tracks,
            epoch: Instant::now(),
        }
    }

    /// Write the starting pose of every armed track, and the final pose of
    /// every track that settled during setup.
    pub fn prime(&self) {
        let now = self.now();
        for tr in &self.tracks {
            let with_offset = tr.track.spec.animates_offset();
            for (i, el) in tr.elements.iter().enumerate() {
                apply_pose(el, tr.track.pose(i, now), with_offset);
            }
        }
    }

    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Check triggers, write poses for playing tracks and retire finished
    /// ones. Breaks once nothing is left to animate.
    pub fn tick(&mut self) -> ControlFlow<()> {
        let now = self.now();
        let viewport_height = web::window()
            .map(|w| dom::viewport_size(&w).1)
            .unwrap_or(0.0);
        let mut all_idle = true;
        for tr in &mut self.tracks {
            if tr.track.is_idle() {
                continue;
            }
            let top = tr
                .trigger
                .as_ref()
                .map(|el| el.get_bounding_client_rect().top());
            if tr.track.check_trigger(top, viewport_height, now) {
                log::debug!("[reveal] {} fired", tr.track.spec.targets);
            }
            let with_offset = tr.track.spec.animates_offset();
            for (i, el) in tr.elements.iter().enumerate() {
                apply_pose(el, tr.track.pose(i, now), with_offset);
            }
            tr.track.advance(now);
            if tr.track.is_finished() {
                for el in &tr.elements {
                    apply_pose(el, tr.track.spec.to, with_offset);
                }
            } else {
                all_idle = false;
            }
        }
        if all_idle {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Prime the page and start the reveal loop. The loop ends on its own once
/// every section has played.
pub fn start(document: &web::Document) -> anyhow::Result<RenderLoop> {
    let mut controller = RevealController::new(document);
    controller.prime();
    RenderLoop::start(move |_| controller.tick())
}
