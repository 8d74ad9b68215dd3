use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
use leptos_use::{use_media_query, use_window_size, UseWindowSizeReturn};

use super::dom;
use crate::motion::{scrub_progress, MotionConfig, Reveal, RevealSpec};
use crate::observer::{Observer, Point};

/// Animation settings and the shared frame clock. Created once by `App`.
#[derive(Debug, Clone, Copy)]
pub struct MotionContext {
    pub config: StoredValue<MotionConfig>,
    pub enabled: Signal<bool>,
    /// Timestamp of the current animation frame, 0 until the first frame.
    pub now: ReadSignal<f64>,
    pub viewport_width: Signal<f64>,
    pub viewport_height: Signal<f64>,
}

pub fn provide_motion(config: MotionConfig) -> MotionContext {
    let (now, set_now) = signal(0.0);

    #[cfg(feature = "hydrate")]
    {
        let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| set_now.set(args.timestamp));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_now;

    let UseWindowSizeReturn { width, height } = use_window_size();
    let reduced = use_media_query("(prefers-reduced-motion: reduce)");
    let wanted = config.enabled;
    let enabled = Signal::derive(move || wanted && !reduced.get());

    let ctx = MotionContext {
        config: StoredValue::new(config),
        enabled,
        now,
        viewport_width: width,
        viewport_height: height,
    };
    provide_context(ctx);
    ctx
}

pub fn use_motion() -> MotionContext {
    expect_context::<MotionContext>()
}

/// Milliseconds since the first animation frame after mount, `None` before
/// that or when motion is turned off.
pub fn use_elapsed() -> Signal<Option<f64>> {
    let motion = use_motion();
    let started = RwSignal::new(None::<f64>);
    Effect::new(move |_| {
        let now = motion.now.get();
        if now > 0.0 && started.get_untracked().is_none() {
            started.set(Some(now));
        }
    });
    Signal::derive(move || {
        if !motion.enabled.get() {
            return None;
        }
        started.get().map(|s| motion.now.get() - s)
    })
}

/// A reveal driven by the element with id `trigger`.
pub fn use_reveal(trigger: impl Into<String>, spec: RevealSpec, count: usize) -> RwSignal<Reveal> {
    let trigger = trigger.into();
    let motion = use_motion();
    let reveal = RwSignal::new(Reveal::new(spec, count));
    Effect::new(move |_| {
        let now = motion.now.get();
        if !motion.enabled.get() {
            reveal.maybe_update(|r| {
                if r.is_enabled() {
                    *r = Reveal::disabled(spec, count);
                    true
                } else {
                    false
                }
            });
            return;
        }
        // an element that isn't there leaves the content as rendered
        let Some(top) = dom::viewport_top(&trigger) else {
            return;
        };
        let vh = motion.viewport_height.get_untracked();
        reveal.maybe_update(|r| r.observe_top(top, vh, now));
    });
    reveal
}

pub fn reveal_style(reveal: RwSignal<Reveal>, index: usize) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let motion = use_motion();
    move || {
        let now = motion.now.get();
        reveal.with(|r| r.item(index, now).to_style())
    }
}

/// Vertical parallax of a decorative layer while the element with id
/// `container` scrolls past.
pub fn use_scrub(container: &'static str, y_percent: f64) -> Signal<String> {
    let motion = use_motion();
    let progress = RwSignal::new(0.0);
    Effect::new(move |_| {
        motion.now.track();
        if !motion.enabled.get() {
            return;
        }
        let Some(bounds) = dom::bounds_of(container) else {
            return;
        };
        let p = scrub_progress(bounds.top, bounds.height, motion.viewport_height.get_untracked());
        if (p - progress.get_untracked()).abs() > 1e-4 {
            progress.set(p);
        }
    });
    Signal::derive(move || {
        let p = progress.get();
        if p <= 0.0 {
            String::new()
        } else {
            format!("transform: translateY({:.2}%);", p * y_percent)
        }
    })
}

/// Feeds a pointer move over `el` to the observer in `target`.
pub fn pointer_moved<O>(
    motion: MotionContext,
    target: RwSignal<O>,
    el: &web_sys::Element,
    ev: &web_sys::MouseEvent,
) where
    O: Observer + Send + Sync + 'static,
{
    if !motion.enabled.get_untracked() {
        return;
    }
    let bounds = dom::bounds(el);
    let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
    let now = motion.now.get_untracked();
    target.update(|o| o.pointer_moved(pointer, bounds, now));
}

pub fn pointer_left<O>(motion: MotionContext, target: RwSignal<O>)
where
    O: Observer + Send + Sync + 'static,
{
    let now = motion.now.get_untracked();
    target.update(|o| o.pointer_left(now));
}
