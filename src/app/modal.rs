use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::animate::use_motion;
use crate::motion::{Ease, Position, Step, Timeline, Transform};
use crate::overlay::{should_close, OverlayEvent};

fn entrance() -> Timeline {
    Timeline::new(0.0)
        .add(
            "backdrop",
            Step::from(Transform::HIDDEN, 300.0, Ease::power_out(1)),
            Position::At(0.0),
        )
        .add(
            "panel",
            Step::from(
                Transform {
                    scale: 0.8,
                    opacity: 0.0,
                    ..Transform::IDENTITY
                },
                300.0,
                Ease::power_out(2),
            ),
            Position::At(0.0),
        )
}

/// Frame the overlay opened on. Kept while it stays open, unknown before the
/// first animation frame.
fn open_stamp(open: bool, prev: Option<f64>, now: f64) -> Option<f64> {
    if !open {
        return None;
    }
    prev.or((now > 0.0).then_some(now))
}

/// Content overlay. Renders nothing while `open` is false.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let motion = use_motion();
    let entrance = StoredValue::new(entrance());
    // read while rendering the open overlay, so the first frame is already hidden
    let opened_at = Memo::new(move |prev: Option<&Option<f64>>| {
        open_stamp(open.get(), prev.copied().flatten(), motion.now.get_untracked())
    });

    let close_on = move |event: OverlayEvent| {
        if should_close(open.get_untracked(), &event) {
            on_close.run(());
        }
    };

    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        close_on(OverlayEvent::Key(e.key()));
    });

    let sample = move |key: &'static str| {
        let now = motion.now.get();
        if !motion.enabled.get() {
            return Transform::IDENTITY;
        }
        opened_at
            .get()
            .map(|at| entrance.with_value(|tl| tl.sample(key, 0, now - at)))
            .unwrap_or(Transform::IDENTITY)
    };
    let backdrop_style = move || {
        let t = sample("backdrop");
        if t.is_identity() {
            String::new()
        } else {
            format!("opacity: {:.4};", t.opacity)
        }
    };
    let panel_style = move || sample("panel").to_style();

    move || {
        let children = children.clone();
        open.get().then(move || {
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/60"
                    style=backdrop_style
                    on:click=move |_| close_on(OverlayEvent::BackdropClick)
                >
                    <div
                        role="dialog"
                        aria-modal="true"
                        class="bg-white text-black p-6 rounded-2xl shadow-2xl max-w-lg w-[90%] relative"
                        style=panel_style
                        on:click=move |ev| {
                            ev.stop_propagation();
                            close_on(OverlayEvent::ContentClick);
                        }
                    >
                        <button
                            class="absolute top-3 right-4 text-2xl font-bold text-gray-600 hover:text-black"
                            aria-label="Close"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                close_on(OverlayEvent::CloseButton);
                            }
                        >
                            "×"
                        </button>
                        {children()}
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_runs_together() {
        let tl = entrance();
        assert_eq!(tl.duration(), 300.0);
        assert_eq!(tl.sample("backdrop", 0, 0.0).opacity, 0.0);
        let panel = tl.sample("panel", 0, 0.0);
        assert_eq!(panel.scale, 0.8);
        assert!(tl.sample("panel", 0, 300.0).is_identity());
        assert!(tl.sample("backdrop", 0, 300.0).is_identity());
    }

    #[test]
    fn test_open_stamp_starts_hidden() {
        let at = open_stamp(true, None, 1200.0);
        assert_eq!(at, Some(1200.0));
        // the opening frame samples the start of the entrance, not identity
        let panel = entrance().sample("panel", 0, 1200.0 - 1200.0);
        assert_eq!(panel.opacity, 0.0);
        assert_eq!(open_stamp(true, at, 1500.0), Some(1200.0));
        assert_eq!(open_stamp(false, at, 1600.0), None);
        assert_eq!(open_stamp(true, None, 0.0), None);
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::app::animate::provide_motion;
    use crate::motion::MotionConfig;

    fn render(open: bool) -> String {
        Owner::new().with(|| {
            provide_motion(MotionConfig::default());
            view! {
                <Modal open=Signal::stored(open) on_close=Callback::new(|_: ()| {})>
                    <p>"preview body"</p>
                </Modal>
            }
            .to_html()
        })
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        let html = render(false);
        assert!(!html.contains("preview body"));
        assert!(!html.contains("dialog"));
    }

    #[test]
    fn test_open_modal_renders_children_and_close_button() {
        let html = render(true);
        assert!(html.contains("preview body"));
        assert!(html.contains("aria-label=\"Close\""));
        assert!(!html.contains("opacity: 0"));
    }
}
