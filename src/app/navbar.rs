use leptos::{ev::MouseEvent, prelude::*};

use super::animate::{use_elapsed, use_motion, MotionContext};
use super::dom;
use crate::content::{profile, SECTIONS};
use crate::motion::{Ease, Position, Step, Timeline, Transform};
use crate::nav::{NavSync, ScrollSample};

/// Creates the highlight synchronizer for the page. Sections other than the
/// navbar use it to request scrolls.
pub fn provide_nav(motion: MotionContext) -> RwSignal<NavSync> {
    let nav = RwSignal::new(NavSync::new(&SECTIONS, motion.config.get_value()));
    provide_context(nav);
    nav
}

pub fn use_nav() -> RwSignal<NavSync> {
    expect_context::<RwSignal<NavSync>>()
}

fn link_id(section: &str) -> String {
    format!("nav-link-{section}")
}

/// Scrolls the window to the section `id`, replacing any scroll in flight.
pub fn scroll_to_section(
    nav: RwSignal<NavSync>,
    motion: MotionContext,
    id: &str,
    duration: f64,
    ease: Ease,
) {
    let Some(top) = dom::document_top(id) else {
        log::debug!("scroll target #{id} is not in the document");
        return;
    };
    let now = motion.now.get_untracked();
    let scroll_y = dom::scroll_y();
    nav.update(|n| n.scroll_to(top, scroll_y, duration, ease, now));
}

fn entrance() -> Timeline {
    Timeline::new(500.0).add(
        "navbar",
        Step::from(
            Transform {
                y: -100.0,
                opacity: 0.0,
                ..Transform::IDENTITY
            },
            1000.0,
            Ease::power_out(3),
        ),
        Position::End,
    )
}

/// Scroll position and viewport the last geometry sample was taken against.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameKey {
    scroll_y: f64,
    width: f64,
    height: f64,
}

fn needs_sample(last: Option<FrameKey>, key: FrameKey, scrolling: bool) -> bool {
    scrolling || last != Some(key)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let motion = use_motion();
    let nav = use_nav();
    let elapsed = use_elapsed();
    let entrance = entrance();
    let last_frame = StoredValue::new(None::<FrameKey>);

    // link geometry, section regions and scroll animation, re-read only on
    // frames where something moved
    Effect::new(move |_| {
        let now = motion.now.get();
        if now <= 0.0 {
            return;
        }
        let key = FrameKey {
            scroll_y: dom::scroll_y(),
            width: motion.viewport_width.get_untracked(),
            height: motion.viewport_height.get_untracked(),
        };
        let scrolling = nav.with_untracked(|n| n.is_scrolling());
        if !needs_sample(last_frame.get_value(), key, scrolling) {
            return;
        }
        last_frame.set_value(Some(key));

        let sample = ScrollSample {
            tops: SECTIONS.iter().map(|s| dom::document_top(s.id)).collect(),
            document_end: dom::document_end(),
            scroll_y: key.scroll_y,
            viewport_height: key.height,
        };
        let boxes = SECTIONS
            .iter()
            .map(|s| dom::offset_box(&link_id(s.id)))
            .collect::<Vec<_>>();

        let mut scroll = None;
        nav.maybe_update(|n| {
            let before = (n.highlight(), n.indicator_target(), n.is_scrolling());
            for (i, link) in boxes.into_iter().enumerate() {
                n.set_link_box(i, link, now);
            }
            n.observe_scroll(&sample, now);
            scroll = n.scroll_offset(now);
            before != (n.highlight(), n.indicator_target(), n.is_scrolling())
        });
        if let Some(y) = scroll {
            dom::scroll_window_to(y);
        }
    });

    let on_link_click = move |ev: MouseEvent, id: &'static str| {
        ev.prevent_default();
        let top = dom::document_top(id);
        let scroll_y = dom::scroll_y();
        let now = motion.now.get_untracked();
        nav.update(|n| {
            if let Err(e) = n.click(id, top, scroll_y, now) {
                log::debug!("ignoring navigation click: {e}");
            }
        });
    };

    let frame_style = move || {
        elapsed
            .get()
            .map(|e| entrance.sample("navbar", 0, e).to_style())
            .unwrap_or_default()
    };
    let indicator_style = move || {
        let now = motion.now.get();
        nav.with(|n| n.indicator(now).to_style())
    };
    let menu_open = move || nav.with(|n| n.menu_open());

    let desktop_links = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let id = s.id;
            view! {
                <a
                    id=link_id(id)
                    href=format!("#{id}")
                    class="nav-link px-4 py-2 text-slate-300 transition-colors hover:text-white"
                    class:active=move || nav.with(|n| n.is_active(i))
                    class:text-white=move || nav.with(|n| n.is_active(i))
                    on:click=move |ev| on_link_click(ev, id)
                    on:mouseenter=move |_| {
                        let now = motion.now.get_untracked();
                        nav.update(|n| n.hover(i, now));
                    }
                    on:mouseleave=move |_| {
                        let now = motion.now.get_untracked();
                        nav.update(|n| n.unhover(i, now));
                    }
                >
                    {s.title}
                </a>
            }
        })
        .collect_view();

    let mobile_menu = move || {
        menu_open().then(|| {
            view! {
                <div class="md:hidden mt-4">
                    <nav class="flex flex-col items-center gap-4">
                        {SECTIONS
                            .iter()
                            .map(|s| {
                                let id = s.id;
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="w-full text-center py-3 text-lg text-slate-300 transition-colors hover:bg-slate-800/50 rounded-lg"
                                        on:click=move |ev| on_link_click(ev, id)
                                    >
                                        {s.title}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            }
        })
    };

    let bar = move |open: &'static str, closed: &'static str| {
        move || {
            let state = if menu_open() { open } else { closed };
            format!("block absolute h-0.5 w-full bg-current transform transition duration-300 ease-in-out {state}")
        }
    };

    view! {
        <header class="fixed top-4 left-1/2 -translate-x-1/2 z-50 w-[95%] max-w-5xl">
            <div
                class="relative rounded-2xl border border-slate-800 bg-slate-900/60 p-4 text-white shadow-2xl shadow-black/20 backdrop-blur-lg"
                style=frame_style
            >
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="text-2xl font-bold bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent"
                        on:click=move |ev| on_link_click(ev, "home")
                    >
                        {profile().owner.clone()}
                    </a>

                    <nav class="hidden md:flex items-center gap-2 relative">
                        {desktop_links}
                        <span
                            class="magic-line absolute bottom-0 h-0.5 bg-cyan-400 rounded-full"
                            style=indicator_style
                        />
                    </nav>

                    <div class="md:hidden">
                        <button
                            class="z-50 relative w-8 h-8 text-white"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open().to_string()
                            on:click=move |_| nav.update(|n| n.toggle_menu())
                        >
                            <span class=bar("rotate-45", "-translate-y-2")></span>
                            <span class=bar("opacity-0", "")></span>
                            <span class=bar("-rotate-45", "translate-y-2")></span>
                        </button>
                    </div>
                </div>
                {mobile_menu}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_ids() {
        assert_eq!(link_id("techstack"), "nav-link-techstack");
    }

    #[test]
    fn test_idle_frames_skip_sampling() {
        let key = FrameKey {
            scroll_y: 800.0,
            width: 1280.0,
            height: 720.0,
        };
        assert!(needs_sample(None, key, false));
        assert!(!needs_sample(Some(key), key, false));
        assert!(needs_sample(Some(key), key, true));
        let scrolled = FrameKey {
            scroll_y: 820.0,
            ..key
        };
        assert!(needs_sample(Some(key), scrolled, false));
        let resized = FrameKey { width: 800.0, ..key };
        assert!(needs_sample(Some(key), resized, false));
    }

    #[test]
    fn test_entrance_starts_above_and_settles() {
        let tl = entrance();
        let start = tl.sample("navbar", 0, 0.0);
        assert_eq!(start.y, -100.0);
        assert_eq!(start.opacity, 0.0);
        assert!(tl.sample("navbar", 0, 1500.0).is_identity());
        assert_eq!(tl.duration(), 1500.0);
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::app::animate::provide_motion;
    use crate::motion::MotionConfig;

    #[test]
    fn test_navbar_renders_every_section_link() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let motion = provide_motion(MotionConfig::default());
            provide_nav(motion);
            view! { <Navbar /> }.to_html()
        });
        for s in SECTIONS {
            assert!(html.contains(&format!("href=\"#{}\"", s.id)));
            assert!(html.contains(s.title));
        }
        assert!(html.contains("nav-link-certificates"));
        // nothing is hidden before the browser takes over
        assert!(!html.contains("opacity: 0"));
    }
}
