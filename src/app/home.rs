use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::animate::{use_elapsed, use_motion};
use super::navbar::{scroll_to_section, use_nav};
use crate::content::profile;
use crate::motion::{normalized_pointer, press_scale, Ease, Position, Step, Timeline, Transform, Tween};
use crate::observer::Point;

/// One full turn of the background orbs.
const ORBIT_MS: f64 = 40_000.0;
const PARALLAX_MS: f64 = 500.0;

fn entrance() -> Timeline {
    Timeline::new(200.0)
        .add(
            "background",
            Step::from(
                Transform {
                    scale: 1.2,
                    blur: 5.0,
                    ..Transform::IDENTITY
                },
                3000.0,
                Ease::power_out(2),
            ),
            Position::End,
        )
        .add(
            "orbs",
            Step::from(
                Transform {
                    scale: 0.0,
                    rotate: 180.0,
                    opacity: 0.0,
                    ..Transform::IDENTITY
                },
                2000.0,
                Ease::elastic_out(1.0, 0.3),
            )
            .staggered(2, 300.0),
            Position::Relative(-1500.0),
        )
        .add(
            "heading",
            Step::from(
                Transform {
                    y: 100.0,
                    scale: 0.8,
                    opacity: 0.0,
                    ..Transform::IDENTITY
                },
                1500.0,
                Ease::power_out(4),
            ),
            Position::Relative(-1200.0),
        )
        .add(
            "glow",
            Step::to(Transform::IDENTITY, 800.0, Ease::power_out(2)),
            Position::Relative(-500.0),
        )
        .add(
            "description",
            Step::from(
                Transform {
                    y: 50.0,
                    blur: 5.0,
                    opacity: 0.0,
                    ..Transform::IDENTITY
                },
                1200.0,
                Ease::power_out(3),
            ),
            Position::Relative(-1000.0),
        )
        .add(
            "cta",
            Step::from(
                Transform {
                    y: 60.0,
                    scale: 0.7,
                    opacity: 0.0,
                    ..Transform::IDENTITY
                },
                1000.0,
                Ease::elastic_out(1.0, 0.5),
            ),
            Position::Relative(-800.0),
        )
}

fn orbit(elapsed: f64) -> f64 {
    (elapsed.max(0.0) / ORBIT_MS * 360.0) % 360.0
}

fn glow_style(progress: f64) -> String {
    if progress <= 0.0 {
        return String::new();
    }
    format!(
        "text-shadow: 0 0 {:.1}px rgba(16, 185, 129, {:.3}), 0 0 {:.1}px rgba(16, 185, 129, {:.3});",
        20.0 * progress,
        0.8 * progress,
        40.0 * progress,
        0.6 * progress,
    )
}

fn text_drift(pointer: Point) -> Transform {
    Transform {
        x: pointer.x * -15.0,
        y: pointer.y * -10.0,
        ..Transform::IDENTITY
    }
}

fn orb_drift(pointer: Point) -> Transform {
    Transform {
        x: pointer.x * 30.0,
        y: pointer.y * 30.0,
        ..Transform::IDENTITY
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let motion = use_motion();
    let nav = use_nav();
    let elapsed = use_elapsed();
    let entrance = StoredValue::new(entrance());
    let text_parallax = RwSignal::new(Tween::settled(Transform::IDENTITY));
    let orb_parallax = RwSignal::new(Tween::settled(Transform::IDENTITY));
    let pressed_at = RwSignal::new(None::<f64>);
    let site = profile();

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        if !motion.enabled.get_untracked() {
            return;
        }
        let pointer = normalized_pointer(
            Point::new(e.client_x() as f64, e.client_y() as f64),
            motion.viewport_width.get_untracked(),
            motion.viewport_height.get_untracked(),
        );
        let now = motion.now.get_untracked();
        let ease = Ease::power_out(2);
        text_parallax.update(|t| t.retarget(now, text_drift(pointer), PARALLAX_MS, ease));
        orb_parallax.update(|t| t.retarget(now, orb_drift(pointer), PARALLAX_MS, ease));
    });

    let at = move |key: &'static str, index: usize| {
        elapsed
            .get()
            .map(|e| entrance.with_value(|tl| tl.sample(key, index, e)))
            .unwrap_or(Transform::IDENTITY)
    };
    let text_style = move |key: &'static str| {
        move || {
            let now = motion.now.get();
            at(key, 0).compose(text_parallax.get().value_at(now)).to_style()
        }
    };
    let orb_style = move |index: usize| {
        move || {
            let now = motion.now.get();
            let spin = Transform {
                rotate: elapsed.get().map(orbit).unwrap_or_default(),
                ..Transform::IDENTITY
            };
            at("orbs", index)
                .compose(orb_parallax.get().value_at(now))
                .compose(spin)
                .to_style()
        }
    };
    let cta_style = move || {
        let now = motion.now.get();
        let press = match (elapsed.get(), pressed_at.get()) {
            (Some(_), Some(at)) => press_scale(now - at),
            _ => 1.0,
        };
        at("cta", 0)
            .compose(text_parallax.get().value_at(now))
            .compose(Transform {
                scale: press,
                ..Transform::IDENTITY
            })
            .to_style()
    };
    let glow = move || {
        let p = elapsed
            .get()
            .map(|e| entrance.with_value(|tl| tl.progress("glow", 0, e)))
            .unwrap_or(1.0);
        glow_style(p)
    };

    let on_cta = move |_: ev::MouseEvent| {
        pressed_at.set(Some(motion.now.get_untracked()));
        let duration = motion.config.with_value(|c| c.cta_scroll_ms);
        scroll_to_section(nav, motion, "certificates", duration, Ease::power_in_out(3));
    };

    // muted has to be in the markup for autoplay to be allowed
    let video = format!(
        r#"<video class="w-full h-full object-cover" autoplay muted loop playsinline><source src="{}" type="video/mp4" />Your browser does not support the video tag.</video>"#,
        site.background_video
    );

    view! {
        <div class="relative w-full h-screen pt-40 overflow-hidden text-white">
            <div
                class="absolute top-0 left-0 w-full h-full z-[-3]"
                style=move || at("background", 0).to_style()
                inner_html=video
            ></div>

            <div class="absolute inset-0 z-[-2] bg-gradient-to-br from-gray-900/95 via-gray-800/90 to-gray-900/95"></div>

            <div
                class="absolute top-20 right-20 w-64 h-64 bg-gradient-to-br from-emerald-500/20 to-teal-500/20 rounded-full blur-3xl z-[-1]"
                style=orb_style(0)
            ></div>
            <div
                class="absolute bottom-20 left-20 w-80 h-80 bg-gradient-to-tr from-teal-500/15 to-cyan-500/15 rounded-full blur-3xl z-[-1]"
                style=orb_style(1)
            ></div>

            <div class="flex flex-col items-center justify-center h-full w-full px-8 md:px-16 relative z-10">
                <div class="text-center max-w-4xl">
                    <div
                        class="text-5xl md:text-7xl lg:text-8xl font-black leading-tight mb-8 tracking-tight"
                        style=text_style("heading")
                    >
                        <div class="overflow-hidden">
                            <span class="inline-block text-white drop-shadow-2xl">"Hello,"</span>
                        </div>
                        <div class="overflow-hidden mt-2">
                            <span class="inline-block text-white">
                                "I'm "
                                <span
                                    class="bg-gradient-to-r from-emerald-400 via-teal-400 to-cyan-400 bg-clip-text text-transparent font-black"
                                    style=glow
                                >
                                    {site.first_name.clone()}
                                </span>
                                "!"
                            </span>
                        </div>
                    </div>

                    <div
                        class="text-lg md:text-xl lg:text-2xl mt-8 font-light text-gray-200 leading-relaxed max-w-3xl mx-auto"
                        style=text_style("description")
                    >
                        {site.tagline.clone()}
                        " "
                        <span class="text-emerald-400 font-medium">{site.tagline_highlight.clone()}</span>
                        " "
                        {site.tagline_tail.clone()}
                    </div>

                    <button
                        class="group relative mt-10 px-10 py-5 bg-gradient-to-r from-emerald-600 via-teal-600 to-cyan-600 hover:from-emerald-500 hover:via-teal-500 hover:to-cyan-500 text-white font-semibold text-lg rounded-2xl transition-all duration-500 overflow-hidden shadow-2xl hover:shadow-emerald-500/25 border border-emerald-400/20 hover:border-emerald-400/40"
                        style=cta_style
                        on:click=on_cta
                    >
                        <span class="relative z-10 flex items-center justify-center">
                            <svg
                                class="w-6 h-6 mr-3 transform transition-transform duration-300 group-hover:translate-y-1"
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                            </svg>
                            "View My Work"
                        </span>
                        <div class="absolute inset-0 bg-gradient-to-r from-cyan-600 via-teal-600 to-emerald-600 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_sequence() {
        let tl = entrance();
        assert_eq!(tl.start_of("background"), Some(0.0));
        assert_eq!(tl.start_of("orbs"), Some(1500.0));
        assert_eq!(tl.start_of("heading"), Some(2600.0));
        assert_eq!(tl.start_of("glow"), Some(3600.0));
        assert_eq!(tl.start_of("description"), Some(3400.0));
        assert_eq!(tl.start_of("cta"), Some(3800.0));
        assert_eq!(tl.duration(), 5000.0);
    }

    #[test]
    fn test_entrance_ends_at_rest() {
        let tl = entrance();
        for (key, index) in [
            ("background", 0),
            ("orbs", 0),
            ("orbs", 1),
            ("heading", 0),
            ("description", 0),
            ("cta", 0),
        ] {
            assert!(tl.sample(key, index, tl.duration()).is_identity(), "{key}");
        }
    }

    #[test]
    fn test_content_hidden_before_its_step() {
        let tl = entrance();
        assert_eq!(tl.sample("heading", 0, 1000.0).opacity, 0.0);
        // the second orb trails the first
        let t = 200.0 + 1500.0 + 150.0;
        assert!(tl.sample("orbs", 0, t).scale > 0.0);
        assert_eq!(tl.sample("orbs", 1, t).scale, 0.0);
    }

    #[test]
    fn test_orbit_wraps() {
        assert_eq!(orbit(0.0), 0.0);
        assert_eq!(orbit(10_000.0), 90.0);
        assert_eq!(orbit(40_000.0), 0.0);
    }

    #[test]
    fn test_parallax_directions() {
        let corner = Point::new(1.0, -1.0);
        let text = text_drift(corner);
        assert_eq!((text.x, text.y), (-15.0, 10.0));
        let orb = orb_drift(corner);
        assert_eq!((orb.x, orb.y), (30.0, -30.0));
    }

    #[test]
    fn test_glow() {
        assert_eq!(glow_style(0.0), "");
        assert!(glow_style(1.0).contains("20.0px"));
    }
}
