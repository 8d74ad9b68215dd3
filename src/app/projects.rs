use leptos::{html, prelude::*};

use super::animate::{
    pointer_left, pointer_moved, reveal_style, use_motion, use_reveal, use_scrub,
};
use super::cards::ProjectCard;
use crate::content::{projects, Project};
use crate::motion::{Ease, RevealPolicy, RevealSpec, Tilt, TiltSpec, Transform};

const HEADING_ID: &str = "projects-heading";
const SUBTITLE_ID: &str = "projects-subtitle";

fn card_id(index: usize) -> String {
    format!("project-card-{index}")
}

fn heading_reveal() -> RevealSpec {
    RevealSpec::new(
        Transform {
            y: 100.0,
            rotate_x: 90.0,
            opacity: 0.0,
            ..Transform::IDENTITY
        },
        1500.0,
        Ease::power_out(4),
    )
}

fn subtitle_reveal() -> RevealSpec {
    RevealSpec::new(Transform::HIDDEN, 1200.0, Ease::power_out(2)).delay(500.0)
}

fn card_reveal(index: usize) -> RevealSpec {
    RevealSpec::new(
        Transform {
            y: 120.0,
            rotate_y: 25.0,
            scale: 0.7,
            blur: 10.0,
            opacity: 0.0,
            ..Transform::IDENTITY
        },
        1400.0,
        Ease::power_out(3),
    )
    .delay(index as f64 * 200.0)
    .threshold(0.9)
    .policy(RevealPolicy::Reversible)
}

/// A project card that enters on scroll and drifts toward the pointer.
#[component]
fn AnimatedProject(index: usize, project: Project) -> impl IntoView {
    let motion = use_motion();
    let id = card_id(index);
    let reveal = use_reveal(id.clone(), card_reveal(index), 1);
    let tilt = RwSignal::new(Tilt::new(TiltSpec::PROJECT_CARD));
    let tilt_ref = NodeRef::<html::Div>::new();

    let tilt_style = move || {
        let now = motion.now.get();
        tilt.with(|t| t.current(now)).to_style()
    };

    view! {
        <div id=id class="group perspective-1000" style=reveal_style(reveal, 0)>
            <div
                node_ref=tilt_ref
                class="[transform-style:preserve-3d]"
                style=tilt_style
                on:mousemove=move |ev| {
                    if let Some(el) = tilt_ref.get_untracked() {
                        pointer_moved(motion, tilt, &el, &ev);
                    }
                }
                on:mouseleave=move |_| pointer_left(motion, tilt)
            >
                <div class="relative p-1 rounded-2xl bg-gradient-to-br from-emerald-500/30 via-teal-500/20 to-cyan-500/30 backdrop-blur-sm border border-white/10 hover:border-emerald-400/50 transition-colors duration-500">
                    <div class="bg-gray-800/80 backdrop-blur-sm rounded-xl p-6 h-full">
                        <ProjectCard project />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let heading = use_reveal(HEADING_ID, heading_reveal(), 1);
    let subtitle = use_reveal(SUBTITLE_ID, subtitle_reveal(), 1);
    let decor_style = use_scrub("projects", -50.0);

    view! {
        <div class="min-h-screen w-full bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900 text-white px-6 py-20 relative overflow-hidden">
            <div class="absolute inset-0 opacity-30" style=decor_style>
                <div class="absolute top-20 left-10 w-72 h-72 bg-emerald-500/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute top-60 right-20 w-96 h-96 bg-teal-400/15 rounded-full blur-3xl animate-pulse [animation-delay:1s]"></div>
                <div class="absolute bottom-20 left-1/3 w-80 h-80 bg-cyan-500/20 rounded-full blur-3xl animate-pulse [animation-delay:2s]"></div>
            </div>

            <div class="absolute inset-0 opacity-10">
                <div class="absolute inset-0 [background-image:radial-gradient(circle_at_1px_1px,rgba(255,255,255,0.3)_1px,transparent_0)] [background-size:50px_50px]"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h1
                        id=HEADING_ID
                        class="text-6xl md:text-8xl font-black mb-6 tracking-tight"
                        style=reveal_style(heading, 0)
                    >
                        <span class="bg-gradient-to-r from-emerald-400 via-teal-400 to-cyan-400 bg-clip-text text-transparent drop-shadow-lg">
                            "My Work"
                        </span>
                    </h1>
                    <div class="overflow-hidden">
                        <p
                            id=SUBTITLE_ID
                            class="text-xl md:text-2xl text-gray-300 max-w-3xl mx-auto leading-relaxed font-light"
                            style=reveal_style(subtitle, 0)
                        >
                            "Crafting digital experiences that blend creativity with cutting-edge technology"
                        </p>
                    </div>
                    <div class="mt-8 flex justify-center">
                        <div class="w-24 h-1 bg-gradient-to-r from-emerald-400 to-cyan-400 rounded-full"></div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-8 lg:gap-12">
                    {projects()
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, project)| view! { <AnimatedProject index project /> })
                        .collect_view()}
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-gray-900 to-transparent pointer-events-none"></div>
        </div>
    }
}
