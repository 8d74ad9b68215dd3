use leptos::{ev::MouseEvent, html, prelude::*};

use super::animate::{
    pointer_left, pointer_moved, reveal_style, use_motion, use_reveal, use_scrub,
};
use super::modal::Modal;
use crate::content::{certificates, Certificate};
use crate::motion::{
    press_scale, Ease, RevealPolicy, RevealSpec, Stagger, Tilt, TiltSpec, Transform, Tween,
};

const HEADING_ID: &str = "certificates-heading";

const BADGE_PATH: &str = "M6.267 3.455a3.066 3.066 0 001.745-.723 3.066 3.066 0 013.976 0 3.066 3.066 0 001.745.723 3.066 3.066 0 012.812 2.812c.051.643.304 1.254.723 1.745a3.066 3.066 0 010 3.976 3.066 3.066 0 00-.723 1.745 3.066 3.066 0 01-2.812 2.812 3.066 3.066 0 00-1.745.723 3.066 3.066 0 01-3.976 0 3.066 3.066 0 00-1.745-.723 3.066 3.066 0 01-2.812-2.812 3.066 3.066 0 00-.723-1.745 3.066 3.066 0 010-3.976 3.066 3.066 0 00.723-1.745 3.066 3.066 0 012.812-2.812zm7.44 5.252a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";

fn heading_reveal() -> RevealSpec {
    RevealSpec::new(
        Transform {
            y: 100.0,
            rotate_x: -90.0,
            scale: 0.8,
            opacity: 0.0,
            ..Transform::IDENTITY
        },
        1500.0,
        Ease::power_out(4),
    )
    .threshold(0.9)
}

/// Starts 800 ms before the heading finishes.
fn subtitle_reveal() -> RevealSpec {
    RevealSpec::new(
        Transform {
            y: 50.0,
            opacity: 0.0,
            ..Transform::IDENTITY
        },
        1000.0,
        Ease::power_out(3),
    )
    .delay(1500.0 - 800.0)
    .threshold(0.9)
}

fn cards_reveal() -> RevealSpec {
    RevealSpec::new(
        Transform {
            y: 150.0,
            rotate_y: 45.0,
            scale: 0.8,
            blur: 10.0,
            opacity: 0.0,
            ..Transform::IDENTITY
        },
        1400.0,
        Ease::power_out(3),
    )
    .stagger(Stagger::Amount(800.0))
    .threshold(0.8)
    .policy(RevealPolicy::Reversible)
}

fn scale_style(scale: f64) -> String {
    if (scale - 1.0).abs() < 1e-6 {
        String::new()
    } else {
        format!("transform: scale({scale:.4});")
    }
}

fn opacity_style(opacity: f64) -> String {
    if opacity <= 0.0 {
        String::new()
    } else {
        format!("opacity: {:.4};", opacity.min(1.0))
    }
}

#[component]
fn CertificateCard(cert: Certificate, on_preview: Callback<Certificate>) -> impl IntoView {
    let motion = use_motion();
    let card_ref = NodeRef::<html::Div>::new();
    let tilt = RwSignal::new(Tilt::new(TiltSpec::CERTIFICATE_CARD));
    let image = RwSignal::new(Tween::settled(1.0));
    let overlay = RwSignal::new(Tween::settled(0.0));
    let pressed_at = RwSignal::new(None::<f64>);

    let hover = move |hovering: bool| {
        let now = motion.now.get_untracked();
        let animate = motion.enabled.get_untracked();
        let (scale, scale_ms, scale_ease) = if hovering {
            (1.05, 500.0, Ease::power_out(2))
        } else {
            (1.0, 700.0, Ease::elastic_out(1.0, 0.5))
        };
        let scale_ms = if animate { scale_ms } else { 0.0 };
        let fade_ms = if animate { 300.0 } else { 0.0 };
        image.update(|t| t.retarget(now, scale, scale_ms, scale_ease));
        overlay.update(|t| {
            t.retarget(now, if hovering { 1.0 } else { 0.0 }, fade_ms, Ease::power_out(2))
        });
    };

    let card_style = move || {
        let now = motion.now.get();
        let press = pressed_at
            .get()
            .filter(|_| motion.enabled.get())
            .map(|at| press_scale(now - at))
            .unwrap_or(1.0);
        tilt.with(|t| t.current(now))
            .compose(Transform {
                scale: press,
                ..Transform::IDENTITY
            })
            .to_style()
    };
    let image_style = move || {
        let now = motion.now.get();
        scale_style(image.with(|t| t.value_at(now)))
    };
    let overlay_style = move || {
        let now = motion.now.get();
        opacity_style(overlay.with(|t| t.value_at(now)))
    };

    let press = move |_: MouseEvent| pressed_at.set(Some(motion.now.get_untracked()));
    let preview = {
        let cert = cert.clone();
        move |_: MouseEvent| on_preview.run(cert.clone())
    };

    view! {
        <div class="group">
            <div
                node_ref=card_ref
                class="relative rounded-2xl overflow-hidden bg-gradient-to-br from-gray-800/90 to-gray-900/90 backdrop-blur-sm border border-emerald-500/20 hover:border-emerald-400/40 transition-colors duration-500 shadow-lg hover:shadow-2xl hover:shadow-emerald-500/25 [transform-style:preserve-3d]"
                style=card_style
                on:mouseenter=move |_| hover(true)
                on:mousemove=move |ev| {
                    if let Some(el) = card_ref.get_untracked() {
                        pointer_moved(motion, tilt, &el, &ev);
                    }
                }
                on:mouseleave=move |_| {
                    pointer_left(motion, tilt);
                    hover(false);
                }
            >
                <a
                    href=cert.link.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block relative overflow-hidden"
                    on:click=press
                >
                    <img
                        src=cert.src.clone()
                        alt=format!("{} Certificate", cert.name)
                        class="w-full h-[300px] object-contain bg-white/5"
                        style=image_style
                    />
                    <div
                        class="absolute inset-0 bg-gradient-to-t from-emerald-600/80 via-teal-500/40 to-transparent opacity-0 flex items-end justify-center p-6"
                        style=overlay_style
                    >
                        <div class="text-white text-center">
                            <svg class="w-8 h-8 mx-auto mb-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"
                                />
                            </svg>
                            <span class="text-sm font-medium">"View Certificate"</span>
                        </div>
                    </div>
                </a>

                <div class="p-6 relative">
                    <a href=cert.link.clone() target="_blank" rel="noopener noreferrer" on:click=press>
                        <h3 class="text-lg font-bold text-white mb-2 group-hover:text-emerald-300 transition-colors duration-300">
                            {cert.name.clone()}
                        </h3>
                    </a>
                    <div class="flex items-center justify-between text-emerald-400 text-sm">
                        <span class="flex items-center">
                            <svg class="w-4 h-4 mr-2" fill="currentColor" viewBox="0 0 20 20">
                                <path fill-rule="evenodd" d=BADGE_PATH clip-rule="evenodd" />
                            </svg>
                            "Verified Certificate"
                        </span>
                        <button
                            type="button"
                            class="rounded-md border border-emerald-500/40 px-3 py-1 text-xs hover:bg-emerald-500/20 transition-colors"
                            on:click=preview
                        >
                            "Preview"
                        </button>
                    </div>
                    <div class="absolute bottom-0 left-0 right-0 h-1 bg-gradient-to-r from-emerald-500 to-teal-500 transform scale-x-0 group-hover:scale-x-100 transition-transform duration-500 origin-left"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Stats(count: usize) -> impl IntoView {
    view! {
        <div class="mt-20 text-center">
            <div class="inline-flex items-center gap-8 bg-gray-800/50 backdrop-blur-sm border border-emerald-500/20 rounded-2xl px-8 py-6">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 bg-gradient-to-br from-emerald-500 to-teal-500 rounded-full flex items-center justify-center">
                        <svg class="w-6 h-6 text-white" fill="currentColor" viewBox="0 0 20 20">
                            <path fill-rule="evenodd" d=BADGE_PATH clip-rule="evenodd" />
                        </svg>
                    </div>
                    <div>
                        <div class="text-2xl font-bold text-emerald-400">{count}</div>
                        <div class="text-sm text-gray-400">"Verified Certificates"</div>
                    </div>
                </div>

                <div class="w-px h-12 bg-gradient-to-b from-transparent via-emerald-500/50 to-transparent"></div>

                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 bg-gradient-to-br from-teal-500 to-cyan-500 rounded-full flex items-center justify-center">
                        <svg class="w-6 h-6 text-white" fill="currentColor" viewBox="0 0 20 20">
                            <path d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                        </svg>
                    </div>
                    <div>
                        <div class="text-2xl font-bold text-teal-400">"100%"</div>
                        <div class="text-sm text-gray-400">"Completion Rate"</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Certificates() -> impl IntoView {
    let certs = certificates();
    let heading = use_reveal(HEADING_ID, heading_reveal(), 1);
    let subtitle = use_reveal(HEADING_ID, subtitle_reveal(), 1);
    let cards = use_reveal("certificates", cards_reveal(), certs.len());
    let decor_style = use_scrub("certificates", -30.0);

    let preview = RwSignal::new(None::<Certificate>);
    let on_preview = Callback::new(move |cert: Certificate| preview.set(Some(cert)));

    view! {
        <div class="min-h-screen w-full bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900 text-white py-20 px-8 relative overflow-hidden">
            <div class="absolute inset-0 opacity-20" style=decor_style>
                <div class="absolute top-32 left-20 w-80 h-80 bg-emerald-500/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute top-80 right-32 w-96 h-96 bg-teal-400/15 rounded-full blur-3xl animate-pulse [animation-delay:1s]"></div>
                <div class="absolute bottom-40 left-1/3 w-72 h-72 bg-cyan-500/20 rounded-full blur-3xl animate-pulse [animation-delay:2s]"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h1
                        id=HEADING_ID
                        class="text-6xl md:text-7xl font-black mb-6 tracking-tight"
                        style=reveal_style(heading, 0)
                    >
                        <span class="bg-gradient-to-r from-emerald-400 via-teal-400 to-cyan-400 bg-clip-text text-transparent drop-shadow-lg">
                            "Certifications"
                        </span>
                    </h1>
                    <p
                        class="text-xl md:text-2xl text-gray-300 max-w-3xl mx-auto leading-relaxed font-light"
                        style=reveal_style(subtitle, 0)
                    >
                        "Verified achievements showcasing continuous learning and professional development"
                    </p>
                    <div class="mt-8 flex justify-center">
                        <div class="w-24 h-1 bg-gradient-to-r from-emerald-400 to-cyan-400 rounded-full"></div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-8 lg:gap-12">
                    {certs
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <div class="perspective-1000" style=reveal_style(cards, i)>
                                    <CertificateCard cert=cert.clone() on_preview />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <Stats count=certs.len() />
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-gray-900 to-transparent pointer-events-none"></div>

            <Modal
                open=Signal::derive(move || preview.with(Option::is_some))
                on_close=Callback::new(move |_: ()| preview.set(None))
            >
                {move || {
                    preview
                        .get()
                        .map(|cert| {
                            view! {
                                <img src=cert.src alt=format!("{} Certificate", cert.name) class="w-full h-auto rounded-lg mb-4" />
                                <h3 class="text-lg font-bold mb-2">{cert.name}</h3>
                                <a
                                    href=cert.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-emerald-600 hover:underline"
                                >
                                    "Verify on Coursera"
                                </a>
                            }
                        })
                }}
            </Modal>
        </div>
    }
}
