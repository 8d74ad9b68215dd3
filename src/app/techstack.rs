use leptos::prelude::*;

use super::animate::{reveal_style, use_reveal};
use super::cards::TechCard;
use crate::content::{rows, techs, Tech};
use crate::motion::{Ease, RevealPolicy, RevealSpec, Stagger, Transform};

const TITLE_ID: &str = "techstack-title";
const ROW_SIZE: usize = 2;

fn row_id(index: usize) -> String {
    format!("tech-row-{index}")
}

fn title_reveal() -> RevealSpec {
    RevealSpec::new(
        Transform {
            y: 50.0,
            opacity: 0.0,
            ..Transform::IDENTITY
        },
        1000.0,
        Ease::power_out(3),
    )
}

/// Even rows slide in from the left, odd rows from the right.
fn row_reveal(index: usize) -> RevealSpec {
    let direction = if index % 2 == 0 { -1.0 } else { 1.0 };
    RevealSpec::new(
        Transform {
            x: 300.0 * direction,
            opacity: 0.0,
            ..Transform::IDENTITY
        },
        800.0,
        Ease::power_out(2),
    )
    .stagger(Stagger::Each(150.0))
    .threshold(0.8)
    .policy(RevealPolicy::Reversible)
}

#[component]
fn TechRow(index: usize, techs: Vec<Tech>) -> impl IntoView {
    let id = row_id(index);
    let reveal = use_reveal(id.clone(), row_reveal(index), techs.len());
    view! {
        <div id=id class="tech-row grid grid-cols-1 md:grid-cols-2 gap-8">
            {techs
                .into_iter()
                .enumerate()
                .map(|(i, tech)| {
                    view! {
                        <div class="tech-card-item" style=reveal_style(reveal, i)>
                            <TechCard tech />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn TechStack() -> impl IntoView {
    let title = use_reveal(TITLE_ID, title_reveal(), 1);

    view! {
        <div class="relative min-h-screen w-full overflow-hidden bg-slate-900 py-20 px-4 sm:px-8">
            <div class="absolute top-0 left-0 w-96 h-96 bg-cyan-500/20 rounded-full blur-3xl opacity-50"></div>
            <div class="absolute bottom-1/2 right-0 w-96 h-96 bg-teal-500/20 rounded-full blur-3xl opacity-50"></div>

            <div class="relative z-10 mx-auto max-w-4xl">
                <div class="text-center mb-16">
                    <h2
                        id=TITLE_ID
                        class="text-5xl md:text-6xl font-black tracking-tight"
                        style=reveal_style(title, 0)
                    >
                        <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                            "Tools of the Trade"
                        </span>
                    </h2>
                </div>

                <div class="flex flex-col gap-8">
                    {rows(techs(), ROW_SIZE)
                        .into_iter()
                        .enumerate()
                        .map(|(index, techs)| view! { <TechRow index techs /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
