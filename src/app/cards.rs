use leptos::prelude::*;

use crate::content::{Project, Tech};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card bg-white p-10 rounded-2xl shadow-2xl max-w-xl hover:bg-gray-200 transition-colors duration-300 w-full text-center border-2 border-indigo-500 text-black">
            <img src=project.image().to_string() alt="Project" class="w-full h-auto rounded-lg mb-4" />
            <div class="text-lg font-semibold">{project.title().to_string()}</div>
            <p class="text-gray-600 mt-2">{project.description().to_string()}</p>
        </div>
    }
}

#[component]
pub fn TechCard(tech: Tech) -> impl IntoView {
    let Tech {
        name,
        icon,
        description,
    } = tech;
    view! {
        <div class="group relative flex h-full w-full items-center gap-6 overflow-hidden rounded-2xl border border-slate-700 bg-slate-800/80 p-6 backdrop-blur-sm transition-all duration-300 hover:scale-105 hover:border-cyan-400/60 hover:shadow-xl hover:shadow-cyan-500/20">
            // shine sweep
            <div class="absolute top-0 left-[-150%] h-full w-[50%] bg-gradient-to-r from-transparent via-white/20 to-transparent transition-all duration-700 group-hover:left-[150%] transform -skew-x-12"></div>
            <div class="flex-shrink-0 transition-transform duration-300 group-hover:scale-110">
                <span class="text-5xl">{icon}</span>
            </div>
            <div class="text-left">
                <h3 class="text-xl font-bold text-cyan-300">{name}</h3>
                <p class="mt-1 text-sm text-slate-300 font-light leading-relaxed">{description}</p>
            </div>
        </div>
    }
}
