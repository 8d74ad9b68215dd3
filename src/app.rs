mod animate;
mod cards;
mod certificates;
mod contact;
mod dom;
mod home;
mod modal;
mod navbar;
mod projects;
mod techstack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::profile;
use animate::provide_motion;
use certificates::Certificates;
use contact::Contact;
use home::Home;
use navbar::{provide_nav, Navbar};
use projects::Projects;
use techstack::TechStack;

pub use modal::Modal;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let motion = provide_motion(profile().motion.clone());
    provide_nav(motion);

    let owner = profile().owner.clone();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Every section of the site in one scrollable document.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="bg-black text-white">
            <Navbar />
            <section id="home" class="h-screen w-full flex justify-center">
                <Home />
            </section>
            <section id="certificates" class="min-h-screen w-full text-white">
                <Certificates />
            </section>
            <section id="projects" class="min-h-screen w-full flex justify-center">
                <Projects />
            </section>
            <section id="techstack" class="min-h-screen w-full">
                <TechStack />
            </section>
            <section id="contact" class="min-h-screen w-full">
                <Contact />
            </section>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = env!("BUILD_TIME");
    let built = built.get(..10).unwrap_or(built);
    view! {
        <footer class="w-full bg-slate-900 border-t border-slate-800 py-6 text-center text-sm text-slate-500">
            {format!("© {}", profile().owner)}
            " · "
            <span title="Last deployed">{format!("built {built}")}</span>
        </footer>
    }
}
