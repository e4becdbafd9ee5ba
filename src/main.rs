// SPARK 618 one-page site — Leptos 0.8 Edition

mod content;
mod reveal;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
    reveal::observe_all();
}

#[component]
fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white text-zinc-900">
            <Nav />
            <main>
                <Hero />
                <About />
                <Offerings />
                <Gallery />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn page() -> String {
        view! { <App/> }.to_html()
    }

    #[test]
    fn renders_one_header_one_hero_one_footer() {
        let html = page();
        assert_eq!(html.matches("<header").count(), 1);
        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches("<footer").count(), 1);
    }

    #[test]
    fn sections_appear_in_document_order() {
        let html = page();
        // one distinctive string per section, none of which occurs in the nav
        let anchors = [
            "Igniting Opportunity in Southern Illinois",
            "Fast Facts",
            "Micro-Grocery + Coffee Station",
            "/g1.jpg",
            "What People Say",
            "What do you need?",
            "All rights reserved",
        ];
        let positions: Vec<usize> = anchors
            .iter()
            .map(|a| html.find(a).unwrap_or_else(|| panic!("missing anchor: {a}")))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "sections out of order: {positions:?}"
        );
    }

    #[test]
    fn every_animated_element_starts_in_its_initial_state() {
        let html = page();
        // 2 hero blocks + 3 offering cards + 4 gallery images
        assert_eq!(html.matches("class=\"reveal").count(), 9);
        // the final state is only ever reached through the observer
        assert_eq!(html.matches(reveal::VISIBLE_CLASS).count(), 0);
    }
}
