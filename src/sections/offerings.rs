use crate::content::OFFERINGS;
use leptos::prelude::*;

#[component]
pub fn Offerings() -> impl IntoView {
    view! {
        <section id="offer" class="py-20">
            <div class="mx-auto max-w-6xl px-4">
                <h2 class="text-3xl font-bold">"What We Do"</h2>
                <p class="mt-2 text-zinc-600">
                    "List 3-6 headline offers. Keep names clear and prices obvious."
                </p>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {OFFERINGS
                        .iter()
                        .enumerate()
                        .map(|(i, offering)| {
                            view! {
                                <article
                                    class="reveal rounded-2xl border bg-white h-full p-6 shadow-sm"
                                    style=format!("transition-delay: {}ms", i * 50)
                                >
                                    <h3 class="font-semibold text-lg">{offering.title}</h3>
                                    <p class="mt-3 text-sm text-zinc-700">{offering.blurb}</p>
                                    <div class="mt-4 text-sm font-semibold">{offering.price}</div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn html() -> String {
        view! { <Offerings/> }.to_html()
    }

    #[test]
    fn renders_one_card_per_offering_in_literal_order() {
        let html = html();
        assert_eq!(html.matches("<article").count(), OFFERINGS.len());
        for offering in &OFFERINGS {
            assert_eq!(html.matches(offering.title).count(), 1, "{}", offering.title);
        }
        let positions: Vec<usize> = OFFERINGS
            .iter()
            .map(|o| html.find(o.title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn cards_are_staggered_reveal_targets() {
        let html = html();
        assert_eq!(html.matches("class=\"reveal").count(), 3);
        for delay in ["transition-delay: 0ms", "transition-delay: 50ms", "transition-delay: 100ms"] {
            assert!(html.contains(delay), "missing {delay}");
        }
    }
}
