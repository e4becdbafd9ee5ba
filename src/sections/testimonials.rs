use crate::content::TESTIMONIAL_SLOTS;
use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="mx-auto max-w-6xl px-4">
                <h2 class="text-3xl font-bold">"What People Say"</h2>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {TESTIMONIAL_SLOTS
                        .iter()
                        .map(|_| {
                            view! {
                                <figure class="rounded-2xl border bg-white p-6 shadow-sm">
                                    <blockquote class="text-sm text-zinc-700">
                                        "“Short, real quote about the win you delivered.”"
                                    </blockquote>
                                    <figcaption class="mt-3 text-sm font-semibold">
                                        "— NAME, Title"
                                    </figcaption>
                                </figure>
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

    #[test]
    fn renders_exactly_three_cards() {
        let html = view! { <Testimonials/> }.to_html();
        assert_eq!(html.matches("<figure").count(), 3);
    }
}
