use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-zinc-900 text-zinc-100">
            <div class="mx-auto max-w-6xl px-4 grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h2 class="text-3xl font-bold">"Let’s talk"</h2>
                    <p class="mt-3 text-zinc-300 max-w-prose">
                        "One sentence on the best way to reach you and typical response time. "
                        "Be clear about hours."
                    </p>
                    <div class="mt-6 space-y-3 text-sm">
                        <div>
                            "✉ "
                            <a href="mailto:you@email.com" class="hover:underline">"you@email.com"</a>
                        </div>
                        <div>
                            "☎ "
                            <a href="tel:+1" class="hover:underline">"(xxx) xxx-xxxx"</a>
                        </div>
                        <div>"📍 Carbondale • Illinois"</div>
                    </div>
                </div>
                <div class="rounded-2xl border border-zinc-700 bg-white text-zinc-900 shadow-sm">
                    <div class="p-6 pb-0">
                        <h3 class="font-semibold text-lg">"Quick Inquiry"</h3>
                    </div>
                    <div class="p-6">
                        // Replace this with your form provider (Tally/Typeform/ConvertKit/etc.)
                        <form class="space-y-3">
                            <input class="w-full border rounded-xl px-3 py-2" placeholder="Name" />
                            <input class="w-full border rounded-xl px-3 py-2" placeholder="Email" />
                            <textarea
                                class="w-full border rounded-xl px-3 py-2"
                                rows="4"
                                placeholder="What do you need?"
                            ></textarea>
                            <button
                                type="button"
                                class="rounded-2xl w-full bg-zinc-900 px-4 py-2 font-medium text-white hover:bg-zinc-700"
                            >
                                "Send"
                            </button>
                        </form>
                    </div>
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
        view! { <Contact/> }.to_html()
    }

    #[test]
    fn renders_three_fields_and_a_send_button() {
        let html = html();
        assert_eq!(html.matches("<input").count(), 2);
        assert_eq!(html.matches("<textarea").count(), 1);
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("Send"));
    }

    #[test]
    fn submission_is_a_deliberate_no_op() {
        let html = html();
        // no handler, no submit type, no form action: activating the
        // control neither navigates nor sends anything
        assert!(html.contains(r#"type="button""#));
        assert!(!html.contains(r#"type="submit""#));
        assert!(!html.contains("action="));
    }
}
