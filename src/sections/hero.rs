use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden">
            <div class="mx-auto max-w-6xl px-4 py-20 grid md:grid-cols-2 gap-10 items-center">
                <div class="reveal">
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight">
                        "Igniting Opportunity in Southern Illinois"
                    </h1>
                    <p class="mt-5 text-lg text-zinc-600 max-w-prose">
                        "We run a cashless micro-grocery with an indoor coffee station that accepts "
                        "EBT/Link/SNAP, delivers healthy options + quick necessities in a food desert, "
                        "and anchors after-school learning plus certification pathways for "
                        "justice-impacted people, veterans, women, and more. Open daily 6am-10pm."
                    </p>
                    <div class="mt-8 flex gap-3">
                        <a
                            href="#offer"
                            class="rounded-2xl bg-zinc-900 px-5 py-2.5 text-sm font-medium text-white hover:bg-zinc-700"
                        >
                            "See what we offer →"
                        </a>
                        <a
                            href="#contact"
                            class="rounded-2xl border px-5 py-2.5 text-sm font-medium hover:bg-zinc-50"
                        >
                            "Contact"
                        </a>
                    </div>
                </div>
                <div class="reveal relative" style="transition-delay: 100ms">
                    // Replace with your image
                    <img src="/hero.jpg" alt="Hero" class="w-full h-80 object-cover rounded-3xl shadow-xl" />
                    <div class="absolute -bottom-4 -right-4 bg-white rounded-2xl shadow p-3 text-sm flex items-center gap-2">
                        "Add your best photo"
                    </div>
                </div>
            </div>
        </section>
    }
}
