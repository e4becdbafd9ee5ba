use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-zinc-50">
            <div class="mx-auto max-w-6xl px-4 grid md:grid-cols-3 gap-10 items-start">
                <div class="md:col-span-2">
                    <h2 class="text-3xl font-bold">"About"</h2>
                    <p class="mt-4 text-zinc-700 leading-relaxed">
                        "Drop your straight-talk origin story here. What problem are you obsessed "
                        "with? What makes your approach different? Who do you serve? Keep it "
                        "punchy; no fluff."
                    </p>
                </div>
                <div class="rounded-2xl border bg-white shadow-sm">
                    <div class="p-6 pb-0">
                        <h3 class="font-semibold text-lg">"Fast Facts"</h3>
                    </div>
                    <div class="p-6 text-sm text-zinc-700 space-y-2">
                        <div>"• Founded: 2025"</div>
                        <div>"• Based in: Carbondale, Illinois"</div>
                        <div>"• Status: PILOT"</div>
                        <div>"• Accepts: Card-only + EBT/Link/SNAP"</div>
                        <div>"• Hours: Daily 6am-10pm"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
