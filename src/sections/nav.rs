use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 bg-white/80 backdrop-blur border-b">
            <div class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                <div class="font-semibold tracking-tight text-xl">"SPARK 618"</div>
                <nav class="hidden md:flex gap-6 text-sm">
                    <a href="#about" class="hover:opacity-80">"About"</a>
                    <a href="#offer" class="hover:opacity-80">"What We Do"</a>
                    <a href="#gallery" class="hover:opacity-80">"Gallery"</a>
                    <a href="#contact" class="hover:opacity-80">"Contact"</a>
                </nav>
                <a
                    href="#contact"
                    class="hidden md:inline-block rounded-2xl bg-zinc-900 px-4 py-2 text-sm font-medium text-white hover:bg-zinc-700"
                >
                    "Get in touch"
                </a>
            </div>
        </header>
    }
}
