use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t">
            <div class="mx-auto max-w-6xl px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="text-sm text-zinc-500">
                    "© 2026 SPARK 618. All rights reserved."
                </div>
                <div class="flex items-center gap-4 text-sm">
                    <a href="#" aria-label="Facebook" class="p-2 rounded-full hover:bg-zinc-100">
                        "Facebook"
                    </a>
                    <a href="#" aria-label="Instagram" class="p-2 rounded-full hover:bg-zinc-100">
                        "Instagram"
                    </a>
                    <a href="#" aria-label="LinkedIn" class="p-2 rounded-full hover:bg-zinc-100">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </footer>
    }
}
