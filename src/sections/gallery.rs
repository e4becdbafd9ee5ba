use crate::content::GALLERY_IMAGES;
use leptos::prelude::*;

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section id="gallery" class="py-20 bg-zinc-50">
            <div class="mx-auto max-w-6xl px-4">
                <h2 class="text-3xl font-bold">"Gallery"</h2>
                <p class="mt-2 text-zinc-600">"Swap these with your real photos."</p>
                <div class="mt-8 grid grid-cols-2 md:grid-cols-4 gap-4">
                    {GALLERY_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <img
                                    src=*src
                                    alt=format!("Gallery {}", i + 1)
                                    class="reveal rounded-xl h-40 w-full object-cover"
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
