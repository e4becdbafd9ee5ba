//! Placeholder content driving the repeated sections of the page.
//!
//! These are literals by design: edit them in place before deploying. They
//! exist only to be mapped one-to-one onto view fragments, in list order,
//! with no runtime lifecycle.

/// A single service card in the "What We Do" section.
pub struct Offering {
    pub title: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
}

pub static OFFERINGS: [Offering; 3] = [
    Offering {
        title: "Micro-Grocery + Coffee Station",
        blurb: "Healthy staples, quick necessities, and a simple hot/iced menu. \
                Cashless; accepts EBT/Link/SNAP.",
        price: "Menu pricing (TBD)",
    },
    Offering {
        title: "Afterschool / AMP Lab",
        blurb: "Safe, structured learning space with homework help and hands-on projects.",
        price: "Free or sponsored",
    },
    Offering {
        title: "Certification Pathways",
        blurb: "Short, stackable credentials in solar, weatherization, construction, \
                digital/IT, and more.",
        price: "Grant-funded / employer-sponsored",
    },
];

/// Gallery image paths, resolved by the hosting environment.
pub static GALLERY_IMAGES: [&str; 4] = ["/g1.jpg", "/g2.jpg", "/g3.jpg", "/g4.jpg"];

/// Testimonial cards are placeholder slots; only their position matters
/// until real quotes land.
pub static TESTIMONIAL_SLOTS: [u32; 3] = [1, 2, 3];
