// Page sections, in document order.

mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod nav;
mod offerings;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use nav::Nav;
pub use offerings::Offerings;
pub use testimonials::Testimonials;
