//! Value objects - Immutable objects defined by their attributes

mod email;
mod full_name;
mod page;

pub use email::Email;
pub use full_name::FullName;
pub use page::{Page, MAX_PAGE_VALUE};
