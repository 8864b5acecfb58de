// Server-side HTML rendering of the portfolio page.
// The page is rendered once at startup and served as-is.

pub mod html;
pub mod page;

pub use page::{render_page, CV_PATH};
