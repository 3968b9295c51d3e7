pub mod file;
pub mod naming;
pub mod logging;

pub use file::{file_url, sorted_entries};
pub use naming::{escape_css_string, escape_html, natural_cmp};
pub use logging::init_logging;
