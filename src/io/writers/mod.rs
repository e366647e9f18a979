mod html;
mod json;
mod terminal;

pub use html::{render_error_page, render_html, HtmlWriter, DEFAULT_TEMPLATE};
pub use json::JsonWriter;
pub use terminal::TerminalWriter;
