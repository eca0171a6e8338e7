pub mod formatter;

pub use formatter::{format_report_list_markdown, format_report_markdown};
