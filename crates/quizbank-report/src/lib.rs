//! quizbank-report: HTML result pages for finished quizzes.

pub mod html;

pub use html::{generate_html, render_math, write_html_report};
