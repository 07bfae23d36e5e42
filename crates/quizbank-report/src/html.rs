//! HTML result page generator.
//!
//! Produces a self-contained HTML file with CSS inlined. Inline math written
//! as `$...$` in questions and options is converted to `\(...\)` and
//! typeset client-side by KaTeX auto-render.

use anyhow::Result;
use std::path::Path;

use quizbank_core::report::{QuestionReview, QuizReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Convert single-dollar inline math `$...$` into `\(...\)` delimiters.
///
/// A `$` without a closing partner, or an empty `$$` pair, is left as is.
pub fn render_math(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = text;

    while let Some(open) = rest.find('$') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('$') {
            Some(0) => {
                out.push('$');
                rest = after;
            }
            Some(close) => {
                out.push_str("\\(");
                out.push_str(&after[..close]);
                out.push_str("\\)");
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Escape for HTML, then convert inline math.
fn display_text(s: &str) -> String {
    render_math(&html_escape(s))
}

/// Generate an HTML result page from a quiz report.
pub fn generate_html(report: &QuizReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>quizbank results: {}</title>\n",
        html_escape(&report.bank)
    ));
    html.push_str(KATEX_HEAD);
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>You scored {} out of {}!</h1>\n",
        report.score, report.total
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Bank: <strong>{}</strong> | {:.0}% | {}</p>\n",
        html_escape(&report.bank),
        report.ratio() * 100.0,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Review
    html.push_str("<section class=\"review\" id=\"review\">\n");
    html.push_str("<h2>Review</h2>\n");
    for item in &report.items {
        html.push_str(&review_item(item));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str(KATEX_RENDER);
    html.push_str("</body>\n</html>");
    html
}

fn review_item(item: &QuestionReview) -> String {
    let class = if item.correct { "pass" } else { "fail" };
    let mut html = format!(
        "<div class=\"question {class}\">\n<p>{}. {}</p>\n<ul>\n",
        item.number,
        display_text(&item.question)
    );

    for (key, text) in &item.options {
        let mut marks = Vec::new();
        if *key == item.correct_key {
            marks.push("correct");
        }
        if item.selected_key.as_deref() == Some(key.as_str()) {
            marks.push("selected");
        }
        let tag = if marks.is_empty() {
            String::new()
        } else {
            format!(" <em>({})</em>", marks.join(", "))
        };
        html.push_str(&format!(
            "<li class=\"{}\">{}. {}{}</li>\n",
            marks.join(" "),
            html_escape(key),
            display_text(text),
            tag
        ));
    }

    html.push_str("</ul>\n");
    if item.selected_key.is_none() {
        html.push_str("<p class=\"meta\">Not answered</p>\n");
    }
    html.push_str("</div>\n");
    html
}

/// Write an HTML result page to a file.
pub fn write_html_report(report: &QuizReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const KATEX_HEAD: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.css">
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.js"></script>
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/contrib/auto-render.min.js"></script>
"#;

const KATEX_RENDER: &str = r#"<script>
document.addEventListener('DOMContentLoaded', function () {
  if (typeof renderMathInElement === 'undefined') { return; }
  renderMathInElement(document.getElementById('review'), {
    delimiters: [
      {left: '$$', right: '$$', display: true},
      {left: '\\[', right: '\\]', display: true},
      {left: '\\(', right: '\\)', display: false}
    ],
    throwOnError: false
  });
});
</script>
"#;

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.question { border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem 1rem; margin: 1rem 0; }
.question.pass { border-left: 6px solid #22c55e; }
.question.fail { border-left: 6px solid #ef4444; }
li.correct { background: var(--pass); }
li.selected:not(.correct) { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn make_test_report() -> QuizReport {
        QuizReport {
            id: uuid::Uuid::nil(),
            created_at: chrono::Utc::now(),
            bank: "json/en/algebra.json".into(),
            score: 1,
            total: 2,
            items: vec![
                QuestionReview {
                    number: 1,
                    question: "Solve $x + 1 = 3$".into(),
                    options: options(&[("a", "$x = 2$"), ("b", "$x = 4$")]),
                    selected_key: Some("a".into()),
                    correct_key: "a".into(),
                    correct: true,
                },
                QuestionReview {
                    number: 2,
                    question: "Is 1 < 2 & 3 > 2?".into(),
                    options: options(&[("a", "yes"), ("b", "no")]),
                    selected_key: None,
                    correct_key: "a".into(),
                    correct: false,
                },
            ],
        }
    }

    #[test]
    fn math_conversion() {
        assert_eq!(render_math("What is $2+2$?"), "What is \\(2+2\\)?");
        assert_eq!(render_math("$a$ and $b$"), "\\(a\\) and \\(b\\)");
        assert_eq!(render_math("costs $5"), "costs $5");
        assert_eq!(render_math("plain text"), "plain text");
        assert_eq!(render_math("$$x$"), "$\\(x\\)");
        assert_eq!(render_math("$x$ then $"), "\\(x\\) then $");
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_html(&make_test_report());

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("You scored 1 out of 2!"));
        assert!(html.contains("json/en/algebra.json"));
        assert!(html.contains("Solve \\(x + 1 = 3\\)"));
        assert!(html.contains("renderMathInElement"));
        assert!(html.contains("Not answered"));
    }

    #[test]
    fn html_report_escapes_text() {
        let html = generate_html(&make_test_report());
        assert!(html.contains("Is 1 &lt; 2 &amp; 3 &gt; 2?"));
        assert!(!html.contains("Is 1 < 2"));
    }

    #[test]
    fn html_report_marks_answers() {
        let html = generate_html(&make_test_report());
        assert!(html.contains("<li class=\"correct selected\">a. \\(x = 2\\) <em>(correct, selected)</em></li>"));
        assert!(html.contains("<div class=\"question fail\">"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("result.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
