/// HTML rendering for the interactive recommendation form.
use assessment_common::model::Recommendation;

const TITLE: &str = "Assessment Recommender";

/// Renders the form, and the results table when a query was submitted.
///
/// `results` is `None` when no query has been run yet.
pub fn render(query: &str, results: Option<&[Recommendation]>) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
</head>
<body>
<h1>{TITLE}</h1>
<p>Paste a job description, natural language query, or assessment URL to get relevant recommendations.</p>
<form method="get" action="/ui">
<label for="query">Enter Job Description / Query / Assessment URL</label><br>
<textarea id="query" name="query" rows="8" cols="100">{}</textarea><br>
<button type="submit">Get Recommendations</button>
</form>
"#,
        escape(query)
    );

    match results {
        None => {}
        Some([]) => html.push_str("<p class=\"warning\">No matching assessments found.</p>\n"),
        Some(results) => render_table(&mut html, results),
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_table(html: &mut String, results: &[Recommendation]) {
    html.push_str(
        "<h2>Top Matching Assessments</h2>\n<table>\n<thead><tr>\
         <th>Title</th><th>Link</th><th>Duration (min)</th>\
         <th>Remote</th><th>Adaptive</th><th>Test Types</th>\
         </tr></thead>\n<tbody>\n",
    );

    for rec in results {
        let duration = rec
            .duration
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&rec.record.title),
            link_cell(&rec.record.link),
            duration,
            yes_no(rec.record.remote_testing),
            yes_no(rec.record.adaptive_irt),
            escape(&rec.record.test_types.join(", ")),
        ));
    }

    html.push_str("</tbody>\n</table>\n");
}

/// Only http(s) links become anchors; anything else is shown as plain text.
fn link_cell(link: &str) -> String {
    let text = escape(link);
    let lowered = link.trim_start().to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        format!("<a href=\"{text}\">{text}</a>")
    } else {
        text
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
