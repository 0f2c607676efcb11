//! Page composition.
//!
//! Builds the run page and its empty/error states with
//! [maud](https://maud.lambda.xyz/). All interpolation is auto-escaped, so
//! run names and config contents render as literal text no matter what
//! characters they contain.
//!
//! Everything here is a pure function of its inputs — the cursor is never
//! read or advanced from a template.

use maud::{DOCTYPE, Markup, html};
use std::path::Path;

/// Stylesheet embedded at compile time; no asset directory to ship.
const STYLE: &str = include_str!("../static/style.css");

/// Textarea dimensions for a run config: one column wider than the longest
/// line, one row taller than the line count. Recomputed per request from
/// the live file so the box always fits without scrolling.
pub fn textarea_size(config_text: &str) -> (usize, usize) {
    let mut cols = 0;
    let mut rows = 0;
    for line in config_text.lines() {
        cols = cols.max(line.chars().count());
        rows += 1;
    }
    (cols + 1, rows + 1)
}

/// The page for one run: heading, one `<img>` per chart in listing order,
/// and the config text in a sized textarea.
pub fn run_page(title: &str, chart_srcs: &[String], config_text: &str) -> Markup {
    let (cols, rows) = textarea_size(config_text);
    base_document(
        title,
        html! {
            h1 { (title) }
            div #wrapper {
                section #charts {
                    @for src in chart_srcs {
                        img src=(src) alt="";
                    }
                }
                section #model {
                    textarea cols=(cols) rows=(rows) readonly { (config_text) }
                }
            }
        },
    )
}

/// Shown when the run root has no run directories yet.
pub fn empty_page(root: &Path) -> Markup {
    base_document(
        "No runs available",
        html! {
            h1 { "No runs available" }
            p {
                "There are no run directories under "
                code { (root.display()) }
                " yet. Start a batch run and reload."
            }
        },
    )
}

/// Diagnostic page for a request that failed reading run contents.
pub fn error_page(detail: &str) -> Markup {
    base_document(
        "Error reading run output",
        html! {
            h1 { "Error reading run output" }
            p { (detail) }
            p { "The rotation has moved on; reload for the next run." }
        },
    )
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style { (STYLE) }
            }
            body {
                (content)
            }
        }
    }
}
