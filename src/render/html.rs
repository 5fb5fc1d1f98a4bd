// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML page: input controls on the left, results on the right

use ammonia::clean_text;
use std::fmt::Write as _;

use super::{NoticeLevel, Preview, Rendered};

const PAGE_TITLE: &str = "Image Recognition";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
.columns { display: flex; gap: 2rem; align-items: flex-start; }
.input { flex: 1; }
.output { flex: 2; }
label { display: block; margin: .75rem 0 .25rem; }
input[type=text] { width: 100%; box-sizing: border-box; }
button { margin-top: 1rem; }
figure { margin: 1rem 0; }
figure img { max-width: 100%; }
.notice { padding: .75rem 1rem; border-radius: .25rem; }
.notice-error { background: #fde2e1; }
.notice-warning { background: #fff4d6; }
.notice-info { background: #e3f0fd; }
table.labels { border-collapse: collapse; }
table.labels th, table.labels td { border: 1px solid #ccc; padding: .25rem .75rem; }
table.labels td.score { text-align: right; font-variant-numeric: tabular-nums; }
.bar-chart rect { fill: #4c78a8; }
.bar-chart text { font-size: 12px; }
.bar-chart .axis { stroke: #888; }
"#;

/// Everything the page shows for one request
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// URL to echo back into the text box
    pub url: Option<String>,
    pub preview: Option<Preview>,
    /// Warning raised while acquiring input
    pub input_warning: Option<String>,
    /// None until analysis is triggered
    pub rendered: Option<Rendered>,
}

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Error => "notice notice-error",
        NoticeLevel::Warning => "notice notice-warning",
        NoticeLevel::Info => "notice notice-info",
    }
}

fn write_notice(out: &mut String, level: NoticeLevel, message: &str) {
    let _ = write!(
        out,
        r#"<div class="{}" role="status">{}</div>"#,
        notice_class(level),
        clean_text(message)
    );
}

fn write_output(out: &mut String, rendered: &Rendered) {
    match rendered {
        Rendered::Notice { level, message } => write_notice(out, *level, message),
        Rendered::Table { table, chart } => {
            out.push_str(r#"<table class="labels"><thead><tr>"#);
            for column in table.columns {
                let _ = write!(out, "<th>{}</th>", column);
            }
            out.push_str("</tr></thead><tbody>");
            for row in &table.rows {
                let _ = write!(
                    out,
                    r#"<tr><td>{}</td><td class="score">{:.4}</td></tr>"#,
                    clean_text(&row.label),
                    row.score
                );
            }
            out.push_str("</tbody></table>");
            let _ = write!(out, r#"<figure class="chart">{}</figure>"#, chart.to_svg());
        }
    }
}

pub fn render_page(view: &PageView) -> String {
    let mut out = String::with_capacity(4096);

    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>{title}</title><style>{style}</style></head><body><h1>{title}</h1><div class="columns">"#,
        title = PAGE_TITLE,
        style = STYLE,
    );

    out.push_str(r#"<section class="input"><h2>Image input</h2>"#);
    let _ = write!(
        out,
        r#"<form method="post" action="/analyze" enctype="multipart/form-data"><label for="file">Upload an image file</label><input id="file" type="file" name="file" accept="image/*"><label for="url">Or enter an image URL</label><input id="url" type="text" name="url" value="{}"><button type="submit">Analyze</button></form>"#,
        clean_text(view.url.as_deref().unwrap_or(""))
    );

    if let Some(warning) = &view.input_warning {
        write_notice(&mut out, NoticeLevel::Warning, warning);
    }

    if let Some(preview) = &view.preview {
        let _ = write!(
            out,
            r#"<figure class="preview"><img src="{}" alt="{caption}"><figcaption>{caption}</figcaption></figure>"#,
            preview.data_url,
            caption = clean_text(&preview.caption),
        );
    }
    out.push_str("</section>");

    out.push_str(r#"<section class="output"><h2>Results</h2>"#);
    if let Some(rendered) = &view.rendered {
        write_output(&mut out, rendered);
    }
    out.push_str("</section></div></body></html>");

    out
}
