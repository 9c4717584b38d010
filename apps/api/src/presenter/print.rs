//! Printable HTML document: the header followed by every tab as a numbered
//! section. Opens the browser's native print dialog on load; there is no
//! custom document format.

use crate::models::plan::Plan;
use crate::presenter::view::{render_header, render_tab, Block, Card, Tab};

const PRINT_STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; color: #0f172a; margin: 2rem; }
    header { border-bottom: 2px solid #2563eb; margin-bottom: 1.5rem; }
    h2 { border-bottom: 2px solid #2563eb; padding-bottom: 0.5rem; }
    .page-break { page-break-before: always; }
    .card { border: 1px solid #e2e8f0; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
    .label { font-size: 0.7rem; font-weight: 800; text-transform: uppercase; color: #94a3b8; }
    pre { white-space: pre-wrap; font-family: inherit; }
    .tag { display: inline-block; border: 1px solid #bfdbfe; padding: 0 0.4rem; margin: 0.1rem; }
"#;

pub fn render_print_document(plan: &Plan) -> String {
    let header = render_header(plan);
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - Local SEO Strategy</title>\n<style>{PRINT_STYLE}</style>\n</head>\n\
         <body onload=\"window.print()\">\n<header>\n<h1>{}</h1>\n<p>{}</p>\n</header>\n",
        escape_html(&header.title),
        escape_html(&header.title),
        escape_html(&header.subtitle),
    ));

    for (index, tab) in Tab::ALL.iter().enumerate() {
        let class = if index == 0 { "section" } else { "section page-break" };
        html.push_str(&format!(
            "<section class=\"{class}\">\n<h2>{}</h2>\n",
            escape_html(tab.print_heading())
        ));
        for card in render_tab(plan, *tab).cards {
            write_card(&mut html, &card);
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_card(html: &mut String, card: &Card) {
    html.push_str(&format!(
        "<div class=\"card\">\n<h3>{}</h3>\n",
        escape_html(card.title)
    ));
    for block in &card.blocks {
        write_block(html, block);
    }
    html.push_str("</div>\n");
}

fn write_block(html: &mut String, block: &Block) {
    match block {
        Block::List { label, items } => {
            write_label(html, *label);
            html.push_str("<ul>\n");
            for item in items {
                html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
            }
            html.push_str("</ul>\n");
        }
        Block::Snippets { label, items } => {
            write_label(html, *label);
            for item in items {
                html.push_str(&format!("<pre>{}</pre>\n", escape_html(item)));
            }
        }
        Block::Tags { label, items } => {
            write_label(html, Some(*label));
            html.push_str("<p>");
            for item in items {
                html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(item)));
            }
            html.push_str("</p>\n");
        }
        Block::Post {
            text,
            media_tip,
            keywords,
            cta,
        } => {
            html.push_str(&format!(
                "<blockquote>&quot;{}&quot;</blockquote>\n\
                 <p><strong>Media Tip:</strong> {}</p>\n\
                 <p><strong>Keywords:</strong> {}</p>\n\
                 <p><strong>Recommended CTA:</strong> {}</p>\n",
                escape_html(text),
                escape_html(media_tip),
                escape_html(keywords),
                escape_html(cta),
            ));
        }
        Block::Article {
            title,
            h2s,
            relevance,
        } => {
            html.push_str(&format!(
                "<h4>{}</h4>\n<p class=\"label\">H2s: {}</p>\n<p><em>{}</em></p>\n",
                escape_html(title),
                escape_html(h2s),
                escape_html(relevance),
            ));
        }
        Block::Note { label, text } => {
            html.push_str(&format!(
                "<p><strong>{}: {}</strong></p>\n",
                escape_html(label),
                escape_html(text)
            ));
        }
    }
}

fn write_label(html: &mut String, label: Option<&str>) {
    if let Some(label) = label {
        html.push_str(&format!("<p class=\"label\">{}</p>\n", escape_html(label)));
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
