use nd_core::header::HeaderView;
use nd_core::shell::{Pagination, Screen, LOADING_LABEL};
use nd_core::ArticleEntry;
use std::fmt::Write;

/// Plain-text rendering of a screen, used by `nd list`.
pub fn screen_to_text(screen: &Screen) -> String {
    match screen {
        Screen::Loading => LOADING_LABEL.to_string(),
        Screen::Error(message) => message.clone(),
        Screen::Ready {
            header,
            articles,
            pagination,
        } => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", header_line(header));
            let _ = writeln!(out);
            for entry in articles {
                write_entry(&mut out, entry);
            }
            let _ = write!(out, "{}", pagination_line(pagination));
            out
        }
    }
}

pub fn header_line(header: &HeaderView) -> String {
    let locales: Vec<String> = header
        .locales
        .iter()
        .map(|l| {
            if l.active {
                format!("[{}]", l.label)
            } else {
                l.label.to_string()
            }
        })
        .collect();
    format!("{} | {} | {}", header.date_line, header.masthead, locales.join(" | "))
}

pub fn pagination_line(pagination: &Pagination) -> String {
    let previous = if pagination.previous_enabled { "< Previous" } else { "(Previous)" };
    let next = if pagination.next_enabled { "Next >" } else { "(Next)" };
    format!("{}   {}   {}", previous, pagination.label, next)
}

fn write_entry(out: &mut String, entry: &ArticleEntry) {
    let _ = writeln!(out, "{}", entry.date_line);
    let _ = writeln!(out, "{}", entry.title);
    if !entry.description.is_empty() {
        let _ = writeln!(out, "{}", entry.description);
    }
    let _ = writeln!(out, "{}", entry.byline);
    if let Some(thumb) = &entry.thumbnail {
        let _ = writeln!(out, "image: {}", thumb.url);
    }
    if !entry.categories.is_empty() {
        let _ = writeln!(out, "tags: {}", entry.categories.join(", "));
    }
    let _ = writeln!(out, "link: {}", entry.link);
    let _ = writeln!(out);
}
