use chrono::NaiveDate;

use crate::shell::Action;

pub const MASTHEAD_TITLE: &str = "The New York Times";
pub const MASTHEAD_LINK: &str = "https://www.nytimes.com/section/technology";

/// Language codes offered by the toggle, with their labels.
pub const LOCALES: [(&str, &str); 2] = [("eng", "ENG"), ("esp", "ESP")];

pub const DEFAULT_LANGUAGE: &str = "eng";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    pub code: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl LocaleOption {
    pub fn select(&self) -> Action {
        Action::SelectLanguage(self.code.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub date_line: String,
    pub masthead: &'static str,
    pub masthead_link: &'static str,
    pub locales: Vec<LocaleOption>,
}

pub fn render_header(today: NaiveDate, language: &str) -> HeaderView {
    HeaderView {
        date_line: format_header_date(today),
        masthead: MASTHEAD_TITLE,
        masthead_link: MASTHEAD_LINK,
        locales: LOCALES
            .iter()
            .map(|&(code, label)| LocaleOption {
                code,
                label,
                active: code == language,
            })
            .collect(),
    }
}

/// `Tue, Jan 2, 2024`
pub fn format_header_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    #[test]
    fn test_header_date() {
        assert_eq!(render_header(day(), "eng").date_line, "Tue, Jan 2, 2024");
    }

    #[test]
    fn test_active_locale_follows_language() {
        let header = render_header(day(), "esp");
        let active: Vec<_> = header.locales.iter().filter(|l| l.active).map(|l| l.code).collect();
        assert_eq!(active, vec!["esp"]);

        let header = render_header(day(), "fra");
        assert!(header.locales.iter().all(|l| !l.active));
    }

    #[test]
    fn test_selecting_option_emits_action() {
        let header = render_header(day(), "eng");
        assert_eq!(header.locales[1].select(), Action::SelectLanguage("esp".to_string()));
    }
}
