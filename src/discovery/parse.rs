//! Parsing of the discovery service's HTML page.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::Discovery;

/// Text shown by the discovery page when a domain has no DKIM selectors.
pub const NO_SELECTORS_MARKER: &str = "no selectors detected";

/// Element holding the "no selectors" message.
const NO_DATA_SELECTOR_STR: &str = "div.no-data-title";
/// Element holding one discovered selector name.
const SELECTOR_TITLE_SELECTOR_STR: &str = "div.title";

static NO_DATA_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(NO_DATA_SELECTOR_STR, "NO_DATA_SELECTOR")
});

static SELECTOR_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(SELECTOR_TITLE_SELECTOR_STR, "SELECTOR_TITLE_SELECTOR")
});

/// Interprets a discovery page.
///
/// Returns `None` when the page neither reports "no selectors" nor lists any,
/// which the caller treats as an unrecognized response. Names keep document
/// order; repeats are dropped.
pub fn parse_discovery_page(html: &str) -> Option<Discovery> {
    let document = Html::parse_document(html);

    let no_selectors = document.select(&NO_DATA_SELECTOR).any(|element| {
        element
            .text()
            .collect::<String>()
            .to_lowercase()
            .contains(NO_SELECTORS_MARKER)
    });
    if no_selectors {
        return Some(Discovery::NoSelectors);
    }

    let mut names: Vec<String> = Vec::new();
    for element in document.select(&SELECTOR_TITLE_SELECTOR) {
        let name = element.text().collect::<String>().trim().to_string();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        None
    } else {
        Some(Discovery::Found(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_selectors_page() {
        let html = r#"<html><body>
            <div class="mb-4 no-data-title">no selectors detected</div>
        </body></html>"#;
        assert_eq!(parse_discovery_page(html), Some(Discovery::NoSelectors));
    }

    #[test]
    fn test_parse_selector_titles() {
        let html = r#"<html><body>
            <div class="card"><div class="title " style="font-size: 18px;">google</div></div>
            <div class="card"><div class="title " style="font-size: 18px;"> s1 </div></div>
            <div class="card"><div class="title " style="font-size: 18px;">google</div></div>
        </body></html>"#;
        assert_eq!(
            parse_discovery_page(html),
            Some(Discovery::Found(vec!["google".to_string(), "s1".to_string()]))
        );
    }

    #[test]
    fn test_no_data_title_is_not_a_selector() {
        // `no-data-title` must not be picked up by the `.title` selector
        let html = r#"<div class="no-data-title">Something else happened</div>"#;
        assert_eq!(parse_discovery_page(html), None);
    }

    #[test]
    fn test_parse_unrecognized_page() {
        assert_eq!(parse_discovery_page("<html><body>Rate limited</body></html>"), None);
        assert_eq!(parse_discovery_page(""), None);
    }

    #[test]
    fn test_blank_titles_are_ignored() {
        let html = r#"<div class="title">   </div>"#;
        assert_eq!(parse_discovery_page(html), None);
    }
}
