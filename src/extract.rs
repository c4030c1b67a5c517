use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the unique absolute link URLs from an HTML document.
///
/// Anchors with an empty href or a pure in-page fragment (`#...`) are
/// discarded. Every remaining href is resolved against `base` (relative,
/// protocol-relative and absolute forms all work) and the results are
/// deduplicated while preserving first-seen order.
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a").unwrap();
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in doc.select(&link_selector) {
        if let Some(href) = element.value().attr("href") {
            if href.is_empty() || href.starts_with('#') {
                continue;
            }
            match base.join(href) {
                Ok(resolved) => {
                    let absolute = resolved.to_string();
                    if seen.insert(absolute.clone()) {
                        links.push(absolute);
                    }
                }
                Err(e) => {
                    ::log::debug!("Skipping unresolvable href {:?}: {}", href, e);
                }
            }
        }
    }

    ::log::debug!("Extracted {} unique links from {}", links.len(), base);
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://example.com/docs/index.html").unwrap()
    }

    #[test]
    fn test_resolves_relative_protocol_relative_and_absolute() {
        let html = r#"<html><body>
            <a href="page.html">relative</a>
            <a href="/top.html">rooted</a>
            <a href="//cdn.example.org/lib.html">protocol relative</a>
            <a href="https://other.example.net/about">absolute</a>
        </body></html>"#;

        let links = extract_links(html, &base());
        assert_eq!(
            links,
            vec![
                "http://example.com/docs/page.html",
                "http://example.com/top.html",
                "http://cdn.example.org/lib.html",
                "https://other.example.net/about",
            ]
        );
    }

    #[test]
    fn test_drops_empty_and_fragment_hrefs() {
        let html = r##"<html><body>
            <a href="">empty</a>
            <a href="#section">fragment</a>
            <a>no href</a>
            <a href="real.html">real</a>
        </body></html>"##;

        let links = extract_links(html, &base());
        assert_eq!(links, vec!["http://example.com/docs/real.html"]);
    }

    #[test]
    fn test_dedups_preserving_first_seen_order() {
        let html = r#"<html><body>
            <a href="b.html">b</a>
            <a href="a.html">a</a>
            <a href="b.html">b again</a>
            <a href="a.html">a again</a>
        </body></html>"#;

        let links = extract_links(html, &base());
        assert_eq!(
            links,
            vec![
                "http://example.com/docs/b.html",
                "http://example.com/docs/a.html",
            ]
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"<html><body>
            <a href="one.html">1</a>
            <a href="two.html">2</a>
            <a href="one.html">1 again</a>
        </body></html>"#;

        let first = extract_links(html, &base());
        let second = extract_links(html, &base());
        assert_eq!(first, second);

        // Re-running the dedup step on its own output is a no-op
        let mut seen = HashSet::new();
        let rededuped: Vec<String> = first
            .iter()
            .filter(|url| seen.insert(url.as_str()))
            .cloned()
            .collect();
        assert_eq!(rededuped, first);
    }

    #[test]
    fn test_no_links_in_linkless_document() {
        let html = "<html><body><p>Nothing to see here.</p></body></html>";
        assert!(extract_links(html, &base()).is_empty());
    }
}
