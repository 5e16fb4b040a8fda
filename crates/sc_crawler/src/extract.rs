use sc_core::{Error, Result};
use url::Url;

use crate::parser::{Document, PageSelectors};

/// What the frontier needs from a freshly fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub headline: String,
    /// Raw hrefs in document order.
    pub links: Vec<String>,
}

pub fn extract_page(url: &Url, html: &str, selectors: &PageSelectors) -> Result<PageContent> {
    let doc = Document::parse(html);
    let headline = doc
        .find_headline(selectors)
        .ok_or_else(|| Error::absent(url.as_str(), "headline"))?;
    Ok(PageContent {
        headline,
        links: doc.outbound_links(selectors),
    })
}

/// Headline and body exactly as they appear in the page. The headline is not
/// trimmed, so a score right after leading whitespace still matches.
pub fn extract_article(url: &Url, html: &str, selectors: &PageSelectors) -> Result<ArticleText> {
    let doc = Document::parse(html);
    let headline = doc
        .select_text(&selectors.headline)
        .ok_or_else(|| Error::absent(url.as_str(), "headline"))?;
    let body = doc
        .find_article_body(selectors)
        .ok_or_else(|| Error::absent(url.as_str(), "article body"))?;
    Ok(ArticleText { headline, body })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText {
    /// Untrimmed headline text.
    pub headline: String,
    pub body: String,
}

impl ArticleText {
    pub fn new(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            body: body.into(),
        }
    }

    /// Headline and body joined by a single space; the text that gets
    /// classified.
    pub fn combined(&self) -> String {
        format!("{} {}", self.headline, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::SelectorConfig;

    fn selectors() -> PageSelectors {
        PageSelectors::new(&SelectorConfig::default()).unwrap()
    }

    #[test]
    fn test_extract_page() {
        let url = Url::parse("http://a.test/main/Hodg001.html").unwrap();
        let html = r#"<h1 class="headline">Seed</h1><a href="a.html"></a><a href="b.html"></a>"#;
        let content = extract_page(&url, html, &selectors()).unwrap();
        assert_eq!(content.headline, "Seed");
        assert_eq!(content.links, ["a.html", "b.html"]);
    }

    #[test]
    fn test_extract_page_without_headline() {
        let url = Url::parse("http://a.test/main/Hodg001.html").unwrap();
        let err = extract_page(&url, "<p>nothing</p>", &selectors()).unwrap_err();
        assert!(matches!(
            err,
            Error::ExtractionAbsent { ref element, .. } if element == "headline"
        ));
    }

    #[test]
    fn test_extract_article() {
        let url = Url::parse("http://a.test/main/Hodg001.html").unwrap();
        let html =
            r#"<h1 class="headline">Result</h1><div id="article_detail">Wales won 29-17 .</div>"#;
        let article = extract_article(&url, html, &selectors()).unwrap();
        assert_eq!(article, ArticleText::new("Result", "Wales won 29-17 ."));
    }

    #[test]
    fn test_extract_article_keeps_raw_headline() {
        let url = Url::parse("http://a.test/main/Hodg001.html").unwrap();
        let html = "<h1 class=\"headline\">\n21-14 thriller for Wales</h1>\
                    <div id=\"article_detail\">Wales held on.</div>";
        let article = extract_article(&url, html, &selectors()).unwrap();
        assert_eq!(article.headline, "\n21-14 thriller for Wales");
    }

    #[test]
    fn test_extract_article_missing_parts() {
        let url = Url::parse("http://a.test/main/Hodg001.html").unwrap();
        let no_body = extract_article(&url, r#"<h1 class="headline">x</h1>"#, &selectors());
        assert!(matches!(
            no_body,
            Err(Error::ExtractionAbsent { ref element, .. }) if element == "article body"
        ));
        let no_headline =
            extract_article(&url, r#"<div id="article_detail">x</div>"#, &selectors());
        assert!(matches!(
            no_headline,
            Err(Error::ExtractionAbsent { ref element, .. }) if element == "headline"
        ));
    }

    #[test]
    fn test_combined_text() {
        let text = ArticleText::new("Final whistle", "Scotland 20-0 Japan");
        assert_eq!(text.combined(), "Final whistle Scotland 20-0 Japan");
    }
}
