//! Field lookup against the search-results markup.
//!
//! The [`FieldLocator`] trait is the only place that knows how a result
//! entry is laid out. [`ArxivSchema`] holds the compiled selectors for the
//! arXiv search page and [`ArxivLocator`] applies them to one entry node.
//! When the page layout changes, this module is the one to update.

use scraper::Selector;

use crate::Result;
use crate::parse::{Document, Element, compile};

/// Class carried by every result entry.
pub const ENTRY_SELECTOR: &str = ".arxiv-result";
pub const TITLE_SELECTOR: &str = "p.title.is-5.mathjax";
/// Author names are links back into an author search.
pub const AUTHOR_SELECTOR: &str = r#"a[href^="/search/cs?searchtype=author"]"#;
/// Canonical abstract page link. The first match is the record's link.
pub const LINK_SELECTOR: &str = r#"a[href^="https://arxiv.org/abs/"]"#;
pub const TAG_SELECTOR: &str = "span.tag.is-small.is-link.tooltip.is-tooltip-top";
pub const ABSTRACT_SHORT_SELECTOR: &str = "span.abstract-short.has-text-grey-dark.mathjax";
pub const ABSTRACT_FULL_SELECTOR: &str = "span.abstract-full.has-text-grey-dark.mathjax";
/// Paragraph holding `Submitted <date>; ...`. Only the first one counts.
pub const SUBMISSION_SELECTOR: &str = "p.is-size-7";

/// One accessor per record field, implemented against some parsed markup.
///
/// Every text value returned is already trimmed. Single-valued fields return
/// `None` when the node is absent or its text is empty; multi-valued fields
/// return their values in document order without deduplication.
pub trait FieldLocator {
    fn title(&self) -> Option<String>;

    fn authors(&self) -> Vec<String>;

    /// Fully-qualified URL of the canonical record page.
    fn link(&self) -> Option<String>;

    /// Short token naming the record, by default the last path segment of
    /// [`link`](FieldLocator::link). An empty trailing segment yields `None`.
    fn identifier(&self) -> Option<String> {
        let link = self.link()?;
        let id = link.rsplit('/').next().unwrap_or_default().trim();
        if id.is_empty() { None } else { Some(id.to_string()) }
    }

    fn tags(&self) -> Vec<String>;

    fn abstract_short(&self) -> Option<String>;

    fn abstract_full(&self) -> Option<String>;

    /// Raw text of the submission-info block, if the block exists.
    fn submission_info(&self) -> Option<String>;
}

/// Compiled selectors for the arXiv search results page.
#[derive(Debug, Clone)]
pub struct ArxivSchema {
    entry: Selector,
    title: Selector,
    author: Selector,
    link: Selector,
    tag: Selector,
    abstract_short: Selector,
    abstract_full: Selector,
    submission: Selector,
}

impl ArxivSchema {
    /// Compiles every selector of the schema.
    pub fn new() -> Result<Self> {
        Ok(Self {
            entry: compile(ENTRY_SELECTOR)?,
            title: compile(TITLE_SELECTOR)?,
            author: compile(AUTHOR_SELECTOR)?,
            link: compile(LINK_SELECTOR)?,
            tag: compile(TAG_SELECTOR)?,
            abstract_short: compile(ABSTRACT_SHORT_SELECTOR)?,
            abstract_full: compile(ABSTRACT_FULL_SELECTOR)?,
            submission: compile(SUBMISSION_SELECTOR)?,
        })
    }

    /// Finds all result entry nodes in document order.
    pub fn entries<'d>(&'d self, doc: &'d Document) -> Vec<Element<'d>> {
        doc.select_with(&self.entry).collect()
    }

    /// Binds the schema to one entry node.
    pub fn locate<'a>(&'a self, entry: Element<'a>) -> ArxivLocator<'a> {
        ArxivLocator { schema: self, entry }
    }
}

/// [`FieldLocator`] over a single `.arxiv-result` node.
#[derive(Debug, Clone)]
pub struct ArxivLocator<'a> {
    schema: &'a ArxivSchema,
    entry: Element<'a>,
}

impl ArxivLocator<'_> {
    fn first_text(&self, selector: &Selector) -> Option<String> {
        let text = self.entry.first_with(selector)?.trimmed_text();
        if text.is_empty() { None } else { Some(text) }
    }

    fn all_texts(&self, selector: &Selector) -> Vec<String> {
        self.entry.select_with(selector).map(|el| el.trimmed_text()).collect()
    }
}

impl FieldLocator for ArxivLocator<'_> {
    fn title(&self) -> Option<String> {
        self.first_text(&self.schema.title)
    }

    fn authors(&self) -> Vec<String> {
        self.all_texts(&self.schema.author)
    }

    fn link(&self) -> Option<String> {
        let href = self.entry.first_with(&self.schema.link)?.attr("href")?.trim();
        if href.is_empty() { None } else { Some(href.to_string()) }
    }

    fn tags(&self) -> Vec<String> {
        self.all_texts(&self.schema.tag)
    }

    fn abstract_short(&self) -> Option<String> {
        self.first_text(&self.schema.abstract_short)
    }

    fn abstract_full(&self) -> Option<String> {
        self.first_text(&self.schema.abstract_full)
    }

    fn submission_info(&self) -> Option<String> {
        self.entry.first_with(&self.schema.submission).map(|el| el.trimmed_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_HTML: &str = r#"
        <ol>
        <li class="arxiv-result">
            <div class="is-marginless">
                <p class="list-title is-inline-block">
                    <a href="https://arxiv.org/abs/2403.09999">arXiv:2403.09999</a>
                    <span>&nbsp;[<a href="https://arxiv.org/pdf/2403.09999">pdf</a>]</span>
                </p>
                <div class="tags is-inline-block">
                    <span class="tag is-small is-link tooltip is-tooltip-top" data-tooltip="Machine Learning">cs.LG</span>
                    <span class="tag is-small is-grey tooltip is-tooltip-top" data-tooltip="Statistics">stat.ML</span>
                    <span class="tag is-small is-link tooltip is-tooltip-top" data-tooltip="Artificial Intelligence">cs.AI</span>
                </div>
            </div>
            <p class="title is-5 mathjax">
                Sparse   Mixtures of Experts
            </p>
            <p class="authors">
                <span class="search-hit">Authors:</span>
                <a href="/search/cs?searchtype=author&amp;query=Zhang%2C+W">Wei Zhang</a>,
                <a href="/search/cs?searchtype=author&amp;query=Okafor%2C+C">Chidi Okafor</a>,
                <a href="/search/cs?searchtype=author&amp;query=Zhang%2C+W">Wei Zhang</a>
            </p>
            <p class="abstract mathjax">
                <span class="abstract-short has-text-grey-dark mathjax">We study sparse routing&hellip;</span>
                <span class="abstract-full has-text-grey-dark mathjax" style="display: none;">
                    We study sparse routing in large models.
                </span>
            </p>
            <p class="is-size-7"><span class="has-text-black-bis">Submitted</span> 14 March, 2024; originally announced March 2024.</p>
            <p class="is-size-7"><span>Comments:</span> 12 pages</p>
        </li>
        </ol>
    "#;

    fn with_locator<T>(html: &str, f: impl FnOnce(&ArxivLocator<'_>) -> T) -> T {
        let doc = Document::parse(html).unwrap();
        let schema = ArxivSchema::new().unwrap();
        let entries = schema.entries(&doc);
        let locator = schema.locate(entries[0].clone());
        f(&locator)
    }

    #[test]
    fn test_schema_compiles() {
        assert!(ArxivSchema::new().is_ok());
    }

    #[test]
    fn test_locates_fields() {
        with_locator(ENTRY_HTML, |loc| {
            assert_eq!(loc.title().as_deref(), Some("Sparse   Mixtures of Experts"));
            assert_eq!(loc.link().as_deref(), Some("https://arxiv.org/abs/2403.09999"));
            assert_eq!(loc.identifier().as_deref(), Some("2403.09999"));
            assert_eq!(loc.abstract_short().as_deref(), Some("We study sparse routing\u{2026}"));
            assert_eq!(loc.abstract_full().as_deref(), Some("We study sparse routing in large models."));
        });
    }

    #[test]
    fn test_authors_keep_order_and_duplicates() {
        with_locator(ENTRY_HTML, |loc| {
            assert_eq!(loc.authors(), vec!["Wei Zhang", "Chidi Okafor", "Wei Zhang"]);
        });
    }

    #[test]
    fn test_tags_only_link_styled() {
        with_locator(ENTRY_HTML, |loc| {
            assert_eq!(loc.tags(), vec!["cs.LG", "cs.AI"]);
        });
    }

    #[test]
    fn test_submission_info_uses_first_block() {
        with_locator(ENTRY_HTML, |loc| {
            let info = loc.submission_info().unwrap();
            assert!(info.starts_with("Submitted 14 March, 2024;"));
            assert!(!info.contains("Comments"));
        });
    }

    #[test]
    fn test_missing_nodes_are_none() {
        let html = r#"<ol><li class="arxiv-result"><p class="title is-5 mathjax">   </p></li></ol>"#;
        with_locator(html, |loc| {
            assert_eq!(loc.title(), None);
            assert_eq!(loc.link(), None);
            assert_eq!(loc.identifier(), None);
            assert!(loc.authors().is_empty());
            assert!(loc.tags().is_empty());
            assert_eq!(loc.submission_info(), None);
        });
    }

    #[test]
    fn test_identifier_empty_trailing_segment() {
        let html = r#"<ol><li class="arxiv-result"><a href="https://arxiv.org/abs/">x</a></li></ol>"#;
        with_locator(html, |loc| {
            assert_eq!(loc.link().as_deref(), Some("https://arxiv.org/abs/"));
            assert_eq!(loc.identifier(), None);
        });
    }

    #[test]
    fn test_link_ignores_other_hosts() {
        let html = r#"<ol><li class="arxiv-result"><a href="https://example.org/abs/1">x</a></li></ol>"#;
        with_locator(html, |loc| assert_eq!(loc.link(), None));
    }
}
