//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types, thin wrappers
//! over `scraper` that report invalid selectors as [`DigestError`] instead of
//! panicking.
//!
//! # Example
//!
//! ```rust
//! use arxiv_digest_core::parse::Document;
//!
//! let html = r#"
//!     <ol>
//!         <li class="arxiv-result"><p class="title">First</p></li>
//!         <li class="arxiv-result"><p class="title">Second</p></li>
//!     </ol>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let entries = doc.select(".arxiv-result").unwrap();
//! assert_eq!(entries.len(), 2);
//! ```

use scraper::{Html, Selector};

use crate::{DigestError, Result};

pub(crate) fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| DigestError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup is repaired rather than rejected,
    /// so this only fails for reasons outside the markup itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arxiv_digest_core::parse::Document;
    ///
    /// let doc = Document::parse("<html><head><title>Search</title></head></html>").unwrap();
    /// assert_eq!(doc.title(), Some("Search".to_string()));
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects elements using an already compiled selector.
    pub(crate) fn select_with<'s>(&'s self, selector: &'s Selector) -> impl Iterator<Item = Element<'s>> {
        self.html.select(selector).map(|el| Element { element: el })
    }

    /// Gets the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use arxiv_digest_core::parse::Document;
///
/// let html = r#"<a href="https://arxiv.org/abs/2401.00001"> arXiv:2401.00001 </a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.trimmed_text(), "arXiv:2401.00001");
/// assert_eq!(link.attr("href"), Some("https://arxiv.org/abs/2401.00001"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text content with leading and trailing whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// Gets the value of an attribute, or `None` if it is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Selects descendant elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.select_with(&sel).collect())
    }

    /// Selects the first descendant matching a CSS selector.
    pub fn select_first(&self, selector: &str) -> Result<Option<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.first_with(&sel))
    }

    /// Selects descendants using an already compiled selector.
    pub(crate) fn select_with(&self, selector: &Selector) -> impl Iterator<Item = Element<'a>> {
        self.element.select(selector).map(|el| Element { element: el })
    }

    /// Selects the first descendant matching an already compiled selector.
    pub(crate) fn first_with(&self, selector: &Selector) -> Option<Element<'a>> {
        self.element.select(selector).next().map(|el| Element { element: el })
    }
}
