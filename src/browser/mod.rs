//! Browser collaborator contract.
//!
//! The warming engine drives a live browser but owns none of it: page
//! creation, navigation, script evaluation and element interaction are all
//! external. This module pins that boundary down as object-safe traits so
//! the engine's failure containment is visible in the signatures and tests
//! can substitute scripted fakes for a real CDP session.

mod cdp;

pub use cdp::{CdpBrowser, CdpElement, CdpPage};

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A browser handle able to open pages.
#[async_trait]
pub trait Browser: Send + Sync {
    /// Open a fresh blank page. The caller owns the page and is responsible
    /// for closing it.
    async fn new_page(&self) -> Result<Box<dyn Page>>;
}

/// A single page (tab) within the browser.
///
/// Every operation may fail; callers contain failures at the boundary
/// appropriate to their layer rather than letting them escape.
#[async_trait]
pub trait Page: Send + Sync {
    /// Navigate to `url`, waiting for the document to load, bounded by
    /// `timeout`.
    async fn goto(&self, url: &str, timeout: Duration) -> Result<()>;

    /// Evaluate a JavaScript expression and return its value.
    /// Expressions without a value yield `Value::Null`.
    async fn evaluate(&self, expression: &str) -> Result<Value>;

    /// Query all elements matching a CSS selector. No match is an empty
    /// vector, not an error.
    async fn query_all(&self, selector: &str) -> Result<Vec<Box<dyn Element>>>;

    /// Navigate one step back in the page history.
    async fn go_back(&self) -> Result<()>;

    /// Close the page, releasing its target.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// An element handle scoped to the document it was queried from.
#[async_trait]
pub trait Element: Send + Sync {
    /// Move pointer interest onto the element.
    async fn hover(&self) -> Result<()>;

    /// Click the element.
    async fn click(&self) -> Result<()>;

    /// Scroll the element into the viewport.
    async fn scroll_into_view(&self) -> Result<()>;

    /// The element's rendered text, if any.
    async fn text_content(&self) -> Result<Option<String>>;
}
