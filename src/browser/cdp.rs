//! chromiumoxide-backed implementation of the browser contract.
//!
//! Element interaction leans on JS evaluation for the pieces CDP has no
//! first-class verb for (hover, history navigation), the same way the rest
//! of the automation stack drives pages.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{Browser, Element, Page};
use crate::error::{Result, WarmupError};

/// Wraps a connected [`chromiumoxide::Browser`].
pub struct CdpBrowser {
    inner: chromiumoxide::Browser,
}

impl CdpBrowser {
    /// Wrap an already-launched or already-connected browser. The caller
    /// keeps driving the browser's CDP event handler.
    pub fn new(browser: chromiumoxide::Browser) -> Self {
        Self { inner: browser }
    }
}

#[async_trait]
impl Browser for CdpBrowser {
    async fn new_page(&self) -> Result<Box<dyn Page>> {
        let page = self
            .inner
            .new_page("about:blank")
            .await
            .map_err(|e| WarmupError::Browser(format!("Failed to open page: {}", e)))?;
        Ok(Box::new(CdpPage { page }))
    }
}

/// A single CDP page target.
pub struct CdpPage {
    page: chromiumoxide::Page,
}

#[async_trait]
impl Page for CdpPage {
    async fn goto(&self, url: &str, timeout: Duration) -> Result<()> {
        let navigate = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| WarmupError::Navigation(e.to_string()))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| WarmupError::Navigation(e.to_string()))?;
            Ok(())
        };

        match tokio::time::timeout(timeout, navigate).await {
            Ok(result) => result,
            Err(_) => Err(WarmupError::Timeout(format!(
                "Page load timed out after {}ms: {}",
                timeout.as_millis(),
                url
            ))),
        }
    }

    async fn evaluate(&self, expression: &str) -> Result<Value> {
        let result = self
            .page
            .evaluate(expression)
            .await
            .map_err(|e| WarmupError::Evaluation(e.to_string()))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<Box<dyn Element>>> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| WarmupError::ElementInteraction(e.to_string()))?;
        Ok(elements
            .into_iter()
            .map(|el| Box::new(CdpElement { el }) as Box<dyn Element>)
            .collect())
    }

    async fn go_back(&self) -> Result<()> {
        self.evaluate("history.back()").await.map(|_| ())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.page
            .close()
            .await
            .map_err(|e| WarmupError::Browser(format!("Failed to close page: {}", e)))
    }
}

/// A DOM element handle.
pub struct CdpElement {
    el: chromiumoxide::Element,
}

#[async_trait]
impl Element for CdpElement {
    async fn hover(&self) -> Result<()> {
        // CDP has no hover verb on element handles; dispatch the pointer
        // events the page would see from a real mouse-over.
        self.el
            .call_js_fn(
                r#"function() {
                    this.scrollIntoView({ block: 'center', behavior: 'instant' });
                    this.dispatchEvent(new MouseEvent('mouseenter', { bubbles: true }));
                    this.dispatchEvent(new MouseEvent('mouseover', { bubbles: true }));
                }"#,
                false,
            )
            .await
            .map_err(|e| WarmupError::ElementInteraction(e.to_string()))?;
        Ok(())
    }

    async fn click(&self) -> Result<()> {
        self.el
            .click()
            .await
            .map_err(|e| WarmupError::ElementInteraction(e.to_string()))?;
        Ok(())
    }

    async fn scroll_into_view(&self) -> Result<()> {
        self.el
            .scroll_into_view()
            .await
            .map_err(|e| WarmupError::ElementInteraction(e.to_string()))?;
        Ok(())
    }

    async fn text_content(&self) -> Result<Option<String>> {
        self.el
            .inner_text()
            .await
            .map_err(|e| WarmupError::ElementInteraction(e.to_string()))
    }
}
