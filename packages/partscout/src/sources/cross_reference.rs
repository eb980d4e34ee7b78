//! Manufacturer cross-reference lookup via headless Chromium.
//!
//! The page is rendered client-side, so a plain HTTP fetch sees no results.
//! Each lookup launches its own Playwright session through the Node runtime,
//! waits for product anchors, and returns the rendered document; candidate
//! extraction then happens in Rust (see [`crate::dom`]).
//!
//! Best-effort source: launch failures, navigation timeouts and pages without
//! results all resolve to an empty list.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::dom::extract_alternatives;
use crate::error::{Result, ScoutError};
use crate::traits::cross_reference::CrossReferenceSource;
use crate::types::alternative::CrossReferenceAlternative;
use crate::types::config::CrossReferenceConfig;

/// Renders one page and prints its HTML, or nothing when no result marker
/// appears in time. The browser is closed on every path.
const RENDER_SCRIPT: &str = r#"
const { chromium } = require('playwright');
(async () => {
    let browser;
    try {
        browser = await chromium.launch({ headless: true });
        const context = await browser.newContext({ userAgent: process.env.XREF_USER_AGENT });
        const page = await context.newPage();
        await page.goto(process.env.XREF_URL, {
            waitUntil: 'networkidle',
            timeout: Number(process.env.XREF_NAVIGATION_TIMEOUT_MS),
        });
        const found = await page
            .waitForSelector(process.env.XREF_SELECTOR, {
                timeout: Number(process.env.XREF_SELECTOR_TIMEOUT_MS),
            })
            .then(() => true, () => false);
        if (found) {
            process.stdout.write(await page.content());
        }
    } finally {
        if (browser) {
            await browser.close();
        }
    }
})().catch((err) => {
    console.error(err && err.message ? err.message : String(err));
    process.exitCode = 1;
});
"#;

/// Cross-reference source driven by Playwright.
pub struct PlaywrightCrossReference {
    config: CrossReferenceConfig,
}

impl PlaywrightCrossReference {
    pub fn new(config: CrossReferenceConfig) -> Self {
        Self { config }
    }

    /// Render the cross-reference page.
    ///
    /// Returns `Ok(None)` when the page loaded but no result marker appeared.
    async fn render(&self, url: &str) -> Result<Option<String>> {
        let deadline = self.config.session_deadline();

        let session = Command::new(&self.config.node_binary)
            .arg("-e")
            .arg(RENDER_SCRIPT)
            .env("XREF_URL", url)
            .env("XREF_USER_AGENT", &self.config.user_agent)
            .env("XREF_SELECTOR", &self.config.product_selector)
            .env(
                "XREF_NAVIGATION_TIMEOUT_MS",
                self.config.navigation_timeout.as_millis().to_string(),
            )
            .env(
                "XREF_SELECTOR_TIMEOUT_MS",
                self.config.selector_timeout.as_millis().to_string(),
            )
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        // Dropping the future on timeout kills the child (kill_on_drop).
        let output = tokio::time::timeout(deadline, session)
            .await
            .map_err(|_| {
                ScoutError::Browser(format!("rendering session exceeded {:?}", deadline))
            })?
            .map_err(|e| {
                ScoutError::Browser(format!(
                    "failed to launch {}: {}",
                    self.config.node_binary, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScoutError::Browser(format!(
                "rendering session failed: {}",
                stderr.trim()
            )));
        }

        let html = String::from_utf8_lossy(&output.stdout).into_owned();
        if html.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(html))
    }
}

#[async_trait]
impl CrossReferenceSource for PlaywrightCrossReference {
    async fn alternatives(&self, part_number: &str) -> Result<Vec<CrossReferenceAlternative>> {
        let url = self.config.url_for(part_number);
        debug!(part_number, url = %url, "Rendering cross-reference page");

        let html = match self.render(&url).await {
            Ok(Some(html)) => html,
            Ok(None) => {
                info!(part_number, "No cross-reference results before timeout");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(part_number, error = %e, "Cross-reference lookup failed");
                return Ok(Vec::new());
            }
        };

        match extract_alternatives(&html, &url, &self.config.product_selector) {
            Ok(alternatives) => {
                info!(
                    part_number,
                    count = alternatives.len(),
                    "Cross-reference candidates extracted"
                );
                Ok(alternatives)
            }
            Err(e) => {
                warn!(part_number, error = %e, "Cross-reference extraction failed");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_launch_failure_resolves_to_empty() {
        let source = PlaywrightCrossReference::new(
            CrossReferenceConfig::default()
                .with_node_binary("/nonexistent/partscout-node-binary"),
        );
        let alternatives = source.alternatives("LM317").await.unwrap();
        assert!(alternatives.is_empty());
    }

    #[cfg(unix)]
    mod session {
        use super::super::PlaywrightCrossReference;
        use crate::error::ScoutError;
        use crate::traits::cross_reference::CrossReferenceSource;
        use crate::types::config::CrossReferenceConfig;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;
        use std::time::{Duration, Instant};

        /// Stand-in for the Node runtime: ignores `-e <script>` and runs `body`.
        fn fake_node(name: &str, body: &str) -> PathBuf {
            let path = std::env::temp_dir().join(format!(
                "partscout-fake-node-{}-{}",
                name,
                std::process::id()
            ));
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn source(node: &PathBuf) -> PlaywrightCrossReference {
            PlaywrightCrossReference::new(
                CrossReferenceConfig::default()
                    .with_timeouts(Duration::from_millis(50), Duration::from_millis(50))
                    .with_session_grace(Duration::from_millis(200))
                    .with_node_binary(node.to_string_lossy()),
            )
        }

        #[tokio::test]
        async fn test_hung_session_is_killed_at_deadline() {
            let node = fake_node("hang", "exec sleep 30");
            let source = source(&node);

            let started = Instant::now();
            let err = source.render("https://x.test/").await.unwrap_err();
            assert!(matches!(&err, ScoutError::Browser(msg) if msg.contains("exceeded")));

            assert!(source.alternatives("LM317").await.unwrap().is_empty());
            assert!(started.elapsed() < Duration::from_secs(10));
            let _ = std::fs::remove_file(node);
        }

        #[tokio::test]
        async fn test_failed_session_reports_stderr() {
            let node = fake_node("fail", "echo 'browser crashed' >&2\nexit 1");
            let source = source(&node);

            let err = source.render("https://x.test/").await.unwrap_err();
            assert!(matches!(&err, ScoutError::Browser(msg) if msg.contains("browser crashed")));

            assert!(source.alternatives("LM317").await.unwrap().is_empty());
            let _ = std::fs::remove_file(node);
        }

        #[tokio::test]
        async fn test_silent_session_means_no_results() {
            let node = fake_node("silent", "exit 0");
            let source = source(&node);

            assert_eq!(source.render("https://x.test/").await.unwrap(), None);
            let _ = std::fs::remove_file(node);
        }

        #[tokio::test]
        async fn test_rendered_page_is_extracted() {
            let node = fake_node(
                "page",
                r#"echo '<html><body><h2>Exact match</h2><a href="/product/LM317">LM317</a></body></html>'"#,
            );
            let source = source(&node);

            let alternatives = source.alternatives("LM317").await.unwrap();
            assert_eq!(alternatives.len(), 1);
            assert_eq!(alternatives[0].part_number, "LM317");
            assert_eq!(alternatives[0].href, "https://www.ti.com/product/LM317");
            let _ = std::fs::remove_file(node);
        }
    }

    #[test]
    fn test_script_reads_settings_from_environment() {
        for var in [
            "XREF_URL",
            "XREF_USER_AGENT",
            "XREF_SELECTOR",
            "XREF_NAVIGATION_TIMEOUT_MS",
            "XREF_SELECTOR_TIMEOUT_MS",
        ] {
            assert!(RENDER_SCRIPT.contains(var), "script must read {}", var);
        }
        assert!(RENDER_SCRIPT.contains("browser.close()"));
    }
}
