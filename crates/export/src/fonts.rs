//! Arabic font preparation for the PDF path
//!
//! Before laying out Arabic text the pipeline resolves an Arabic-capable
//! family on the system and loads its face data so the PDF writer can embed
//! it. The probe runs once per preparer and is memoized; later calls return
//! the recorded report. When no face can be loaded the report is marked
//! degraded and carries no data; the PDF serializer then refuses Arabic
//! documents with a localized error instead of emitting unreadable output.

use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Arabic families probed in preference order.
const PREFERRED_FAMILIES: &[&str] = &["Amiri", "Cairo", "Noto Naskh Arabic", "Tahoma"];

/// Family reported when no preferred family resolves.
const FALLBACK_FAMILY: &str = "Helvetica";

/// Codepoint used to verify a matched face actually covers Arabic; font
/// sources substitute freely, so a successful match alone proves nothing.
const PROBE_CHAR: char = '\u{0645}';

/// Outcome of font preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontReport {
    /// Family the PDF layout should request.
    pub family: String,
    /// Whether the family is a fallback rather than a preferred Arabic font.
    pub degraded: bool,
    /// Raw face data for embedding. `None` when degraded.
    pub data: Option<Arc<Vec<u8>>>,
}

/// Memoized system-font probe for the PDF path.
///
/// Constructed per composition root and passed to the exporter; there is no
/// process-global instance.
#[derive(Debug, Default)]
pub struct FontPreparer {
    report: OnceCell<FontReport>,
    settle_delay: Duration,
}

impl FontPreparer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback settling delay for platforms whose font sources report
    /// readiness before lookups stabilize. Defaults to zero; the probe
    /// itself is the readiness signal.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Ensure fonts are probed. Idempotent; concurrent callers share the
    /// single probe and all observe the same report.
    pub async fn ensure_loaded(&self) -> FontReport {
        self.report
            .get_or_init(|| async {
                let report = tokio::task::spawn_blocking(probe_system)
                    .await
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "font probe task failed, using fallback family");
                        FontReport {
                            family: FALLBACK_FAMILY.to_string(),
                            degraded: true,
                            data: None,
                        }
                    });

                if !self.settle_delay.is_zero() {
                    tokio::time::sleep(self.settle_delay).await;
                }

                if report.degraded {
                    warn!(family = %report.family, "no Arabic font family found, degrading");
                } else {
                    debug!(family = %report.family, "Arabic font face loaded");
                }
                report
            })
            .await
            .clone()
    }
}

/// Probe the system font source for the first preferred family whose face
/// loads and covers Arabic.
fn probe_system() -> FontReport {
    let source = SystemSource::new();
    for family in PREFERRED_FAMILIES {
        let handle = source.select_best_match(
            &[FamilyName::Title((*family).to_string())],
            &Properties::new(),
        );
        let Ok(handle) = handle else {
            continue;
        };
        let Ok(font) = handle.load() else {
            debug!(family, "matched family failed to load, skipping");
            continue;
        };
        if font.glyph_for_char(PROBE_CHAR).unwrap_or(0) == 0 {
            debug!(family, "matched family has no Arabic coverage, skipping");
            continue;
        }
        let Some(data) = font.copy_font_data() else {
            continue;
        };
        return FontReport {
            family: (*family).to_string(),
            degraded: false,
            data: Some(data),
        };
    }
    FontReport {
        family: FALLBACK_FAMILY.to_string(),
        degraded: true,
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_loaded_is_memoized() {
        let preparer = FontPreparer::new();
        let first = preparer.ensure_loaded().await;
        let second = preparer.ensure_loaded().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_report_always_names_a_family() {
        let preparer = FontPreparer::new();
        let report = preparer.ensure_loaded().await;
        assert!(!report.family.is_empty());
    }

    #[tokio::test]
    async fn test_undegraded_report_carries_face_data() {
        let preparer = FontPreparer::new();
        let report = preparer.ensure_loaded().await;
        if report.degraded {
            assert!(report.data.is_none());
        } else {
            assert!(report.data.as_ref().is_some_and(|d| !d.is_empty()));
        }
    }

    #[tokio::test]
    async fn test_settle_delay_does_not_change_outcome() {
        let preparer = FontPreparer::new().with_settle_delay(Duration::from_millis(10));
        let report = preparer.ensure_loaded().await;
        assert!(!report.family.is_empty());
    }
}
