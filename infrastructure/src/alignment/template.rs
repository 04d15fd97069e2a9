//! Offline alignment messages built from the consensus summary
//!
//! Stands in for the text-generation collaborator: the organizer's nudge is
//! assembled from a fixed template instead of a language model.

use async_trait::async_trait;
use kanji_application::ports::alignment_advisor::{AlignmentAdvisor, AlignmentError};
use kanji_domain::ConsensusSummary;

/// [`AlignmentAdvisor`] that fills a fixed template
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateAlignmentAdvisor;

impl TemplateAlignmentAdvisor {
    pub fn new() -> Self {
        Self
    }

    fn message(summary: &ConsensusSummary) -> Result<String, AlignmentError> {
        if summary.eligible == 0 {
            return Err(AlignmentError::Generation(
                "nobody has said they are coming yet".to_string(),
            ));
        }

        let mut parts = vec![format!("参加予定 {} 名", summary.eligible)];
        if let Some(top) = summary.dates.first() {
            parts.push(format!("第一候補は {}（{} 名）", top.date, top.count));
        }
        if let Some(area) = &summary.area {
            parts.push(format!("エリアは{}", area));
        }
        parts.push(format!("予算は{}", summary.budget));
        if !summary.cuisine.is_empty() {
            parts.push(format!("ジャンルは{}", summary.cuisine.join("・")));
        }
        Ok(format!("{}。投票をお願いします！", parts.join("、")))
    }
}

#[async_trait]
impl AlignmentAdvisor for TemplateAlignmentAdvisor {
    async fn advise(&self, summary: &ConsensusSummary) -> Result<String, AlignmentError> {
        Self::message(summary)
    }
}
