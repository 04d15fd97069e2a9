//! Consensus summary over participant responses

use super::ranking::{FrequencyRanking, median};
use crate::participant::{BudgetRange, ParticipantResponse};
use serde::{Deserialize, Serialize};

/// Number of cuisines kept in the summary
pub const TOP_CUISINES: usize = 3;

/// How many eligible participants proposed a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: String,
    pub count: usize,
}

/// Aggregated recommendation derived from a plan's responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusSummary {
    /// All proposed dates, most popular first
    pub dates: Vec<DateCount>,
    /// Most requested area, if anyone eligible gave one
    pub area: Option<String>,
    /// Median bounds, or the fallback budget
    pub budget: BudgetRange,
    /// Up to [`TOP_CUISINES`] cuisine tokens, most requested first
    pub cuisine: Vec<String>,
    /// Number of responses that counted
    pub eligible: usize,
}

impl ConsensusSummary {
    /// The `k` most popular dates; empty when nobody proposed one
    pub fn top_dates(&self, k: usize) -> Vec<String> {
        self.dates.iter().take(k).map(|d| d.date.clone()).collect()
    }
}

/// Aggregate the given responses
///
/// Rows whose attendance is `no` or unset are ignored. Never fails: missing
/// data degrades to an empty ranking, no area, the default budget and no
/// cuisines.
pub fn summarize(responses: &[ParticipantResponse]) -> ConsensusSummary {
    summarize_with_budget(responses, BudgetRange::DEFAULT)
}

/// [`summarize`], with a caller-chosen fallback budget
pub fn summarize_with_budget(
    responses: &[ParticipantResponse],
    default_budget: BudgetRange,
) -> ConsensusSummary {
    let eligible: Vec<&ParticipantResponse> =
        responses.iter().filter(|r| r.is_eligible()).collect();

    let dates: FrequencyRanking = eligible
        .iter()
        .flat_map(|r| r.dates.iter().map(String::as_str))
        .collect();

    let areas: FrequencyRanking = eligible
        .iter()
        .filter_map(|r| r.area.as_deref())
        .filter(|a| !a.trim().is_empty())
        .collect();

    let budgets: Vec<BudgetRange> = eligible.iter().filter_map(|r| r.budget()).collect();
    let mins: Vec<i64> = budgets.iter().map(|b| b.min).collect();
    let maxs: Vec<i64> = budgets.iter().map(|b| b.max).collect();
    let budget = match (median(&mins), median(&maxs)) {
        (Some(min), Some(max)) => BudgetRange::new(min, max),
        _ => default_budget,
    };

    let cuisines: FrequencyRanking = eligible.iter().flat_map(|r| r.cuisine_tokens()).collect();

    ConsensusSummary {
        dates: dates
            .ranked()
            .into_iter()
            .map(|(date, count)| DateCount { date, count })
            .collect(),
        area: areas.top(1).into_iter().next(),
        budget,
        cuisine: cuisines.top(TOP_CUISINES),
        eligible: eligible.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::ParticipantId;
    use crate::participant::{Attendance, ResponseUpdate};

    fn row(id: &str, update: ResponseUpdate) -> ParticipantResponse {
        let mut row = ParticipantResponse::new(ParticipantId::from(id));
        row.apply(update).unwrap();
        row
    }

    fn yes() -> ResponseUpdate {
        ResponseUpdate::new().attendance(Attendance::Yes)
    }

    #[test]
    fn test_ineligible_rows_are_excluded() {
        let rows = vec![
            row("A", yes().dates(["2024-07-01"])),
            row(
                "B",
                ResponseUpdate::new()
                    .attendance(Attendance::No)
                    .dates(["2024-07-02"])
                    .area("渋谷"),
            ),
            row("C", ResponseUpdate::new().dates(["2024-07-03"]).cuisine("寿司")),
        ];
        let summary = summarize(&rows);

        assert_eq!(summary.top_dates(3), vec!["2024-07-01"]);
        assert_eq!(summary.area, None);
        assert!(summary.cuisine.is_empty());
        assert_eq!(summary.eligible, 1);
    }

    #[test]
    fn test_date_ranking_counts_and_ties() {
        let rows = vec![
            row("A", yes().dates(["2024-07-05", "2024-07-01"])),
            row(
                "B",
                ResponseUpdate::new()
                    .attendance(Attendance::Maybe)
                    .dates(["2024-07-01", "2024-07-08"]),
            ),
        ];
        let summary = summarize(&rows);

        assert_eq!(
            summary.dates,
            vec![
                DateCount { date: "2024-07-01".to_string(), count: 2 },
                DateCount { date: "2024-07-05".to_string(), count: 1 },
                DateCount { date: "2024-07-08".to_string(), count: 1 },
            ]
        );
        assert_eq!(summary.top_dates(2), vec!["2024-07-01", "2024-07-05"]);
    }

    #[test]
    fn test_no_dates_gives_empty_ranking() {
        let summary = summarize(&[row("A", yes())]);
        assert!(summary.dates.is_empty());
        assert!(summary.top_dates(3).is_empty());
    }

    #[test]
    fn test_area_mode_with_first_seen_tie_break() {
        let rows = vec![
            row("A", yes().area("渋谷")),
            row("B", yes().area("新宿")),
            row("C", yes().area("")),
            row("D", yes().area("新宿")),
            row("E", yes().area("渋谷")),
        ];
        assert_eq!(summarize(&rows).area.as_deref(), Some("渋谷"));
    }

    #[test]
    fn test_budget_median() {
        let rows = vec![
            row("A", yes().budget(BudgetRange::new(2000, 4000))),
            row("B", yes().budget(BudgetRange::new(3000, 5000))),
        ];
        assert_eq!(summarize(&rows).budget, BudgetRange::new(2500, 4500));
    }

    #[test]
    fn test_budget_ignores_rows_with_one_bound() {
        let mut half = row("B", yes());
        half.budget_min = Some(10_000);
        let rows = vec![row("A", yes().budget(BudgetRange::new(2000, 4000))), half];
        assert_eq!(summarize(&rows).budget, BudgetRange::new(2000, 4000));
    }

    #[test]
    fn test_budget_defaults_when_missing() {
        let mut half = row("A", yes());
        half.budget_max = Some(6000);
        assert_eq!(summarize(&[half]).budget, BudgetRange::DEFAULT);
        assert_eq!(summarize(&[]).budget, BudgetRange::new(3000, 5000));
    }

    #[test]
    fn test_custom_fallback_budget() {
        let budget = BudgetRange::new(4000, 6000);
        assert_eq!(summarize_with_budget(&[row("A", yes())], budget).budget, budget);

        let rows = vec![row("A", yes().budget(BudgetRange::new(2000, 4000)))];
        assert_eq!(
            summarize_with_budget(&rows, budget).budget,
            BudgetRange::new(2000, 4000)
        );
    }

    #[test]
    fn test_cuisine_top_three() {
        let rows = vec![
            row("A", yes().cuisine("焼き鳥, 居酒屋")),
            row("B", yes().cuisine("居酒屋")),
            row("C", yes().cuisine("寿司")),
        ];
        assert_eq!(summarize(&rows).cuisine, vec!["居酒屋", "焼き鳥", "寿司"]);
    }

    #[test]
    fn test_cuisine_caps_at_three() {
        let rows = vec![row("A", yes().cuisine("a, b, c, d")), row("B", yes().cuisine("d"))];
        assert_eq!(summarize(&rows).cuisine, vec!["d", "a", "b"]);
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let rows = vec![
            row("A", yes().dates(["2024-07-01"]).area("上野").cuisine("和食")),
            row("B", yes().dates(["2024-07-02"]).area("神田").cuisine("中華")),
        ];
        assert_eq!(summarize(&rows), summarize(&rows));
    }
}
