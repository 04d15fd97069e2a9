//! Frequency counting and medians

/// Occurrence counts that remember first-seen order
#[derive(Debug, Clone, Default)]
pub struct FrequencyRanking {
    entries: Vec<(String, usize)>,
}

impl FrequencyRanking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.entries.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value.to_string(), 1)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All values, most frequent first, ties in first-seen order
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `k` most frequent values
    pub fn top(&self, k: usize) -> Vec<String> {
        self.ranked().into_iter().take(k).map(|(v, _)| v).collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyRanking {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut ranking = FrequencyRanking::new();
        for value in iter {
            ranking.add(value);
        }
        ranking
    }
}

/// Integer median
///
/// For an even number of values the two middle values are averaged and the
/// result truncated toward zero. Returns `None` for an empty slice.
pub fn median(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        let sum = sorted[mid - 1] as i128 + sorted[mid] as i128;
        Some((sum / 2) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_orders_by_count_then_first_seen() {
        let ranking: FrequencyRanking = ["b", "a", "c", "a", "c"].into_iter().collect();
        assert_eq!(
            ranking.ranked(),
            vec![
                ("a".to_string(), 2),
                ("c".to_string(), 2),
                ("b".to_string(), 1)
            ]
        );
        assert_eq!(ranking.top(1), vec!["a"]);
    }

    #[test]
    fn test_top_with_fewer_entries_than_k() {
        let ranking: FrequencyRanking = ["x"].into_iter().collect();
        assert_eq!(ranking.top(3), vec!["x"]);
        assert!(FrequencyRanking::new().top(3).is_empty());
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[5000, 3000, 4000]), Some(4000));
        assert_eq!(median(&[2000, 3000]), Some(2500));
        assert_eq!(median(&[2000, 3001]), Some(2500));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_truncates_toward_zero() {
        assert_eq!(median(&[-3, 0]), Some(-1));
        assert_eq!(median(&[i64::MAX, i64::MAX]), Some(i64::MAX));
    }
}
