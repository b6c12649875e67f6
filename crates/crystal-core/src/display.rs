//! Luck-rank labels shown beside the streak counter.

/// Rank labels indexed by current streak, from 不運 (no luck) at 0 up to
/// 神運 (divine luck) at a completed streak of 11.
pub const LUCK_LABELS: [&str; 12] = [
    "不運", "平運", "好運", "強運", "淒運", "幸運", "魅運", "激運", "超運", "豪運", "剛運", "神運",
];

/// Shown before the first toss of a session.
pub const LABEL_UNSTARTED: &str = "運否天賦";

/// Shown for streaks past the end of the label table.
pub const LABEL_OVERFLOW: &str = "何運";

/// Label for the given streak counter (`None` = session not started).
pub fn luck_label(streak: Option<u8>) -> &'static str {
    match streak {
        None => LABEL_UNSTARTED,
        Some(s) => LUCK_LABELS
            .get(s as usize)
            .copied()
            .unwrap_or(LABEL_OVERFLOW),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_the_whole_streak_range() {
        assert_eq!(luck_label(None), LABEL_UNSTARTED);
        assert_eq!(luck_label(Some(0)), "不運");
        assert_eq!(luck_label(Some(11)), "神運");
        assert_eq!(luck_label(Some(12)), LABEL_OVERFLOW);
    }
}
