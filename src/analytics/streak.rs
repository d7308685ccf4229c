use chrono::{Duration, NaiveDate};

/// Consecutive check-in days ending at the most recent check-in, which must
/// be `today` or yesterday; otherwise the streak is broken and counts as 0.
/// Gaps terminate the walk immediately.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    let Some(&latest) = sorted.first() else {
        return 0;
    };
    if latest != today && latest != today - Duration::days(1) {
        return 0;
    }

    let mut streak = 1;
    let mut current = latest;
    for &date in &sorted[1..] {
        if date == current - Duration::days(1) {
            streak += 1;
            current = date;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive days anywhere in the history, independent of
/// whether it reaches today.
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for &date in &sorted {
        run = match prev {
            Some(p) if date == p + Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}
