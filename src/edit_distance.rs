use bk_tree::Metric;

/// Levenshtein distance between two strings, counted in chars.
///
/// Runs the usual two-row dynamic program with the shorter string as the
/// inner dimension, so working space is `O(min(m, n))`.
pub fn levenshtein(a: &str, b: &str) -> u32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (long, short) = if a_chars.len() < b_chars.len() {
        (b_chars, a_chars)
    } else {
        (a_chars, b_chars)
    };

    if short.is_empty() {
        return long.len() as u32;
    }

    let mut prev_row: Vec<u32> = (0..=short.len() as u32).collect();
    let mut curr_row: Vec<u32> = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr_row[0] = i as u32 + 1;
        for (j, short_char) in short.iter().enumerate() {
            let cost = if long_char == short_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Unit-cost edit distance as a metric usable by any BK-tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistance;

impl Metric<str> for EditDistance {
    fn distance(&self, a: &str, b: &str) -> u32 {
        levenshtein(a, b)
    }

    fn threshold_distance(&self, a: &str, b: &str, threshold: u32) -> Option<u32> {
        // the length gap is a lower bound on the distance
        let gap = a.chars().count().abs_diff(b.chars().count());
        if gap as u32 > threshold {
            return None;
        }
        let distance = levenshtein(a, b);
        if distance <= threshold {
            Some(distance)
        } else {
            None
        }
    }
}
