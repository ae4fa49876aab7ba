//! Fixed response strings: lead-in sentences, error texts, score label.

use rand::Rng;

/// Lead-in sentences for a successful answer, each interpolating the
/// original query. Chosen uniformly per response.
const LEAD_INS: [&str; 4] = [
    "Here are some SHL assessments that might be relevant for \"{}\":",
    "Based on your interest in \"{}\", I found these assessments:",
    "For \"{}\", I recommend the following SHL assessments:",
    "I've found these relevant SHL assessments matching \"{}\":",
];

/// Shown instead of cards when a successful answer has no items.
pub const NO_MATCHES: &str =
    "I couldn't find any matching assessments. Please try a different query.";

/// Application failure with no server-supplied text.
pub const DEFAULT_QUERY_ERROR: &str = "An error occurred while processing your query.";

/// Transport or decode failure.
pub const CONNECT_FAILED: &str = "Failed to connect to the server. Please try again later.";

/// Uniform index into the lead-in set. The rng is injected so callers
/// (and tests) control the source.
pub fn pick_lead_in<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(0..LEAD_INS.len())
}

pub fn lead_in(query: &str, index: usize) -> String {
    LEAD_INS[index % LEAD_INS.len()].replacen("{}", query, 1)
}

/// "Match: 87%" from a similarity in [0, 1], rounded to the nearest
/// integer percent.
pub fn match_label(similarity: f64) -> String {
    format!("Match: {}%", (similarity * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn match_label_rounds_to_nearest_percent() {
        assert_eq!(match_label(0.873), "Match: 87%");
        assert_eq!(match_label(0.875), "Match: 88%");
        assert_eq!(match_label(0.0), "Match: 0%");
        assert_eq!(match_label(1.0), "Match: 100%");
        assert_eq!(match_label(0.005), "Match: 1%");
    }

    #[test]
    fn lead_in_interpolates_query_once() {
        for i in 0..LEAD_INS.len() {
            let s = lead_in("java developers", i);
            assert!(s.contains("\"java developers\""), "{s}");
            assert!(!s.contains("{}"), "{s}");
        }
    }

    #[test]
    fn pick_stays_in_range_and_is_seed_deterministic() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let i = pick_lead_in(&mut a);
            assert!(i < LEAD_INS.len());
            assert_eq!(i, pick_lead_in(&mut b));
        }
    }

    #[test]
    fn pick_covers_all_templates() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; LEAD_INS.len()];
        for _ in 0..200 {
            seen[pick_lead_in(&mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
