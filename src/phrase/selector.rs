//! Top-K phrase selection

use super::ngrams::CandidatePhrase;
use crate::types::Phrase;

/// Rank candidates by score and keep the best `top_n` (0 = all).
///
/// Scores are matched to candidates by index; equal scores keep the earlier
/// window first. Fewer than `top_n` candidates are all returned.
pub fn select_top_n(
    candidates: &[CandidatePhrase],
    scores: &[f64],
    top_n: usize,
) -> Vec<Phrase> {
    let mut phrases: Vec<Phrase> = candidates
        .iter()
        .zip(scores)
        .map(|(c, &score)| Phrase::new(c.text.clone(), score, c.position))
        .collect();

    phrases.sort_by(|a, b| a.stable_cmp(b));

    if top_n > 0 {
        phrases.truncate(top_n);
    }

    for (i, phrase) in phrases.iter_mut().enumerate() {
        phrase.rank = i + 1;
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(texts: &[&str]) -> Vec<CandidatePhrase> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| CandidatePhrase {
                position: i,
                text: t.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_orders_by_score_and_assigns_ranks() {
        let c = candidates(&["a b", "b c", "c d"]);
        let top = select_top_n(&c, &[0.2, 0.5, 0.3], 5);

        let texts: Vec<&str> = top.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["b c", "c d", "a b"]);
        assert_eq!(
            top.iter().map(|p| p.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(top[0].position, 1);
    }

    #[test]
    fn test_ties_keep_window_order() {
        let c = candidates(&["w x", "x y", "y z", "z w"]);
        let top = select_top_n(&c, &[0.25, 0.25, 0.25, 0.25], 0);
        let positions: Vec<usize> = top.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_top_n_is_a_cap() {
        let c = candidates(&["a", "b", "c", "d", "e", "f", "g"]);
        let scores = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        assert_eq!(select_top_n(&c, &scores, 5).len(), 5);
        assert_eq!(select_top_n(&c[..2], &scores[..2], 5).len(), 2);
        assert_eq!(select_top_n(&c, &scores, 0).len(), 7);
        assert!(select_top_n(&[], &[], 5).is_empty());
    }
}
