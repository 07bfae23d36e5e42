//! Uniform sampling of quiz questions and shuffling of answer options.
//!
//! Both operations use Fisher–Yates via rand's `SliceRandom`, so every
//! subset and every ordering is equally likely.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Choice, Question, SampledQuiz, ShuffledOptions};

/// Select `min(length, all.len())` distinct questions in uniformly random order.
///
/// `all` is never reordered; the shuffle runs over a vector of indices.
pub fn sample<R: Rng + ?Sized>(all: &[Question], length: usize, rng: &mut R) -> SampledQuiz {
    if all.len() < length {
        tracing::warn!(
            available = all.len(),
            requested = length,
            "fewer questions available than requested, using all of them"
        );
    }

    let mut indices: Vec<usize> = (0..all.len()).collect();
    let amount = length.min(all.len());
    let (picked, _) = indices.partial_shuffle(rng, amount);

    let questions = picked.iter().map(|&i| all[i].clone()).collect();
    SampledQuiz::new(questions, length)
}

/// Return every option exactly once in uniformly random order.
pub fn shuffle_options<R: Rng + ?Sized>(
    options: &BTreeMap<String, String>,
    rng: &mut R,
) -> ShuffledOptions {
    let mut choices: Vec<Choice> = options
        .iter()
        .map(|(key, text)| Choice {
            key: key.clone(),
            text: text.clone(),
        })
        .collect();
    choices.shuffle(rng);
    ShuffledOptions::new(choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn question(n: usize) -> Question {
        let options = [("a", "yes"), ("b", "no"), ("c", "maybe"), ("d", "never")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Question::new(format!("question {n}"), options, "a").unwrap()
    }

    fn bank(size: usize) -> Vec<Question> {
        (0..size).map(question).collect()
    }

    #[test]
    fn sample_caps_at_requested_length() {
        let all = bank(25);
        let mut rng = StdRng::seed_from_u64(7);
        let quiz = sample(&all, 10, &mut rng);

        assert_eq!(quiz.len(), 10);
        assert!(!quiz.is_short());
        let texts: HashSet<&str> = quiz.questions().iter().map(|q| q.text()).collect();
        assert_eq!(texts.len(), 10, "sampled questions must be distinct");
        assert!(quiz.questions().iter().all(|q| all.contains(q)));
    }

    #[test]
    fn small_bank_uses_every_question() {
        let all = bank(3);
        let mut rng = StdRng::seed_from_u64(11);
        let quiz = sample(&all, 10, &mut rng);

        assert_eq!(quiz.len(), 3);
        assert!(quiz.is_short());
        assert_eq!(quiz.requested(), 10);
        let sampled: HashSet<&str> = quiz.questions().iter().map(|q| q.text()).collect();
        let expected: HashSet<&str> = all.iter().map(|q| q.text()).collect();
        assert_eq!(sampled, expected);
    }

    #[test]
    fn exact_size_bank_is_not_short() {
        let all = bank(10);
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = sample(&all, 10, &mut rng);
        assert_eq!(quiz.len(), 10);
        assert!(!quiz.is_short());
    }

    #[test]
    fn sample_leaves_input_untouched() {
        let all = bank(12);
        let before = all.clone();
        let mut rng = StdRng::seed_from_u64(5);
        let _ = sample(&all, 10, &mut rng);
        assert_eq!(all, before);
    }

    #[test]
    fn every_question_can_be_selected() {
        let all = bank(15);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            for q in sample(&all, 10, &mut rng).questions() {
                seen.insert(q.text().to_string());
            }
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn first_position_is_roughly_uniform() {
        let all = bank(4);
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts = [0usize; 4];
        let runs = 4000;
        for _ in 0..runs {
            let quiz = sample(&all, 4, &mut rng);
            let first = quiz.questions()[0].text();
            let idx = all.iter().position(|q| q.text() == first).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            // Expected 1000 each; a biased comparator sort lands far outside this band.
            assert!((800..=1200).contains(&count), "counts: {counts:?}");
        }
    }

    #[test]
    fn shuffle_preserves_keys_and_texts() {
        let q = question(0);
        let mut rng = StdRng::seed_from_u64(1);
        let shuffled = shuffle_options(q.options(), &mut rng);

        assert_eq!(shuffled.len(), q.options().len());
        for choice in shuffled.iter() {
            assert_eq!(q.option_text(&choice.key), Some(choice.text.as_str()));
        }
        let keys: HashSet<&str> = shuffled.keys().into_iter().collect();
        assert_eq!(keys.len(), 4);
        assert!(shuffled.contains_key(q.correct_key()));
    }

    #[test]
    fn shuffle_varies_order() {
        let q = question(0);
        let mut rng = StdRng::seed_from_u64(2024);
        let orders: HashSet<Vec<String>> = (0..50)
            .map(|_| {
                shuffle_options(q.options(), &mut rng)
                    .keys()
                    .into_iter()
                    .map(String::from)
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn shuffle_empty_options() {
        let mut rng = StdRng::seed_from_u64(0);
        let shuffled = shuffle_options(&BTreeMap::new(), &mut rng);
        assert!(shuffled.is_empty());
    }
}
