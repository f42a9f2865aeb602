//! WordCrawler public API property tests
//!
//! The cursor is checked against a plain `split(' ')` model of the same text,
//! so every stepping and indexing operation is exercised on arbitrary spacing.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use wordcrawler::report::{count_words, reverse_words, stride_words};
use wordcrawler::{WordCrawler, WordMotion};

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}",
        Just("the".to_string()),
        "[äöü€]{1,3}",
    ]
}

/// Words joined by runs of one to three spaces.
fn spaced_text() -> impl Strategy<Value = (Vec<String>, String)> {
    proptest::collection::vec((word(), 1usize..4), 1..24).prop_map(|parts| {
        let words: Vec<String> = parts.iter().map(|(w, _)| w.clone()).collect();
        let mut text = String::new();
        for (idx, (w, gap)) in parts.iter().enumerate() {
            if idx > 0 {
                text.push_str(&" ".repeat(*gap));
            }
            text.push_str(w);
        }
        (words, text)
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn word_at_matches_split_model((words, text) in spaced_text()) {
        let crawler = WordCrawler::new(text.as_str()).unwrap();
        prop_assert_eq!(crawler.word_count(), words.len());
        for (idx, expected) in words.iter().enumerate() {
            prop_assert_eq!(crawler.word_at(idx).unwrap(), expected.as_str());
        }
        prop_assert!(crawler.word_at(words.len()).is_err());
        prop_assert!(crawler.words().eq(words.iter().map(String::as_str)));
    }

    #[test]
    fn advance_then_retreat_returns_to_the_same_word((words, text) in spaced_text()) {
        let mut crawler = WordCrawler::new(text.as_str()).unwrap();
        for idx in 0..words.len() - 1 {
            let before = crawler.position();
            crawler.advance().unwrap();
            prop_assert_eq!(crawler.current(), words[idx + 1].as_str());
            crawler.retreat().unwrap();
            prop_assert_eq!(crawler.position(), before);
            crawler.advance().unwrap();
        }
        prop_assert!(crawler.is_last_word());
    }

    #[test]
    fn boundaries_hold_only_at_the_ends((words, text) in spaced_text()) {
        let mut crawler = WordCrawler::new(text.as_str()).unwrap();
        let last = words.len() - 1;
        for idx in 0..words.len() {
            crawler.navigate(WordMotion::Seek(idx)).unwrap();
            prop_assert_eq!(crawler.index(), idx);
            prop_assert_eq!(crawler.is_first_word(), idx == 0);
            prop_assert_eq!(crawler.is_last_word(), idx == last);
        }

        crawler.rewind();
        let start = crawler.position();
        prop_assert!(crawler.retreat().is_err());
        prop_assert_eq!(crawler.position(), start);
    }

    #[test]
    fn extra_spaces_do_not_change_the_words((words, text) in spaced_text()) {
        let single = words.join(" ");
        let spaced = WordCrawler::new(text.as_str()).unwrap();
        let compact = WordCrawler::new(single.as_str()).unwrap();

        prop_assert_eq!(count_words(&spaced).unwrap(), count_words(&compact).unwrap());
        prop_assert_eq!(reverse_words(&spaced).unwrap(), reverse_words(&compact).unwrap());
        prop_assert_eq!(stride_words(&spaced, 2).unwrap(), stride_words(&compact, 2).unwrap());
    }

    #[test]
    fn multi_steps_agree_with_single_steps((words, text) in spaced_text(), n in 0usize..30) {
        let mut stepped = WordCrawler::new(text.as_str()).unwrap();
        let mut jumped = stepped.clone();

        let result = jumped.advance_by(n);
        if n < words.len() {
            prop_assert!(result.is_ok());
            for _ in 0..n {
                stepped.advance().unwrap();
            }
            prop_assert_eq!(jumped.position(), stepped.position());
            jumped.retreat_by(n).unwrap();
            prop_assert!(jumped.is_first_word());
        } else {
            prop_assert!(result.is_err());
            prop_assert!(jumped.is_first_word());
        }
    }
}
