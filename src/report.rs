//! 単語レポート
//!
//! `WordCrawler` の移動 API だけを使って、単語数・対象語の出現回数・
//! 間引き表示・逆順表示を求める。各関数は入力カーソルを複製して走査するので、
//! 呼び出し元のカーソル位置は変わらない。

use std::fmt;

use crate::config::CrawlOptions;
use crate::crawler::WordCrawler;
use crate::error::{ConfigError, Result};

/// 単語数
pub fn count_words(crawler: &WordCrawler) -> Result<usize> {
    let mut cursor = crawler.clone();
    cursor.rewind();

    let mut count = 1;
    while !cursor.is_last_word() {
        cursor.advance()?;
        count += 1;
    }
    Ok(count)
}

/// `target` と完全一致する単語の数
pub fn count_occurrences(crawler: &WordCrawler, target: &str) -> Result<usize> {
    let mut cursor = crawler.clone();
    cursor.rewind();

    let mut count = usize::from(cursor.current() == target);
    while !cursor.is_last_word() {
        cursor.advance()?;
        if cursor.current() == target {
            count += 1;
        }
    }
    Ok(count)
}

/// インデックスが `stride` の倍数の単語（`stride == 2` で1語おき）
pub fn stride_words(crawler: &WordCrawler, stride: usize) -> Result<Vec<String>> {
    if stride == 0 {
        return Err(ConfigError::InvalidStride { value: stride.to_string() }.into());
    }

    let mut cursor = crawler.clone();
    cursor.rewind();

    let mut words = Vec::new();
    let mut index = 0;
    loop {
        if index % stride == 0 {
            words.push(cursor.current().to_owned());
        }
        if cursor.is_last_word() {
            break;
        }
        cursor.advance()?;
        index += 1;
    }
    Ok(words)
}

/// 最後の単語から最初の単語までの逆順
pub fn reverse_words(crawler: &WordCrawler) -> Result<Vec<String>> {
    let mut cursor = crawler.clone();
    cursor.fast_forward();

    let mut words = vec![cursor.current().to_owned()];
    while !cursor.is_first_word() {
        cursor.retreat()?;
        words.push(cursor.current().to_owned());
    }
    Ok(words)
}

/// CLI が出力する4行分の集計結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub word_count: usize,
    pub target: String,
    pub target_count: usize,
    pub stride: usize,
    pub strided: Vec<String>,
    pub reversed: Vec<String>,
}

impl Report {
    pub fn build(crawler: &WordCrawler, options: &CrawlOptions) -> Result<Self> {
        let report = Self {
            word_count: count_words(crawler)?,
            target: options.target.clone(),
            target_count: count_occurrences(crawler, &options.target)?,
            stride: options.stride,
            strided: stride_words(crawler, options.stride)?,
            reversed: reverse_words(crawler)?,
        };
        log::debug!(
            "report built: {} words, {} x {:?}",
            report.word_count,
            report.target_count,
            report.target
        );
        Ok(report)
    }

    fn stride_label(&self) -> String {
        match self.stride {
            1 => "Every word is".to_string(),
            2 => "Every other word is".to_string(),
            n => format!("Every {} word is", ordinal(n)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The total number of words is: {}", self.word_count)?;
        writeln!(
            f,
            "The total number of times '{}' appears is: {}",
            self.target, self.target_count
        )?;
        writeln!(f, "{}: {}", self.stride_label(), self.strided.join(" "))?;
        writeln!(f, "The words in reverse order are: {}", self.reversed.join(" "))
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawler(text: &str) -> WordCrawler {
        WordCrawler::new(text).unwrap()
    }

    #[test]
    fn counts_words_and_targets() {
        let c = crawler("the cat sat on the mat");
        assert_eq!(count_words(&c).unwrap(), 6);
        assert_eq!(count_occurrences(&c, "the").unwrap(), 2);
        assert_eq!(count_occurrences(&c, "The").unwrap(), 0);
        assert_eq!(count_occurrences(&c, "mat").unwrap(), 1);
    }

    #[test]
    fn stride_selects_multiples_of_the_stride() {
        let c = crawler("a b c d e f g");
        assert_eq!(stride_words(&c, 1).unwrap(), ["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(stride_words(&c, 2).unwrap(), ["a", "c", "e", "g"]);
        assert_eq!(stride_words(&c, 3).unwrap(), ["a", "d", "g"]);
        assert_eq!(stride_words(&c, 10).unwrap(), ["a"]);
        assert!(stride_words(&c, 0).is_err());
    }

    #[test]
    fn routines_leave_the_callers_cursor_alone() {
        let mut c = crawler("one two three");
        c.advance().unwrap();
        assert_eq!(reverse_words(&c).unwrap(), ["three", "two", "one"]);
        assert_eq!(count_words(&c).unwrap(), 3);
        assert_eq!(c.current(), "two");
    }

    #[test]
    fn renders_the_four_lines() {
        let c = crawler("the cat sat");
        let report = Report::build(&c, &CrawlOptions::default()).unwrap();
        assert_eq!(
            report.to_string(),
            "The total number of words is: 3\n\
             The total number of times 'the' appears is: 1\n\
             Every other word is: the sat\n\
             The words in reverse order are: sat cat the\n"
        );
    }

    #[test]
    fn stride_label_uses_ordinals() {
        let c = crawler("a b c d");
        let options = CrawlOptions { stride: 3, ..CrawlOptions::default() };
        let report = Report::build(&c, &options).unwrap();
        assert!(report.to_string().contains("Every 3rd word is: a d\n"));

        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(112), "112th");
    }
}
