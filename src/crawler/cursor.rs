//! 単語カーソル
//!
//! 不変テキスト上を単語単位で移動するカーソル `WordCrawler` を提供する。
//! 位置は常にいずれかの単語の先頭バイトを指し、境界を越える移動は
//! `BoundaryError` として報告される（カーソルは動かない）。

use super::snapshot::TextSnapshot;
use super::words::Words;
use crate::error::{BoundaryError, Result};

/// 単語単位のカーソル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCrawler {
    /// 所有している入力テキストのコピー
    snapshot: TextSnapshot,
    /// 現在の単語の先頭オフセット（バイト単位）
    position: usize,
}

impl WordCrawler {
    /// テキストをコピーしてカーソルを作成し、最初の単語に配置する
    ///
    /// 空文字列、スペースのみ、先頭または末尾がスペースの入力は
    /// `CrawlerError::EmptyInput` で拒否する。
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let snapshot = TextSnapshot::new(text.into()).map_err(|defect| {
            log::debug!("rejected input: {}", defect);
            defect
        })?;
        log::debug!(
            "crawler created over {} bytes ({} words)",
            snapshot.as_str().len(),
            snapshot.word_count()
        );

        let position = snapshot.start();
        Ok(Self { snapshot, position })
    }

    /// 元のテキスト
    pub fn text(&self) -> &str {
        self.snapshot.as_str()
    }

    /// 現在位置（バイトオフセット）
    pub fn position(&self) -> usize {
        self.position
    }

    /// 現在の単語のインデックス（0始まり）
    pub fn index(&self) -> usize {
        self.snapshot.words_before(self.position)
    }

    /// テキスト中の単語数
    pub fn word_count(&self) -> usize {
        self.snapshot.word_count()
    }

    /// 現在の単語
    pub fn current(&self) -> &str {
        self.snapshot.word_from(self.position)
    }

    /// 次の単語へ進む
    pub fn advance(&mut self) -> Result<&mut Self> {
        self.position = self
            .snapshot
            .next_word_start(self.position)
            .ok_or(BoundaryError::EndOfText)?;
        Ok(self)
    }

    /// 前の単語へ戻る
    pub fn retreat(&mut self) -> Result<&mut Self> {
        self.position = self
            .snapshot
            .prev_word_start(self.position)
            .ok_or(BoundaryError::StartOfText)?;
        Ok(self)
    }

    /// `n` 単語進む。途中で末尾に達する場合は一切移動しない。
    pub fn advance_by(&mut self, n: usize) -> Result<&mut Self> {
        let mut target = self.position;
        for _ in 0..n {
            target = self
                .snapshot
                .next_word_start(target)
                .ok_or(BoundaryError::EndOfText)?;
        }
        self.position = target;
        Ok(self)
    }

    /// `n` 単語戻る。途中で先頭に達する場合は一切移動しない。
    pub fn retreat_by(&mut self, n: usize) -> Result<&mut Self> {
        let mut target = self.position;
        for _ in 0..n {
            target = self
                .snapshot
                .prev_word_start(target)
                .ok_or(BoundaryError::StartOfText)?;
        }
        self.position = target;
        Ok(self)
    }

    /// `index` 番目の単語を返す。カーソルは移動しない。
    pub fn word_at(&self, index: usize) -> Result<&str> {
        let start = self.word_start_at(index)?;
        Ok(self.snapshot.word_from(start))
    }

    /// カーソルを `index` 番目の単語へ移動する
    pub fn seek(&mut self, index: usize) -> Result<&mut Self> {
        self.position = self.word_start_at(index)?;
        Ok(self)
    }

    /// 最初の単語へ移動
    pub fn rewind(&mut self) -> &mut Self {
        self.position = self.snapshot.start();
        self
    }

    /// 最後の単語へ移動
    pub fn fast_forward(&mut self) -> &mut Self {
        self.position = self.snapshot.last_word_start();
        self
    }

    pub fn is_first_word(&self) -> bool {
        self.position == self.snapshot.start()
    }

    pub fn is_last_word(&self) -> bool {
        self.position == self.snapshot.last_word_start()
    }

    /// 全単語を先頭から走査するイテレータ（カーソル位置とは無関係）
    pub fn words(&self) -> Words<'_> {
        Words::new(self.text())
    }

    fn word_start_at(&self, index: usize) -> Result<usize> {
        self.snapshot.word_start_at(index).ok_or_else(|| {
            BoundaryError::IndexOutOfRange {
                index,
                word_count: self.word_count(),
            }
            .into()
        })
    }
}
