//! テキストスナップショット
//!
//! 単語移動に必要な境界走査を、所有したテキスト上のオフセット演算として提供する。
//! 区切り文字は半角スペース `' '` のみ。スペースは常に UTF-8 の文字境界なので、
//! 走査結果のオフセットでそのままスライスできる。

use crate::error::InputDefect;

const SPACE: u8 = b' ';

/// 検証済みの不変テキスト
///
/// * 空でない
/// * 先頭・末尾がスペースではない
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextSnapshot {
    text: String,
}

impl TextSnapshot {
    /// 入力を検証してスナップショットを作成
    pub(crate) fn new(text: String) -> Result<Self, InputDefect> {
        let bytes = text.as_bytes();
        let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
            return Err(InputDefect::Empty);
        };

        if bytes.iter().all(|&b| b == SPACE) {
            return Err(InputDefect::BlankOnly);
        }
        if first == SPACE {
            return Err(InputDefect::LeadingSpace);
        }
        if last == SPACE {
            return Err(InputDefect::TrailingSpace);
        }

        Ok(Self { text })
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// 先頭バイトのオフセット（常に0）
    pub(crate) fn start(&self) -> usize {
        0
    }

    /// 末尾バイトのオフセット
    pub(crate) fn end(&self) -> usize {
        self.text.len() - 1
    }

    /// `pos` から始まる単語の終端（排他的）
    ///
    /// 次のスペースの位置、または最後の単語ならテキスト長を返す。
    pub(crate) fn word_end(&self, pos: usize) -> usize {
        let bytes = self.bytes();
        let mut cursor = pos;
        while cursor < bytes.len() && bytes[cursor] != SPACE {
            cursor += 1;
        }
        cursor
    }

    /// `pos` から始まる単語の文字列
    pub(crate) fn word_from(&self, pos: usize) -> &str {
        &self.text[pos..self.word_end(pos)]
    }

    /// 次の単語の先頭オフセット
    ///
    /// 現在の単語を読み飛ばし、連続するスペースもまとめて読み飛ばす。
    /// 最後の単語上では `None`。
    pub(crate) fn next_word_start(&self, pos: usize) -> Option<usize> {
        let bytes = self.bytes();
        let mut cursor = self.word_end(pos);
        if cursor > self.end() {
            return None;
        }
        while cursor <= self.end() && bytes[cursor] == SPACE {
            cursor += 1;
        }
        (cursor <= self.end()).then_some(cursor)
    }

    /// 前の単語の先頭オフセット
    ///
    /// `pos - 1` から後方へ「直前が非スペースであるスペース」（前の単語の直後の境界）を探し、
    /// そこから非スペースの連続を遡って単語の先頭に着地する。
    /// 最初の単語上では `None`。
    pub(crate) fn prev_word_start(&self, pos: usize) -> Option<usize> {
        if pos == self.start() {
            return None;
        }

        let bytes = self.bytes();
        let mut boundary = pos - 1;
        while boundary > self.start() && !(bytes[boundary] == SPACE && bytes[boundary - 1] != SPACE) {
            boundary -= 1;
        }

        let mut cursor = boundary;
        while cursor > self.start() && bytes[cursor - 1] != SPACE {
            cursor -= 1;
        }
        Some(cursor)
    }

    /// 最後の単語の先頭オフセット（`end` から直前のスペースまで遡る）
    pub(crate) fn last_word_start(&self) -> usize {
        let bytes = self.bytes();
        let mut cursor = self.end();
        while cursor > self.start() && bytes[cursor - 1] != SPACE {
            cursor -= 1;
        }
        cursor
    }

    /// `index` 番目（0始まり）の単語の先頭オフセット
    pub(crate) fn word_start_at(&self, index: usize) -> Option<usize> {
        let mut cursor = self.start();
        for _ in 0..index {
            cursor = self.next_word_start(cursor)?;
        }
        Some(cursor)
    }

    /// `pos` が単語の先頭かどうか
    fn is_word_start(&self, pos: usize) -> bool {
        let bytes = self.bytes();
        bytes[pos] != SPACE && (pos == 0 || bytes[pos - 1] == SPACE)
    }

    /// `pos` より前にある単語の数（`pos` が単語先頭なら、その単語のインデックス）
    pub(crate) fn words_before(&self, pos: usize) -> usize {
        (self.start()..pos).filter(|&idx| self.is_word_start(idx)).count()
    }

    /// テキスト中の単語数
    pub(crate) fn word_count(&self) -> usize {
        self.words_before(self.text.len())
    }
}
