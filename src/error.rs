//! エラーハンドリングシステム
//!
//! wordcrawler 全体で使用される統一されたエラー型とユーティリティを定義

use thiserror::Error;

/// クレート全体のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrawlerError {
    /// 入力テキストが単語列として成立しない
    #[error("input contains no usable words: {0}")]
    EmptyInput(InputDefect),

    /// 先頭・末尾の単語を越えた移動
    #[error("word boundary reached: {0}")]
    Boundary(#[from] BoundaryError),

    /// 設定エラー
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 入出力エラー
    #[error("IO error: {message}")]
    Io { message: String },
}

/// 構築時に検出される入力の欠陥
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDefect {
    #[error("text is empty")]
    Empty,

    #[error("text consists only of spaces")]
    BlankOnly,

    #[error("text starts with a space")]
    LeadingSpace,

    #[error("text ends with a space")]
    TrailingSpace,
}

/// 境界越えの種類
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("cursor is already on the first word")]
    StartOfText,

    #[error("cursor is already on the last word")]
    EndOfText,

    #[error("word index {index} is out of range (text has {word_count} words)")]
    IndexOutOfRange { index: usize, word_count: usize },
}

/// コマンドライン設定のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option {option} requires a value")]
    MissingValue { option: String },

    #[error("stride must be a positive integer, got {value:?}")]
    InvalidStride { value: String },

    #[error("target must be a single word, got {value:?}")]
    InvalidTarget { value: String },

    #[error("unknown option: {option}")]
    UnknownOption { option: String },
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, CrawlerError>;

// std::io::Error から CrawlerError への変換
impl From<std::io::Error> for CrawlerError {
    fn from(error: std::io::Error) -> Self {
        CrawlerError::Io { message: error.to_string() }
    }
}

impl From<InputDefect> for CrawlerError {
    fn from(defect: InputDefect) -> Self {
        CrawlerError::EmptyInput(defect)
    }
}

impl CrawlerError {
    /// 境界エラーかどうか
    pub fn is_boundary(&self) -> bool {
        matches!(self, CrawlerError::Boundary(_))
    }
}

/// パニックハンドラの設定
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info.location().unwrap_or_else(|| {
            std::panic::Location::caller()
        });

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_error_converts_into_crawler_error() {
        let error: CrawlerError = BoundaryError::EndOfText.into();
        assert!(error.is_boundary());
        assert_eq!(error, CrawlerError::Boundary(BoundaryError::EndOfText));
    }

    #[test]
    fn input_defect_is_reported_as_empty_input() {
        let error: CrawlerError = InputDefect::LeadingSpace.into();
        assert!(!error.is_boundary());
        assert_eq!(
            error.to_string(),
            "input contains no usable words: text starts with a space"
        );
    }

    #[test]
    fn index_out_of_range_message_names_the_word_count() {
        let error = BoundaryError::IndexOutOfRange { index: 7, word_count: 3 };
        assert_eq!(
            error.to_string(),
            "word index 7 is out of range (text has 3 words)"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let error: CrawlerError = io.into();

        match error {
            CrawlerError::Io { message } => assert!(message.contains("stdin closed")),
            _ => panic!("Expected Io error"),
        }
    }
}
