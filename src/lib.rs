//! wordcrawler - word-granularity cursor over space-delimited text
//!
//! 単語単位カーソルと、それを使う単語レポートの実装

// コアモジュール
pub mod error;
pub mod logging;
pub mod config;
pub mod app;

// データ層
pub mod crawler;

// ロジック層
pub mod report;

// 公開API
pub use app::App;
pub use config::CrawlOptions;
pub use crawler::{WordCrawler, WordMotion, Words};
pub use error::{BoundaryError, ConfigError, CrawlerError, InputDefect, Result};
pub use report::Report;
