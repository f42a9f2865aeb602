//! 単語クローラーモジュール
//!
//! スペース区切りテキストの単語単位カーソル、移動操作、単語イテレータを提供

mod snapshot;
pub mod cursor;
pub mod navigation;
pub mod words;

// 公開API
pub use cursor::WordCrawler;
pub use navigation::WordMotion;
pub use words::Words;
