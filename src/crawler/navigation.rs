//! ナビゲーションアクション
//!
//! `WordCrawler` に対する移動操作を値として表現し、まとめてディスパッチする。

use super::cursor::WordCrawler;
use crate::error::Result;

/// 単語移動操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordMotion {
    Next,
    Previous,
    Forward(usize),
    Backward(usize),
    First,
    Last,
    Seek(usize),
}

impl WordCrawler {
    /// 移動操作を適用し、位置が変化したかどうかを返す
    pub fn navigate(&mut self, motion: WordMotion) -> Result<bool> {
        let before = self.position();

        match motion {
            WordMotion::Next => {
                self.advance()?;
            }
            WordMotion::Previous => {
                self.retreat()?;
            }
            WordMotion::Forward(n) => {
                self.advance_by(n)?;
            }
            WordMotion::Backward(n) => {
                self.retreat_by(n)?;
            }
            WordMotion::First => {
                self.rewind();
            }
            WordMotion::Last => {
                self.fast_forward();
            }
            WordMotion::Seek(index) => {
                self.seek(index)?;
            }
        }

        let moved = self.position() != before;
        log::trace!("{:?}: {} -> {} (moved: {})", motion, before, self.position(), moved);
        Ok(moved)
    }
}
