//! メインアプリケーション構造体
//!
//! プロンプト表示、1行の読み込み、レポート出力までの1セッションを実装

use std::io::{BufRead, Write};

use crate::config::CrawlOptions;
use crate::crawler::WordCrawler;
use crate::error::Result;
use crate::report::Report;

pub const PROMPT: &str = "Please input some words: ";

/// 1回分の対話セッション
#[derive(Debug, Clone, Default)]
pub struct App {
    options: CrawlOptions,
}

impl App {
    pub fn new(options: CrawlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CrawlOptions {
        &self.options
    }

    /// プロンプトを出し、1行読み込んでレポートを書き出す
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<Report> {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        log::debug!("read {} bytes from input", read);

        let crawler = WordCrawler::new(self.options.prepare_input(&line))?;
        let report = Report::build(&crawler, &self.options)?;

        write!(output, "{}", report)?;
        output.flush()?;
        Ok(report)
    }
}
