//! コマンドライン設定
//!
//! 引数を手書きのパーサで `CrawlOptions` に変換する。

use crate::error::ConfigError;

const DEFAULT_TARGET: &str = "the";
const DEFAULT_STRIDE: usize = 2;

/// 実行時オプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOptions {
    /// 出現回数を数える単語
    pub target: String,
    /// 間引き表示の間隔（2 で「1語おき」）
    pub stride: usize,
    /// 入力行の前後のスペースを取り除くか
    pub trim: bool,
    /// `--verbose` の指定回数
    pub verbosity: u8,
    /// `--help` が指定されたか
    pub show_help: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            stride: DEFAULT_STRIDE,
            trim: false,
            verbosity: 0,
            show_help: false,
        }
    }
}

impl CrawlOptions {
    /// 引数列（プログラム名を除く）を解析
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut options = Self::default();
        let mut iter = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--target" => {
                    let value = iter.next().ok_or_else(|| missing_value(&arg))?;
                    options.target = parse_target(value)?;
                }
                "--stride" => {
                    let value = iter.next().ok_or_else(|| missing_value(&arg))?;
                    options.stride = parse_stride(value)?;
                }
                "--trim" => options.trim = true,
                "-v" | "--verbose" => options.verbosity = options.verbosity.saturating_add(1),
                "-h" | "--help" => options.show_help = true,
                _ => return Err(ConfigError::UnknownOption { option: arg }),
            }
        }

        Ok(options)
    }

    /// 読み込んだ行を単語列として扱える形に整える
    ///
    /// 行末の改行（`\n` / `\r\n`）は常に除去し、`trim` 指定時のみ前後のスペースも除去する。
    pub fn prepare_input<'a>(&self, line: &'a str) -> &'a str {
        let line = line
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(line);

        if self.trim {
            line.trim_matches(' ')
        } else {
            line
        }
    }

    pub fn usage() -> &'static str {
        "Usage: wordcrawler [OPTIONS]\n\
         \n\
         Reads one line of space-separated words from standard input and\n\
         prints word statistics.\n\
         \n\
         Options:\n\
         \x20 --target <WORD>  word whose occurrences are counted (default: the)\n\
         \x20 --stride <N>     print every N-th word (default: 2)\n\
         \x20 --trim           strip leading and trailing spaces from the input\n\
         \x20 -v, --verbose    increase log verbosity (repeatable)\n\
         \x20 -h, --help       print this help"
    }
}

fn missing_value(option: &str) -> ConfigError {
    ConfigError::MissingValue { option: option.to_string() }
}

fn parse_target(value: String) -> Result<String, ConfigError> {
    if value.is_empty() || value.contains(' ') {
        return Err(ConfigError::InvalidTarget { value });
    }
    Ok(value)
}

fn parse_stride(value: String) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(stride) if stride > 0 => Ok(stride),
        _ => Err(ConfigError::InvalidStride { value }),
    }
}
