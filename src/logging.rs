//! ロギングシステム
//!
//! `log` ファサードの出力先として `env_logger` を初期化する。
//! 出力は標準エラーのみ（標準出力はレポート専用）。

use log::LevelFilter;

/// `--verbose` の回数からログレベルを決める
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// ロガーを初期化する
///
/// `RUST_LOG` が設定されていればそちらを優先する。二重初期化は無視する。
pub fn init(verbosity: u8) {
    let result = env_logger::builder()
        .format_timestamp(None)
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialised");
    }
}
