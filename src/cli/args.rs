// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use langcount_domain::config::DEFAULT_CONCURRENCY;

use super::value_enum::CliOutputFormat;

/// clap で解析するコマンドライン引数
#[derive(Parser, Debug)]
#[command(
    name = "langcount",
    version = crate::VERSION,
    about = "言語別のコード/コメント/空行の集計ツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 出力フォーマット
    #[arg(short = 'o', long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 行を読まずに言語ごとのファイル数だけを数える
    #[arg(long, help_heading = "集計")]
    pub count_files: bool,

    /// 言語不明のファイルを `unknown_<拡張子>` として記録する
    #[arg(long, help_heading = "集計")]
    pub unknown: bool,

    /// 同時にスキャンするファイル数の上限
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY, help_heading = "集計")]
    pub jobs: usize,

    /// 組み込みの言語定義を上書きする JSON/YAML ファイル
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "言語")]
    pub languages: Option<PathBuf>,

    /// 設定済みの言語名を一覧表示して終了する
    #[arg(long, help_heading = "言語")]
    pub list_languages: bool,

    /// .gitignore などの除外設定を無視する
    #[arg(long, help_heading = "走査")]
    pub no_gitignore: bool,

    /// 隠しファイル/ディレクトリを除外する
    #[arg(long, help_heading = "走査")]
    pub no_hidden: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow: bool,

    /// 各入力からたどるディレクトリの最大深さ
    #[arg(long, value_name = "N", help_heading = "走査")]
    pub max_depth: Option<usize>,

    /// 対象パス（ファイルまたはディレクトリ）
    #[arg(
        value_hint = ValueHint::AnyPath,
        required_unless_present = "list_languages"
    )]
    pub paths: Vec<PathBuf>,
}
