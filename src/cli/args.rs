// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliMode, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "string_analyzer",
    version = crate::VERSION,
    about = "文字列の文字種別（数字/英字/記号/拡張文字など）を集計するツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 解析する文字列
    #[arg(long = "input-string", alias = "input_string", value_name = "STRING", help_heading = "入力")]
    pub input_string: String,

    /// 詳細モード（大文字/小文字、ASCII/拡張ASCII、記号を区別）
    #[arg(
        short = 'c',
        long = "comprehensive",
        aliases = ["is-comprehensive", "is_comprehensive"],
        conflicts_with = "mode",
        help_heading = "入力"
    )]
    pub comprehensive: bool,

    /// 集計モード（--comprehensive の代替）
    #[arg(long, value_enum, help_heading = "入力")]
    pub mode: Option<CliMode>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 割合（%）列を表示（table/csv/tsv/md）
    #[arg(long, help_heading = "出力")]
    pub ratio: bool,

    /// 文字種別（カテゴリ）ごとの内訳も出力（table/json/yaml）
    #[arg(long, help_heading = "出力")]
    pub categories: bool,

    /// 入力文字列のエコー出力を省略
    #[arg(long, help_heading = "出力")]
    pub hide_input: bool,

    /// 出力先ファイル（未指定なら標準出力）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// ログ詳細度（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
