//! エンジン設定
//!
//! 既定値 → 設定ファイル（TOML, `--config`）→ コマンドライン引数 の順に上書きする。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use ruttt_core::search::{DEFAULT_BUDGET_MS, DEFAULT_MAX_DEPTH};
use ruttt_core::SearchLimits;
use serde::Deserialize;

#[derive(Parser, Debug, Default)]
#[command(name = "ruttt", version, about = "Ultimate tic-tac-toe engine over a line protocol")]
pub struct Cli {
    /// 設定ファイル（TOML）
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 1手あたりの思考時間（ms）
    #[arg(long, value_name = "MS")]
    pub budget_ms: Option<u64>,

    /// 反復深化の最大深さ
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<u32>,

    /// 初手の定跡（中央の小盤の中央）を使わない
    #[arg(long)]
    pub no_opening_book: bool,

    /// 対局の種類
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// 1手ごとの探索結果をJSONで標準エラーに出す
    #[arg(long)]
    pub report: bool,

    /// ログを詳しくする（-v: info, -vv: debug）
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// 対局の種類
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 9×9 の ultimate tic-tac-toe
    #[default]
    Ultimate,
    /// 通常の 3×3
    Classic,
}

/// 実行時設定
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub budget_ms: u64,
    pub max_depth: u32,
    pub opening_book: bool,
    pub variant: Variant,
    pub report: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            budget_ms: DEFAULT_BUDGET_MS,
            max_depth: DEFAULT_MAX_DEPTH,
            opening_book: true,
            variant: Variant::Ultimate,
            report: false,
        }
    }
}

impl EngineConfig {
    /// コマンドライン引数（と、指定があれば設定ファイル）から読み込む
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ms) = cli.budget_ms {
            self.budget_ms = ms;
        }
        if let Some(depth) = cli.max_depth {
            self.max_depth = depth;
        }
        if cli.no_opening_book {
            self.opening_book = false;
        }
        if let Some(variant) = cli.variant {
            self.variant = variant;
        }
        if cli.report {
            self.report = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            bail!("max_depth must be at least 1");
        }
        Ok(())
    }

    /// 探索の制限
    pub fn limits(&self) -> SearchLimits {
        SearchLimits::new(Duration::from_millis(self.budget_ms), self.max_depth)
    }
}
