use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// プロトコルに沿って着手を1行出力し、フラッシュする。
pub fn reply_println<W: Write>(out: &mut W, row: u8, col: u8) -> Result<()> {
    writeln!(out, "{row} {col}")?;
    out.flush()?;
    Ok(())
}

/// 探索結果のJSON行を標準エラーへ出す。標準出力はプロトコル専用。
pub fn report_line<T: Serialize>(report: &T) -> Result<()> {
    eprintln!("{}", serde_json::to_string(report)?);
    Ok(())
}
