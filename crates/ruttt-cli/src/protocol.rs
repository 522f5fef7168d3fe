//! 対局サーバからの入力の読み取り
//!
//! 1手ごとに次の形式で届く。
//!
//! ```text
//! r c          相手の着手（まだ無ければ -1 -1）
//! n            合法手の数
//! r c          合法手（n 行）
//! ```
//!
//! 空行か EOF で対局終了とみなす。

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use log::warn;

/// 1手あたりの合法手の最大数（全体盤の 81 マス）
const MAX_LEGAL_MOVES: usize = 81;

/// 1手分の入力
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnInput {
    /// 相手の着手
    pub opponent: Option<(u8, u8)>,
    /// サーバが示した合法手
    pub legal_moves: Vec<(u8, u8)>,
}

/// 行単位の読み取り
pub struct ProtocolReader<R> {
    input: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// 次の1行（EOF なら `None`）
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let read = self
            .input
            .read_line(&mut self.buf)
            .with_context(|| format!("failed to read line {}", self.line_no + 1))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(self.buf.trim().to_owned()))
    }

    /// 次の1手分を読む。対局終了なら `None`
    pub fn next_turn(&mut self) -> Result<Option<TurnInput>> {
        let opponent = match self.next_line()?.as_deref() {
            None | Some("") => return Ok(None),
            Some(line) => {
                let (row, col) = parse_pair(line).with_context(|| format!("line {}", self.line_no))?;
                if (row, col) == (-1, -1) {
                    None
                } else {
                    Some(to_coords(row, col).with_context(|| format!("line {}", self.line_no))?)
                }
            }
        };

        let count: usize = match self.next_line()? {
            None => {
                warn!("input ended before legal move count");
                return Ok(None);
            }
            Some(line) => line
                .parse()
                .with_context(|| format!("line {}: invalid legal move count {line:?}", self.line_no))?,
        };

        if count > MAX_LEGAL_MOVES {
            bail!("line {}: legal move count {count} exceeds {MAX_LEGAL_MOVES}", self.line_no);
        }

        let mut legal_moves = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(line) = self.next_line()? else {
                warn!("input ended inside legal move list");
                return Ok(None);
            };
            let (row, col) = parse_pair(&line).with_context(|| format!("line {}", self.line_no))?;
            legal_moves.push(to_coords(row, col).with_context(|| format!("line {}", self.line_no))?);
        }

        Ok(Some(TurnInput {
            opponent,
            legal_moves,
        }))
    }
}

/// `"r c"` を読む
pub fn parse_pair(line: &str) -> Result<(i32, i32)> {
    let mut it = line.split_whitespace();
    let (Some(row), Some(col), None) = (it.next(), it.next(), it.next()) else {
        bail!("expected two integers, got {line:?}");
    };
    let row = row.parse().with_context(|| format!("invalid row {row:?}"))?;
    let col = col.parse().with_context(|| format!("invalid column {col:?}"))?;
    Ok((row, col))
}

fn to_coords(row: i32, col: i32) -> Result<(u8, u8)> {
    match (u8::try_from(row), u8::try_from(col)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => bail!("negative or oversized coordinates {row} {col}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> ProtocolReader<&[u8]> {
        ProtocolReader::new(text.as_bytes())
    }

    #[test]
    fn test_first_turn_without_opponent() {
        let mut r = reader("-1 -1\n2\n0 0\n0 1\n");
        let turn = r.next_turn().unwrap().unwrap();
        assert_eq!(turn.opponent, None);
        assert_eq!(turn.legal_moves, vec![(0, 0), (0, 1)]);
        assert_eq!(r.next_turn().unwrap(), None);
    }

    #[test]
    fn test_opponent_move_and_zero_count() {
        let mut r = reader("4 4\n0\n");
        let turn = r.next_turn().unwrap().unwrap();
        assert_eq!(turn.opponent, Some((4, 4)));
        assert!(turn.legal_moves.is_empty());
    }

    #[test]
    fn test_blank_line_ends_game() {
        let mut r = reader("\n4 4\n0\n");
        assert_eq!(r.next_turn().unwrap(), None);
    }

    #[test]
    fn test_truncated_input_ends_game() {
        let mut r = reader("3 3\n2\n0 0\n");
        assert_eq!(r.next_turn().unwrap(), None);
    }

    #[test]
    fn test_malformed_lines_are_errors() {
        assert!(reader("3\n0\n").next_turn().is_err());
        assert!(reader("a b\n0\n").next_turn().is_err());
        assert!(reader("1 2\nmany\n").next_turn().is_err());
        assert!(reader("-1 4\n0\n").next_turn().is_err());
    }

    #[test]
    fn test_oversized_count_is_an_error() {
        let err = reader("4 4\n18446744073709551615\n").next_turn().unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err:#}");
        assert!(reader("4 4\n82\n").next_turn().is_err());
        assert!(reader("4 4\n81\n").next_turn().unwrap().is_none());
    }

    #[test]
    fn test_parse_pair_whitespace() {
        assert_eq!(parse_pair("  7   8 ").unwrap(), (7, 8));
        assert!(parse_pair("1 2 3").is_err());
    }
}
