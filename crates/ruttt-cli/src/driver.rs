//! 対局ループ
//!
//! 相手の着手を盤面に反映し、指し手を選んで自分の盤面にも反映してから返す。
//! エンジンは常に `Player::Cross`、相手は `Player::Nought` として盤面に記録する。
//! どちらが先手かはプロトコル（最初の相手の着手が -1 -1 かどうか）で決まる。

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use ruttt_core::{Move, Player, SearchOutcome, Square, SubBoard, UltimateBoard, classic, select_move_with};
use serde::Serialize;

use crate::config::{EngineConfig, Variant};
use crate::io::{reply_println, report_line};
use crate::protocol::{ProtocolReader, TurnInput};

/// エンジン側
pub const ENGINE: Player = Player::Cross;
/// 相手側
pub const OPPONENT: Player = Player::Nought;
/// 先手の初手（中央の小盤の中央）
const OPENING_MOVE: (u8, u8) = (4, 4);

/// 対局中の盤面
#[derive(Debug, Clone)]
enum Game {
    Ultimate(UltimateBoard),
    Classic(SubBoard),
}

/// 指し手の出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveSource {
    Book,
    Search,
    Solver,
    Fallback,
}

/// 1手分の記録（`--report`）
#[derive(Debug, Clone, Serialize)]
struct TurnReport {
    turn: u32,
    source: MoveSource,
    row: u8,
    col: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<SearchOutcome>,
}

pub struct Driver {
    config: EngineConfig,
    game: Game,
    turn: u32,
}

impl Driver {
    pub fn new(config: EngineConfig) -> Self {
        let game = match config.variant {
            Variant::Ultimate => Game::Ultimate(UltimateBoard::new()),
            Variant::Classic => Game::Classic(SubBoard::new()),
        };
        Self {
            config,
            game,
            turn: 0,
        }
    }

    /// 入力が尽きるまで対局する
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        let mut reader = ProtocolReader::new(input);
        while let Some(turn) = reader.next_turn()? {
            let (row, col) = self.play_turn(&turn)?;
            reply_println(&mut out, row, col)?;
        }
        info!("input closed after {} turns", self.turn);
        Ok(())
    }

    /// 1手分の処理。返り値は出力する座標
    pub fn play_turn(&mut self, input: &TurnInput) -> Result<(u8, u8)> {
        let start = Instant::now();
        let (source, reply, search) = match &mut self.game {
            Game::Ultimate(board) => play_ultimate(board, input, &self.config, self.turn)?,
            Game::Classic(board) => play_classic(board, input)?,
        };
        self.turn += 1;

        info!(
            "turn={} move={} {} source={:?} depth={} elapsed_ms={}",
            self.turn,
            reply.0,
            reply.1,
            source,
            search.map_or(0, |s| s.depth),
            start.elapsed().as_millis()
        );
        if self.config.report {
            report_line(&TurnReport {
                turn: self.turn,
                source,
                row: reply.0,
                col: reply.1,
                search,
            })?;
        }
        Ok(reply)
    }
}

type TurnResult = (MoveSource, (u8, u8), Option<SearchOutcome>);

fn check_legal_count(expected: usize, input: &TurnInput) {
    if input.legal_moves.len() != expected {
        warn!(
            "legal move count mismatch: host={} engine={} (board out of sync?)",
            input.legal_moves.len(),
            expected
        );
    }
}

fn play_ultimate(
    board: &mut UltimateBoard,
    input: &TurnInput,
    config: &EngineConfig,
    turn: u32,
) -> Result<TurnResult> {
    if let Some((row, col)) = input.opponent {
        let mv = Move::new(row, col)?;
        board
            .apply(mv, OPPONENT)
            .with_context(|| format!("opponent move {mv} rejected\n{board}"))?;
    }

    let legal = board.legal_moves();
    check_legal_count(legal.len(), input);
    if legal.is_empty() {
        return Ok((MoveSource::Fallback, (Move::FALLBACK.row(), Move::FALLBACK.col()), None));
    }

    if config.opening_book && turn == 0 && input.opponent.is_none() {
        let mv = Move::new(OPENING_MOVE.0, OPENING_MOVE.1)?;
        if legal.contains(&mv) {
            board.apply(mv, ENGINE)?;
            return Ok((MoveSource::Book, OPENING_MOVE, None));
        }
    }

    let outcome = select_move_with(board, ENGINE, &config.limits())?;
    board
        .apply(outcome.best_move, ENGINE)
        .with_context(|| format!("engine move {} rejected", outcome.best_move))?;
    Ok((
        MoveSource::Search,
        (outcome.best_move.row(), outcome.best_move.col()),
        Some(outcome),
    ))
}

fn play_classic(board: &mut SubBoard, input: &TurnInput) -> Result<TurnResult> {
    if let Some((row, col)) = input.opponent {
        let sq = Square::new(row, col).ok_or_else(|| anyhow!("opponent move {row} {col} is off the board"))?;
        board
            .place(sq, OPPONENT)
            .with_context(|| format!("opponent move {sq} rejected"))?;
    }

    let legal = board.legal_moves();
    check_legal_count(legal.len(), input);
    if legal.is_empty() {
        return Ok((MoveSource::Fallback, (0, 0), None));
    }

    let sq = classic::select_move(board, ENGINE);
    board.place(sq, ENGINE)?;
    Ok((MoveSource::Solver, (sq.row(), sq.col()), None))
}
