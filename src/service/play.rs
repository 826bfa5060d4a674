//! Fetch, solve, report.
//!
//! The driver is the only place that logs. The solver stays silent and
//! collaborators report failures through `ServiceError`.

use tracing::{debug, info, warn};

use super::collaborator::{GameSink, GameSource};
use super::data::{GameData, GameResult};
use super::error::PlayError;
use crate::solver::Solver;

/// Solve one fetched game and build its report.
///
/// Invalid parameters are logged and returned as `PlayError::Solve`.
pub fn solve_game(data: &GameData, solver: &Solver) -> Result<GameResult, PlayError> {
    info!(
        id = data.id,
        children_count = data.children_count,
        eliminate_each = data.eliminate_each,
        "input data"
    );

    if data.eliminate_each > 0 {
        debug!(id = data.id, strategy = %solver.strategy_for(data.eliminate_each as u32), "solving");
    }

    let solution = solver
        .solve(data.children_count, data.eliminate_each)
        .map_err(|source| {
            warn!(id = data.id, error = %source, "rejected game");
            PlayError::Solve { id: data.id, source }
        })?;

    let result = GameResult::from_solution(data.id, &solution);
    info!(
        id = result.id,
        last_child = result.last_child.raw(),
        eliminated = result.order_of_elimination.len(),
        "solved"
    );
    Ok(result)
}

/// Play one game from `source`, reporting to `sink`.
///
/// Nothing is submitted when the game parameters are invalid.
pub fn play<S, K>(source: &mut S, sink: &mut K, solver: &Solver) -> Result<GameResult, PlayError>
where
    S: GameSource + ?Sized,
    K: GameSink + ?Sized,
{
    let data = source.fetch()?;
    let result = solve_game(&data, solver)?;

    debug!(id = result.id, "submitting results");
    sink.submit(&result)?;
    Ok(result)
}

/// Play one game against a service that is both source and sink.
pub fn play_service<S>(service: &mut S, solver: &Solver) -> Result<GameResult, PlayError>
where
    S: GameSource + GameSink + ?Sized,
{
    let data = service.fetch()?;
    let result = solve_game(&data, solver)?;

    debug!(id = result.id, "submitting results");
    service.submit(&result)?;
    Ok(result)
}

/// Play games until `source` is exhausted.
///
/// Stops at the first failure. Returns the number of games reported.
pub fn play_all<S, K>(source: &mut S, sink: &mut K, solver: &Solver) -> Result<usize, PlayError>
where
    S: GameSource + ?Sized,
    K: GameSink + ?Sized,
{
    let mut played = 0;
    loop {
        match play(source, sink, solver) {
            Ok(_) => played += 1,
            Err(e) if e.is_exhausted() => break,
            Err(e) => return Err(e),
        }
    }
    info!(played, "source exhausted");
    Ok(played)
}
