//! Line-oriented planning session.
//!
//! A session reads a disruption phase followed by a query phase:
//!
//! ```text
//! <disruption count>
//! <station>          (two lines per disruption)
//! <station>
//! <station>          (two lines per query, repeated)
//! <station>
//! !
//! ```
//!
//! Blank lines are skipped and names are trimmed. A query answer is the
//! stations of the route, one per line, followed by the total minutes; an
//! unreachable goal prints `UNREACHABLE`. A line starting with `!`, or end
//! of input, ends the session.

use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};
use crate::planner::Planner;

/// What a completed session did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Disruptions that removed a link (unknown-station ones do not count).
    pub disruptions_applied: usize,
    /// Queries answered with a route or `UNREACHABLE`.
    pub queries_answered: usize,
}

/// Runs a full session against `planner`, reading from `input` and writing
/// answers to `output`.
///
/// Bad station names are reported on `output` and never end the session;
/// only malformed input (an unparseable count, a truncated pair of lines)
/// or an I/O failure does.
pub fn run_session<R: BufRead, W: Write>(
    planner: &mut Planner,
    mut input: R,
    output: &mut W,
) -> AppResult<SessionSummary> {
    let mut summary = SessionSummary::default();

    let Some(count_line) = next_line(&mut input)? else {
        return Ok(summary);
    };
    let count: i64 = count_line.parse().map_err(|_| {
        AppError::InvalidInput(format!("expected disruption count, got '{count_line}'"))
    })?;

    // A negative count behaves like zero disruptions.
    for _ in 0..count.max(0) {
        let from = expect_line(&mut input, "disrupted link")?;
        let to = expect_line(&mut input, "disrupted link")?;
        match planner.apply_disruption(&from, &to) {
            Ok(()) => summary.disruptions_applied += 1,
            Err(AppError::UnknownStation(name)) => {
                tracing::warn!("skipping disruption with unknown station '{}'", name);
                writeln!(output, "Error: station '{}' does not exist.", name)?;
            }
            Err(other) => return Err(other),
        }
    }

    loop {
        let Some(from) = next_line(&mut input)? else {
            break;
        };
        if from.starts_with('!') {
            break;
        }
        let to = expect_line(&mut input, "query")?;
        match planner.route(&from, &to) {
            Ok(Some(route)) => {
                for name in planner.route_names(&route) {
                    writeln!(output, "{}", name)?;
                }
                writeln!(output, "{}", route.minutes)?;
                summary.queries_answered += 1;
            }
            Ok(None) => {
                writeln!(output, "UNREACHABLE")?;
                summary.queries_answered += 1;
            }
            Err(AppError::InvalidQuery { .. }) => {
                writeln!(output, "Error: one or both stations are invalid.")?;
            }
            Err(other) => return Err(other),
        }
    }

    Ok(summary)
}

/// Next non-blank line, trimmed, or `None` at end of input.
fn next_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut buf = String::new();
    loop {
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
}

/// Like [`next_line`], but end of input is a protocol error.
fn expect_line<R: BufRead>(input: &mut R, what: &str) -> AppResult<String> {
    next_line(input)?
        .ok_or_else(|| AppError::InvalidInput(format!("unexpected end of input reading {what}")))
}
