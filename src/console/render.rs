//! Text rendering for the console.

use crate::config::GameConfig;
use std::io::{self, Write};
use strictly_minichess::{
    Board, Outcome, SEARCH_DEPTH, SearchReport, Side, WIN_THRESHOLD, score, search,
};

/// Renders the board with a column header and two trailing blank lines.
pub fn render_board(board: &Board) -> String {
    format!("{board}\n\n")
}

/// Formats the score line printed after every half-move.
pub fn scoreboard_line(board: &Board) -> String {
    format!(
        "Scoreboard: {} (Positive = AI Winning, Negative = Human Winning)\n",
        score(board)
    )
}

/// Formats the closing message for `outcome`.
pub fn outcome_message(outcome: &Outcome, config: &GameConfig) -> String {
    match outcome {
        Outcome::Winner(Side::Black) => format!(
            "{} wins! Score reached {}.",
            config.ai_name(),
            WIN_THRESHOLD
        ),
        Outcome::Winner(Side::White) => format!(
            "{} wins! Score reached {}.",
            config.human_name(),
            -WIN_THRESHOLD
        ),
        Outcome::Draw(Side::White) => "Game drawn! No valid moves left for player.".to_string(),
        Outcome::Draw(Side::Black) => {
            format!("Game drawn! No valid moves left for {}.", config.ai_name())
        }
        Outcome::NoPieces(Side::White) => {
            format!("{} has no pieces left.", config.human_name())
        }
        Outcome::NoPieces(Side::Black) => format!("{} has no pieces left.", config.ai_name()),
    }
}

/// Writes the AI's analysis of `board` to `out` and returns the report.
pub fn analyze<W: Write>(board: &Board, out: &mut W) -> io::Result<SearchReport> {
    let report = search(board, SEARCH_DEPTH);

    write!(out, "{}", render_board(board))?;
    writeln!(out, "Score: {}", score(board))?;
    match report.best_move {
        Some(mv) => writeln!(
            out,
            "AI move: {} (value {}, {} nodes, depth {})",
            mv, report.score, report.nodes, SEARCH_DEPTH
        )?,
        None => writeln!(out, "AI has no move ({} nodes)", report.nodes)?,
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_initial_board() {
        let expected = "   0    1    2\n0 WP WH ..\n1 .. .. ..\n2 .. BP BH\n\n\n";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_scoreboard_line() {
        assert_eq!(
            scoreboard_line(&Board::new()),
            "Scoreboard: 0 (Positive = AI Winning, Negative = Human Winning)\n"
        );
    }

    #[test]
    fn test_outcome_messages_with_default_names() {
        let config = GameConfig::default();
        assert_eq!(
            outcome_message(&Outcome::Winner(Side::Black), &config),
            "AI wins! Score reached 6."
        );
        assert_eq!(
            outcome_message(&Outcome::Winner(Side::White), &config),
            "Human wins! Score reached -6."
        );
        assert_eq!(
            outcome_message(&Outcome::Draw(Side::Black), &config),
            "Game drawn! No valid moves left for AI."
        );
        assert_eq!(
            outcome_message(&Outcome::NoPieces(Side::White), &config),
            "Human has no pieces left."
        );
    }

    #[test]
    fn test_analyze_reports_no_move() {
        let board: Board = ".. .. .. / .. BH .. / .. .. ..".parse().unwrap();
        let mut out = Vec::new();
        let report = analyze(&board, &mut out).unwrap();
        assert_eq!(report.best_move, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Score: 5"));
        assert!(text.contains("AI has no move (1 nodes)"));
    }
}
