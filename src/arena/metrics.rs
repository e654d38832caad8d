use crate::game::Color;

use super::EpisodeResult;

/// Tallies of a match, seen from the subject agent's side.
#[derive(Debug, Clone, Default)]
pub struct MatchMetrics {
    wins: usize,
    losses: usize,
    draws: usize,
    capped: usize,
    total_plies: usize,
    games_as_white: usize,
    games_as_black: usize,
}

impl MatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &EpisodeResult, subject: Color) {
        match result.winner {
            Some(winner) if winner == subject => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
        if result.capped {
            self.capped += 1;
        }
        self.total_plies += result.plies;
        match subject {
            Color::White => self.games_as_white += 1,
            Color::Black => self.games_as_black += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    pub fn games_as(&self, color: Color) -> usize {
        match color {
            Color::White => self.games_as_white,
            Color::Black => self.games_as_black,
        }
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn losses(&self) -> usize {
        self.losses
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Draws that came from hitting the ply limit.
    pub fn capped(&self) -> usize {
        self.capped
    }

    pub fn win_rate(&self) -> f32 {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    /// Average game length in plies.
    pub fn average_length(&self) -> f32 {
        self.rate(self.total_plies)
    }

    fn rate(&self, count: usize) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        count as f32 / games as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(winner: Option<Color>, plies: usize, capped: bool) -> EpisodeResult {
        EpisodeResult {
            winner,
            plies,
            capped,
        }
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = MatchMetrics::new();
        assert_eq!(metrics.games(), 0);
        assert_eq!(metrics.win_rate(), 0.0);
        assert_eq!(metrics.average_length(), 0.0);
    }

    #[test]
    fn test_record_from_subject_perspective() {
        let mut metrics = MatchMetrics::new();
        metrics.record(&result(Some(Color::White), 30, false), Color::White);
        metrics.record(&result(Some(Color::White), 40, false), Color::Black);
        metrics.record(&result(None, 200, true), Color::White);
        metrics.record(&result(Some(Color::Black), 50, false), Color::Black);

        assert_eq!(metrics.wins(), 2);
        assert_eq!(metrics.losses(), 1);
        assert_eq!(metrics.draws(), 1);
        assert_eq!(metrics.capped(), 1);
        assert_eq!(metrics.games_as(Color::White), 2);
        assert_eq!(metrics.games_as(Color::Black), 2);
        assert!((metrics.win_rate() - 0.5).abs() < f32::EPSILON);
        assert!((metrics.draw_rate() - 0.25).abs() < f32::EPSILON);
        assert!((metrics.average_length() - 80.0).abs() < f32::EPSILON);
    }
}
