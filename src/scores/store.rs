//! Reading, updating and ranking score files.

use std::fs;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::game_kind::{GameKind, RankRule};
use crate::scores::ScoreError;

/// One stored line: a player name and its numbers.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ScoreLine {
    name: String,
    values: Vec<f64>,
}

impl ScoreLine {
    /// Creates a line.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[instrument]
    fn parse(line: &str) -> Result<Self, ScoreError> {
        let mut fields = line.split('\t');
        let name = fields.next().unwrap_or_default();
        if name.is_empty() {
            return Err(ScoreError::new(format!("Missing player name in {:?}", line)));
        }
        let values = fields
            .map(|field| {
                field
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| ScoreError::new(format!("Bad number {:?}: {}", field, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, values))
    }

    fn render(&self) -> String {
        let mut out = self.name.clone();
        for value in &self.values {
            out.push('\t');
            out.push_str(&value.to_string());
        }
        out
    }
}

/// A formatted scoreboard row.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Ranking {
    name: String,
    score: String,
}

/// Score files under one directory.
#[derive(Debug, Clone, Getters)]
pub struct ScoreStore {
    dir: PathBuf,
}

impl ScoreStore {
    /// Creates a store rooted at `dir`; nothing is touched until first use.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of a game's score file.
    pub fn path(&self, game: GameKind) -> PathBuf {
        self.dir.join(game.score_file())
    }

    fn ensure(&self, game: GameKind) -> Result<PathBuf, ScoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(game);
        if !path.exists() {
            debug!(path = %path.display(), "Creating score file");
            fs::write(&path, "")?;
        }
        Ok(path)
    }

    /// Reads every line of a game's score file, creating it if needed.
    #[instrument(skip(self))]
    pub fn load(&self, game: GameKind) -> Result<Vec<ScoreLine>, ScoreError> {
        let path = self.ensure(game)?;
        let content = fs::read_to_string(&path)?;
        let lines = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ScoreLine::parse)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = lines.len(), "Loaded score lines");
        Ok(lines)
    }

    /// Rewrites a game's score file.
    #[instrument(skip(self, lines), fields(count = lines.len()))]
    pub fn save(&self, game: GameKind, lines: &[ScoreLine]) -> Result<(), ScoreError> {
        let path = self.ensure(game)?;
        let mut content = String::new();
        for line in lines {
            content.push_str(&line.render());
            content.push('\n');
        }
        fs::write(&path, content)?;
        Ok(())
    }

    /// Records a win/tie result.
    ///
    /// `None` marks a side that is not recorded (a bot). The winner gets a
    /// win unless the match was a tie; both recorded sides get a match.
    #[instrument(skip(self))]
    pub fn record_match(
        &self,
        game: GameKind,
        winner: Option<&str>,
        loser: Option<&str>,
        tie: bool,
    ) -> Result<(), ScoreError> {
        let mut lines = self.load(game)?;
        for (name, won) in [(winner, !tie), (loser, false)] {
            let Some(name) = name else { continue };
            let idx = match lines.iter().position(|l| l.name == name) {
                Some(idx) => idx,
                None => {
                    lines.push(ScoreLine::new(name, vec![0.0, 0.0]));
                    lines.len() - 1
                }
            };
            let values = &mut lines[idx].values;
            if values.len() < 2 {
                warn!(name, "Repairing short score line");
                values.resize(2, 0.0);
            }
            if won {
                values[0] += 1.0;
            }
            values[1] += 1.0;
        }
        self.save(game, &lines)?;
        info!(%game, ?winner, ?loser, tie, "Match recorded");
        Ok(())
    }

    /// Appends one efficiency score.
    #[instrument(skip(self))]
    pub fn record_metric(&self, game: GameKind, player: &str, score: f64) -> Result<(), ScoreError> {
        let mut lines = self.load(game)?;
        lines.push(ScoreLine::new(player, vec![score]));
        self.save(game, &lines)?;
        info!(%game, player, score, "Score recorded");
        Ok(())
    }

    /// Sorted, formatted scoreboard for a game.
    ///
    /// Win/tie games rank by win rate (percent, two decimals) descending;
    /// the guessing game ranks by score (three decimals) ascending.
    #[instrument(skip(self))]
    pub fn rankings(&self, game: GameKind) -> Result<Vec<Ranking>, ScoreError> {
        let lines = self.load(game)?;
        let rows = match game.rank_rule() {
            RankRule::WinRate => {
                let mut rates: Vec<(String, f64)> = lines
                    .into_iter()
                    .map(|l| {
                        let rate = match l.values.as_slice() {
                            [wins, total, ..] if *total > 0.0 => wins / total * 100.0,
                            _ => 0.0,
                        };
                        (l.name, rate)
                    })
                    .collect();
                rates.sort_by(|a, b| b.1.total_cmp(&a.1));
                rates
                    .into_iter()
                    .map(|(name, rate)| Ranking {
                        name,
                        score: format!("{:.2}", rate),
                    })
                    .collect()
            }
            RankRule::Efficiency => {
                let mut scores: Vec<(String, f64)> = lines
                    .into_iter()
                    .filter_map(|l| l.values.first().copied().map(|s| (l.name, s)))
                    .collect();
                scores.sort_by(|a, b| a.1.total_cmp(&b.1));
                scores
                    .into_iter()
                    .map(|(name, score)| Ranking {
                        name,
                        score: format!("{:.3}", score),
                    })
                    .collect()
            }
        };
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let line = ScoreLine::parse("ana\t3\t5").unwrap();
        assert_eq!(line.name(), "ana");
        assert_eq!(line.values(), &vec![3.0, 5.0]);
        assert_eq!(line.render(), "ana\t3\t5");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ScoreLine::parse("ana\tlots").is_err());
        assert!(ScoreLine::parse("\t1\t2").is_err());
    }

    #[test]
    fn test_fractional_scores_survive() {
        let line = ScoreLine::new("ben", vec![33.333]);
        assert_eq!(ScoreLine::parse(&line.render()).unwrap(), line);
    }
}
