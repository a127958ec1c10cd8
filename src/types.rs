use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque ID types for type safety
pub type PlayerId = String;
pub type VoterId = PlayerId;

/// Minimum roster size for starting a game
pub const MIN_PLAYERS: usize = 3;

/// Discussion duration bounds (seconds), as offered by the setup screen
pub const MIN_DURATION_SEC: u32 = 60;
pub const MAX_DURATION_SEC: u32 = 600;
pub const DURATION_STEP_SEC: u32 = 30;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameStep {
    #[default]
    Setup,
    Reveal,
    Discuss,
    Vote,
    Result,
    History,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Liar,
    Spy,
    Hybrid,
}

impl GameMode {
    /// Whether rounds in this mode hand out a spy word
    pub fn has_spy(self) -> bool {
        matches!(self, GameMode::Spy | GameMode::Hybrid)
    }

    /// Whether rounds in this mode have a word-less liar
    pub fn has_liar(self) -> bool {
        matches!(self, GameMode::Liar | GameMode::Hybrid)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Animal,
    Place,
    Job,
    Movie,
    #[default]
    Random,
}

impl Category {
    /// Categories with a word bank (everything except `Random`)
    pub const FIXED: [Category; 5] = [
        Category::Food,
        Category::Animal,
        Category::Place,
        Category::Job,
        Category::Movie,
    ];
}

/// How close the spy word should be to the citizens' word.
///
/// Accepted as configuration only: every tier currently draws from the same
/// candidate table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpySimilarity {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Liar,
    Spy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Citizen,
    Liar,
    Spy,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub mode: GameMode,
    pub category: Category,
    pub duration_sec: u32,
    pub allow_self_vote: bool,
    pub hide_word_during_discuss: bool,
    pub spy_similarity: SpySimilarity,
    /// Declared for the liar's final guess; no transition reads it yet
    pub liar_guess_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Liar,
            category: Category::Random,
            duration_sec: 180,
            allow_self_vote: false,
            hide_word_during_discuss: true,
            spy_similarity: SpySimilarity::Medium,
            liar_guess_mode: true,
        }
    }
}

impl Settings {
    /// Shallow merge: every field present in the patch overwrites ours
    pub fn merged(&self, patch: &SettingsPatch) -> Settings {
        Settings {
            mode: patch.mode.unwrap_or(self.mode),
            category: patch.category.unwrap_or(self.category),
            duration_sec: patch.duration_sec.unwrap_or(self.duration_sec),
            allow_self_vote: patch.allow_self_vote.unwrap_or(self.allow_self_vote),
            hide_word_during_discuss: patch
                .hide_word_during_discuss
                .unwrap_or(self.hide_word_during_discuss),
            spy_similarity: patch.spy_similarity.unwrap_or(self.spy_similarity),
            liar_guess_mode: patch.liar_guess_mode.unwrap_or(self.liar_guess_mode),
        }
    }

    /// Clamp a duration into the offered range and snap it down to the slider step
    pub fn clamp_duration(sec: u32) -> u32 {
        let clamped = sec.clamp(MIN_DURATION_SEC, MAX_DURATION_SEC);
        clamped - (clamped - MIN_DURATION_SEC) % DURATION_STEP_SEC
    }

    pub fn is_valid_duration(sec: u32) -> bool {
        (MIN_DURATION_SEC..=MAX_DURATION_SEC).contains(&sec)
            && (sec - MIN_DURATION_SEC) % DURATION_STEP_SEC == 0
    }
}

/// Partial settings update; absent fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_self_vote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_word_during_discuss: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spy_similarity: Option<SpySimilarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liar_guess_mode: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleAssignment {
    pub player_id: PlayerId,
    pub role: Role,
    /// Citizens and the spy get a word, the liar does not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub round_no: u32,
    pub main_word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spy_word: Option<String>,
    /// Category actually drawn from (never `Random`)
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub voter_id: VoterId,
    pub target_id: PlayerId,
}

/// Immutable record of a finished round
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub round_no: u32,
    pub liar_id: Option<PlayerId>,
    pub spy_id: Option<PlayerId>,
    pub main_word: String,
    pub spy_word: Option<String>,
    /// `None` when nobody received a vote
    pub eliminated_id: Option<PlayerId>,
    pub winner: Winner,
    pub votes: Vec<Vote>,
}

// ========== String conversions ==========

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl FromStr for GameMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "liar" => Ok(GameMode::Liar),
            "spy" => Ok(GameMode::Spy),
            "hybrid" => Ok(GameMode::Hybrid),
            _ => Err(ParseEnumError::new("game mode", s)),
        }
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "animal" => Ok(Category::Animal),
            "place" => Ok(Category::Place),
            "job" => Ok(Category::Job),
            "movie" => Ok(Category::Movie),
            "random" => Ok(Category::Random),
            _ => Err(ParseEnumError::new("category", s)),
        }
    }
}

impl FromStr for SpySimilarity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(SpySimilarity::High),
            "medium" => Ok(SpySimilarity::Medium),
            "low" => Ok(SpySimilarity::Low),
            _ => Err(ParseEnumError::new("spy similarity", s)),
        }
    }
}

impl fmt::Display for GameStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStep::Setup => "setup",
            GameStep::Reveal => "reveal",
            GameStep::Discuss => "discuss",
            GameStep::Vote => "vote",
            GameStep::Result => "result",
            GameStep::History => "history",
        };
        f.write_str(s)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::Liar => "liar",
            GameMode::Spy => "spy",
            GameMode::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Food => "food",
            Category::Animal => "animal",
            Category::Place => "place",
            Category::Job => "job",
            Category::Movie => "movie",
            Category::Random => "random",
        };
        f.write_str(s)
    }
}
