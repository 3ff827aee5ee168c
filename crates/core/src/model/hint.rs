use std::fmt;

use serde::{Deserialize, Serialize};

/// One-shot lifelines offered once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    FiftyFifty,
    AudienceHelp,
    PhoneFriend,
}

impl Hint {
    /// Every hint, in the order they are offered.
    pub const ALL: [Hint; 3] = [Hint::FiftyFifty, Hint::AudienceHelp, Hint::PhoneFriend];

    /// Short rules text shown on the help page.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Hint::FiftyFifty => {
                "Fifty-fifty removes two wrong answers, leaving a choice between the remaining two."
            }
            Hint::AudienceHelp => {
                "Ask the audience shows the share of the room voting for each answer. \
                 The majority is not always right."
            }
            Hint::PhoneFriend => {
                "Phone a friend picks one of three outcomes: the friend does not know and \
                 guesses two answers, is unsure between two answers one of which is correct, \
                 or is certain and names the correct answer."
            }
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hint::FiftyFifty => "fifty-fifty",
            Hint::AudienceHelp => "audience help",
            Hint::PhoneFriend => "phone a friend",
        };
        f.write_str(name)
    }
}
