//! Built-in question banks.

use super::question::{AnswerOption, Question};

type Entry = (&'static str, [(&'static str, u8); 4], &'static str);

const EASY: [Entry; 10] = [
    (
        "Which planet is known as the Red Planet?",
        [("Mars", 70), ("Venus", 10), ("Jupiter", 12), ("Mercury", 8)],
        "Mars",
    ),
    (
        "Who grew up in the jungle among wild animals?",
        [("Mowgli", 64), ("Batman", 6), ("Pinocchio", 10), ("Charles Darwin", 20)],
        "Mowgli",
    ),
    (
        "What colour do you get by mixing blue and red?",
        [("Brown", 23), ("Purple", 55), ("Green", 8), ("Light blue", 14)],
        "Purple",
    ),
    (
        "What was the name of the fiancée of Edmond Dantès, the future Count of Monte Cristo?",
        [("Mercédès", 41), ("Toyota", 19), ("Honda", 25), ("Lada", 15)],
        "Mercédès",
    ),
    (
        "Which people invented the csárdás dance?",
        [("Hungarians", 44), ("Romanians", 26), ("Czechs", 14), ("Moldovans", 16)],
        "Hungarians",
    ),
    (
        "The study of compounds of which element is the basis of organic chemistry?",
        [("Oxygen", 17), ("Carbon", 52), ("Nitrogen", 19), ("Silicon", 12)],
        "Carbon",
    ),
    (
        "In which country was the first industrial oil well drilled?",
        [("Kuwait", 27), ("Iran", 21), ("Iraq", 16), ("Azerbaijan", 36)],
        "Azerbaijan",
    ),
    (
        "How many legs does a spider have?",
        [("Six", 18), ("Eight", 71), ("Ten", 6), ("Twelve", 5)],
        "Eight",
    ),
    (
        "Which ocean is the largest?",
        [("Atlantic", 22), ("Indian", 9), ("Arctic", 4), ("Pacific", 65)],
        "Pacific",
    ),
    (
        "Which meat is traditionally used for chebureki filling?",
        [("Lamb", 45), ("Pork", 30), ("Veal", 15), ("Horse meat", 10)],
        "Lamb",
    ),
];

const HARD: [Entry; 10] = [
    (
        "Who was the first Minister of War of the Russian Empire?",
        [
            ("Arakcheyev", 40),
            ("Barclay de Tolly", 23),
            ("Vyazmitinov", 25),
            ("Konovnitsyn", 12),
        ],
        "Vyazmitinov",
    ),
    (
        "A river with which name does not exist in Russia?",
        [("Spina", 51), ("Usta", 9), ("Palets", 26), ("Sheya", 14)],
        "Spina",
    ),
    (
        "What did Shakespeare call the \"chief nourisher in life's feast\"?",
        [("Intoxication", 7), ("Love", 39), ("Solitude", 9), ("Sleep", 45)],
        "Sleep",
    ),
    (
        "Which of these philosophers set two Pushkin poems to music in 1864?",
        [("Jung", 17), ("Nietzsche", 31), ("Schopenhauer", 38), ("Hegel", 14)],
        "Nietzsche",
    ),
    (
        "Which figure opens a gorodki competition?",
        [
            ("Sentries", 24),
            ("Artillery", 7),
            ("Cannon", 55),
            ("Machine-gun nest", 14),
        ],
        "Cannon",
    ),
    (
        "How many times a day are the Spasskaya Tower chimes wound?",
        [("Once", 46), ("Twice", 41), ("Three times", 5), ("Four times", 8)],
        "Twice",
    ),
    (
        "What was the first kimberlite pipe, found by Larisa Popugaeva in 1954, named?",
        [
            ("Sovetskaya", 20),
            ("Zarnitsa", 32),
            ("Udachnaya", 15),
            ("Mir", 33),
        ],
        "Zarnitsa",
    ),
    (
        "What did Ivan Yefremov call the highest degree of expediency in \"The Razor's Edge\"?",
        [("Beauty", 18), ("Wisdom", 22), ("Death", 29), ("Freedom", 31)],
        "Beauty",
    ),
    (
        "Which of these former Soviet capitals opened a metro first?",
        [("Yerevan", 9), ("Tbilisi", 30), ("Baku", 19), ("Minsk", 42)],
        "Tbilisi",
    ),
    (
        "How many seas wash the Balkan Peninsula?",
        [("3", 37), ("4", 28), ("5", 17), ("6", 18)],
        "6",
    ),
];

fn materialize(entries: &[Entry]) -> Vec<Question> {
    entries
        .iter()
        .filter_map(|(text, answers, correct)| {
            let answers = answers.iter().map(|(a, p)| AnswerOption::new(*a, *p));
            Question::new(*text, answers, *correct).ok()
        })
        .collect()
}

/// General-knowledge questions for the easy level.
#[must_use]
pub fn easy_questions() -> Vec<Question> {
    materialize(&EASY)
}

/// Questions for the medium and hard levels.
#[must_use]
pub fn hard_questions() -> Vec<Question> {
    materialize(&HARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::MAX_QUESTIONS;

    #[test]
    fn every_bank_entry_is_valid() {
        for entries in [&EASY, &HARD] {
            for (text, answers, correct) in entries.iter() {
                let answers = answers.iter().map(|(a, p)| AnswerOption::new(*a, *p));
                Question::new(*text, answers, *correct)
                    .unwrap_or_else(|e| panic!("{text}: {e}"));
            }
        }
    }

    #[test]
    fn banks_fill_a_full_game() {
        assert_eq!(easy_questions().len(), MAX_QUESTIONS as usize);
        assert_eq!(hard_questions().len(), MAX_QUESTIONS as usize);
    }
}
