//! Canned Landing Content
//!
//! The demo conversation and suggestion prompts shown while the agent
//! is not live. Every figure here is a literal constant; nothing is
//! retrieved or computed.

use crate::message::{DataTable, GlossaryEntry, Message, Suggestion, TableRow};

/// The hardcoded transcript: one visitor question, one canned answer
/// with an embedded stat table.
pub fn demo_transcript() -> Vec<Message> {
    vec![
        Message::user("How did the Boston Celtics perform in the 2022-23 season?"),
        Message::assistant(
            "The Boston Celtics had a strong 2022-23 season, finishing with a \
             57-25 record and securing the 2nd seed in the Eastern Conference. \
             They advanced to the Eastern Conference Finals but were eliminated by \
             the Miami Heat in 7 games. Key players included Jayson Tatum and \
             Jaylen Brown, who both averaged over 25 points per game.",
        )
        .with_table(standout_players()),
    ]
}

/// The three clickable prompts under the transcript
pub fn demo_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new("\u{1F4CA} What was their win-loss record?"),
        Suggestion::new("\u{2B50} Who were the standout players?"),
        Suggestion::new("\u{1F3C0} How did they perform in the playoffs?"),
    ]
}

fn standout_players() -> DataTable {
    DataTable::new(
        "### Standout players, 2022-23 regular season",
        "Player",
        vec!["PPG".into(), "RPG".into(), "APG".into(), "FG%".into()],
        vec![
            TableRow::new(
                "Jayson Tatum",
                vec![30.1.into(), 8.8.into(), 4.6.into(), 46.6.into()],
            ),
            TableRow::new(
                "Jaylen Brown",
                vec![26.6.into(), 6.9.into(), 3.5.into(), 49.1.into()],
            ),
            TableRow::new(
                "Derrick White",
                vec![12.4.into(), 3.6.into(), 3.9.into(), 46.2.into()],
            ),
            TableRow::new(
                "Al Horford",
                vec![9.8.into(), 6.2.into(), 3.0.into(), 47.6.into()],
            ),
        ],
    )
    .expect("hardcoded stat table is well-formed")
    .with_glossary(vec![
        GlossaryEntry::new("PPG", "Points per game"),
        GlossaryEntry::new("RPG", "Rebounds per game"),
        GlossaryEntry::new("APG", "Assists per game"),
        GlossaryEntry::new("FG%", "Field goal percentage"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentBlock, Role};

    #[test]
    fn test_transcript_shape() {
        let transcript = demo_transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role(), Role::User);
        assert_eq!(transcript[1].role(), Role::Assistant);

        // The answer carries prose followed by the stat table
        let blocks = transcript[1].blocks();
        assert_eq!(blocks.len(), 2);
        let ContentBlock::Data(table) = &blocks[1] else {
            panic!("second block should be the stat table");
        };
        assert_eq!(table.rows().len(), 4);
        assert_eq!(table.glossary().len(), 4);
    }

    #[test]
    fn test_three_suggestions() {
        assert_eq!(demo_suggestions().len(), 3);
    }
}
