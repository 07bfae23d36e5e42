//! Line-oriented terminal front-end for a quiz session.
//!
//! Renders the current question with its options in shuffled order and
//! turns each input line into a session command:
//!
//! - a choice key (`b`) or display number (`2`) records an answer,
//! - an empty line moves on to the next question (or submits the last one),
//! - `q` abandons the quiz.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use quizbank_core::report::QuizReport;
use quizbank_core::{QuizSession, SessionError, ShuffledOptions};

/// How a quiz run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question was answered and submitted.
    Completed,
    /// The user quit or input ended first.
    Abandoned,
}

/// What one line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Select(String),
    Advance,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str, options: &ShuffledOptions) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Advance;
    }
    if options.contains_key(trimmed) {
        return Input::Select(trimmed.to_string());
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return Input::Quit;
    }
    if let Some(choice) = trimmed
        .parse::<usize>()
        .ok()
        .and_then(|pos| options.at_position(pos))
    {
        return Input::Select(choice.key.clone());
    }
    Input::Unknown(trimmed.to_string())
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Drive an in-progress session until it finishes or the user leaves.
    pub fn run_quiz<G: Rng + ?Sized>(
        &mut self,
        session: &mut QuizSession,
        rng: &mut G,
    ) -> Result<Outcome> {
        while let Some(question) = session.current_question().cloned() {
            let index = session.current_index();
            let options = question.shuffled_options(rng);

            writeln!(
                self.output,
                "\n{}/{}. {}",
                index + 1,
                session.total(),
                question.text()
            )?;
            for (position, choice) in options.iter().enumerate() {
                writeln!(self.output, "  {}) [{}] {}", position + 1, choice.key, choice.text)?;
            }

            let action = if session.is_last_question() {
                "submit the quiz"
            } else {
                "go to the next question"
            };
            let prompt = format!("Answer (key or number), Enter to {action}, q to quit: ");

            loop {
                let Some(line) = self.prompt(&prompt)? else {
                    return Ok(Outcome::Abandoned);
                };
                match parse_input(&line, &options) {
                    Input::Select(key) => {
                        session.record_answer(index, key.as_str())?;
                        writeln!(self.output, "Selected [{key}].")?;
                    }
                    Input::Advance => match session.advance() {
                        Ok(_) => break,
                        Err(SessionError::Unanswered) => {
                            writeln!(self.output, "Please select an answer before continuing.")?;
                        }
                        Err(e) => return Err(e.into()),
                    },
                    Input::Quit => return Ok(Outcome::Abandoned),
                    Input::Unknown(text) => {
                        writeln!(self.output, "'{text}' is not one of the options.")?;
                    }
                }
            }
        }

        Ok(Outcome::Completed)
    }

    /// Print the final score, and the per-question review when asked.
    pub fn show_result(&mut self, report: &QuizReport, review: bool) -> Result<()> {
        writeln!(
            self.output,
            "\nYou scored {} out of {}!",
            report.score, report.total
        )?;

        if review {
            use comfy_table::{Cell, Table};

            let mut table = Table::new();
            table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Result"]);
            for item in &report.items {
                let yours = match (&item.selected_key, item.selected_text()) {
                    (Some(key), Some(text)) => format!("{key}. {text}"),
                    (Some(key), None) => key.clone(),
                    (None, _) => "-".to_string(),
                };
                let correct = format!(
                    "{}. {}",
                    item.correct_key,
                    item.correct_text().unwrap_or_default()
                );
                table.add_row(vec![
                    Cell::new(item.number),
                    Cell::new(&item.question),
                    Cell::new(yours),
                    Cell::new(correct),
                    Cell::new(if item.correct { "OK" } else { "WRONG" }),
                ]);
            }
            writeln!(self.output, "{table}")?;
        }

        Ok(())
    }

    /// Ask a yes/no question; anything but `y`/`yes` (including end of
    /// input) is a no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{question} [y/N]: "))?;
        Ok(answer.is_some_and(|a| {
            let a = a.trim();
            a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")
        }))
    }

    pub fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use quizbank_core::parser::parse_question_bank_str;
    use quizbank_core::QuestionBank;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Every question's answer is "a" so runs are deterministic under any order.
    const BANK: &str = r#"[
        { "question": "First?", "options": { "a": "yes", "b": "no" }, "answer": "a" },
        { "question": "Second?", "options": { "a": "yes", "b": "no" }, "answer": "a" }
    ]"#;

    fn bank() -> QuestionBank {
        parse_question_bank_str(BANK).unwrap()
    }

    fn run(input: &str) -> (Outcome, QuizSession, String) {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = QuizSession::new();
        session.start(bank().sample(10, &mut rng));

        let mut output = Vec::new();
        let outcome = {
            let mut terminal = Terminal::new(Cursor::new(input.to_string()), &mut output);
            terminal.run_quiz(&mut session, &mut rng).unwrap()
        };
        (outcome, session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_keys_positions_and_commands() {
        let mut rng = StdRng::seed_from_u64(0);
        let options = bank().questions()[0].shuffled_options(&mut rng);
        let first_key = options.at_position(1).unwrap().key.clone();

        assert_eq!(parse_input("a\n", &options), Input::Select("a".into()));
        assert_eq!(parse_input(" 1 ", &options), Input::Select(first_key));
        assert_eq!(parse_input("\n", &options), Input::Advance);
        assert_eq!(parse_input("Q", &options), Input::Quit);
        assert_eq!(parse_input("7", &options), Input::Unknown("7".into()));
        assert_eq!(parse_input("z", &options), Input::Unknown("z".into()));
    }

    #[test]
    fn completes_with_all_correct() {
        let (outcome, session, output) = run("a\n\na\n\n");
        assert_eq!(outcome, Outcome::Completed);
        assert!(session.is_finished());
        assert_eq!(session.score(), 2);
        assert!(output.contains("1/2."));
        assert!(output.contains("2/2."));
        assert!(output.contains("submit the quiz"));
    }

    #[test]
    fn refuses_to_advance_unanswered() {
        let (outcome, session, output) = run("\na\n\nb\n\n");
        assert_eq!(outcome, Outcome::Completed);
        assert!(output.contains("Please select an answer before continuing."));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn changing_answer_before_advancing() {
        let (_, session, output) = run("b\na\n\na\n\n");
        assert!(output.contains("Selected [b]."));
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn unknown_input_is_reported() {
        let (_, _, output) = run("maybe\na\n\na\n\n");
        assert!(output.contains("'maybe' is not one of the options."));
    }

    #[test]
    fn quit_and_eof_abandon() {
        let (outcome, session, _) = run("a\nq\n");
        assert_eq!(outcome, Outcome::Abandoned);
        assert!(!session.is_finished());

        let (outcome, _, _) = run("a\n");
        assert_eq!(outcome, Outcome::Abandoned);
    }

    #[test]
    fn result_and_review() {
        let (_, session, _) = run("a\n\nb\n\n");
        let report = QuizReport::from_session(&session, "bank.json");

        let mut output = Vec::new();
        Terminal::new(Cursor::new(String::new()), &mut output)
            .show_result(&report, true)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("You scored 1 out of 2!"));
        assert!(output.contains("WRONG"));
        assert!(output.contains("b. no"));
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut output = Vec::new();
        let mut terminal = Terminal::new(Cursor::new("y\n\nYES\n".to_string()), &mut output);
        assert!(terminal.confirm("Again?").unwrap());
        assert!(!terminal.confirm("Again?").unwrap());
        assert!(terminal.confirm("Again?").unwrap());
        assert!(!terminal.confirm("Again?").unwrap());
    }
}
