//! The `quizbank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizbank.toml
    if std::path::Path::new("quizbank.toml").exists() {
        println!("quizbank.toml already exists, skipping.");
    } else {
        std::fs::write("quizbank.toml", SAMPLE_CONFIG)?;
        println!("Created quizbank.toml");
    }

    // Create sample question bank
    std::fs::create_dir_all("json/en")?;
    let sample_path = std::path::Path::new("json/en/sample.json");
    if sample_path.exists() {
        println!("json/en/sample.json already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_BANK)?;
        println!("Created json/en/sample.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own banks under json/<language>/");
    println!("  2. Run: quizbank validate --bank sample");
    println!("  3. Run: quizbank play --bank sample");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

# Directory or base URL holding <language>/<bank>.json files
bank_root = "./json"
default_language = "en"
quiz_length = 10

# Uncomment for the same quiz every run
# seed = 42
"#;

const SAMPLE_BANK: &str = r#"[
  {
    "question": "What is $7 \\times 8$?",
    "options": { "a": "54", "b": "56", "c": "64", "d": "48" },
    "answer": "b"
  },
  {
    "question": "Which value of $x$ solves $2x + 3 = 11$?",
    "options": { "a": "3", "b": "4", "c": "5", "d": "7" },
    "answer": "b"
  },
  {
    "question": "What is the derivative of $x^2$?",
    "options": { "a": "$x$", "b": "$2x$", "c": "$x^3 / 3$", "d": "$2$" },
    "answer": "b"
  },
  {
    "question": "How many sides does a hexagon have?",
    "options": { "a": "5", "b": "6", "c": "7", "d": "8" },
    "answer": "b"
  },
  {
    "question": "What is $\\sqrt{81}$?",
    "options": { "a": "8", "b": "9", "c": "27", "d": "40.5" },
    "answer": "b"
  },
  {
    "question": "Which planet is known as the Red Planet?",
    "options": { "a": "Venus", "b": "Jupiter", "c": "Mars", "d": "Saturn" },
    "answer": "c"
  },
  {
    "question": "What is the chemical symbol for gold?",
    "options": { "a": "Ag", "b": "Au", "c": "Gd", "d": "Go" },
    "answer": "b"
  },
  {
    "question": "What is $\\frac{1}{2} + \\frac{1}{4}$?",
    "options": { "a": "$\\frac{2}{6}$", "b": "$\\frac{3}{4}$", "c": "$\\frac{1}{8}$", "d": "$1$" },
    "answer": "b"
  },
  {
    "question": "Which gas do plants absorb from the atmosphere?",
    "options": { "a": "Oxygen", "b": "Nitrogen", "c": "Carbon dioxide", "d": "Helium" },
    "answer": "c"
  },
  {
    "question": "What is $2^{10}$?",
    "options": { "a": "512", "b": "1000", "c": "1024", "d": "2048" },
    "answer": "c"
  },
  {
    "question": "What is the boiling point of water at sea level in Celsius?",
    "options": { "a": "90", "b": "100", "c": "110", "d": "212" },
    "answer": "b"
  },
  {
    "question": "What is the area of a circle with radius $r$?",
    "options": { "a": "$2\\pi r$", "b": "$\\pi r^2$", "c": "$\\pi d$", "d": "$r^2$" },
    "answer": "b"
  }
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use quizbank_core::parser::{parse_question_bank_str, validate_question_bank};

    #[test]
    fn sample_bank_is_valid() {
        let bank = parse_question_bank_str(SAMPLE_BANK).unwrap();
        assert_eq!(bank.len(), 12);
        assert!(validate_question_bank(&bank, 10).is_empty());
    }
}
