use maud::{html, Markup};

use crate::builder::{QuestionBank, DIFFICULTIES, TOPICS};
use crate::names;

/// The topic/difficulty/count form, optionally with a message from a
/// rejected previous submission.
pub fn builder_form(error: Option<&str>) -> Markup {
    html! {
        h1 { "Build a question bank" }
        p {
            "Pick a topic and difficulty; questions are assembled at random "
            "from the built-in catalog."
        }
        @if let Some(msg) = error {
            p."error" { (msg) }
        }
        article style="width: fit-content;" {
            form action=(names::GENERATE_URL) method="post" {
                label {
                    "Topic"
                    select name="topic" aria-label="Topic" {
                        @for topic in TOPICS {
                            option value=(topic) { (topic) }
                        }
                    }
                }
                label {
                    "Difficulty"
                    select name="difficulty" aria-label="Difficulty" {
                        @for difficulty in DIFFICULTIES {
                            option value=(difficulty) { (difficulty) }
                        }
                    }
                }
                label {
                    "Questions"
                    input name="num_questions"
                          type="number"
                          min=(names::MIN_QUESTION_COUNT)
                          max=(names::MAX_QUESTION_COUNT)
                          value=(names::DEFAULT_QUESTION_COUNT)
                          required="true"
                          aria-label="Questions";
                }
                label {
                    "Options per question"
                    input name="num_options"
                          type="number"
                          min="1"
                          max=(names::MAX_OPTION_COUNT)
                          value="4"
                          aria-label="Options per question";
                }
                button type="submit" { "Generate" }
            }
        }
    }
}

/// A freshly generated bank: every item with its shuffled options, the
/// answer called out, and a link to the persisted file.
pub fn bank_view(topic: &str, difficulty: &str, filename: &str, bank: &QuestionBank) -> Markup {
    html! {
        h1 { "Question bank" }
        p {
            (bank.len()) " questions on " strong { (topic) }
            " (" (difficulty) "), saved as "
            a href=(names::download_url(filename)) download { (filename) }
        }
        @for (idx, item) in bank.iter().enumerate() {
            article {
                h3 { "Question " (idx + 1) ": " (item.question) }
                ol {
                    @for option in &item.options {
                        li { (option) }
                    }
                }
                footer {
                    small { "Answer: " (item.answer) }
                }
            }
        }
        a role="button" href="/" class="outline" { "Build another" }
    }
}
