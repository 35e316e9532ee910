use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::error::BuildError;
use super::generator::QuestionGenerator;

/// Option count used when the caller does not ask for a specific one.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// A single multiple-choice item.
///
/// `answer` is always present in `options` exactly once; `options` keeps
/// the shuffled presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Wraps generated question text with a synthesized correct answer and
/// index-distinct distractors, shuffled into presentation order.
///
/// The answer texts are placeholders by contract, not domain-accurate
/// distractors.
pub struct McqAssembler<'a> {
    generator: QuestionGenerator<'a>,
}

impl<'a> McqAssembler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            generator: QuestionGenerator::new(catalog),
        }
    }

    pub fn assemble<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        topic: &str,
        difficulty: &str,
        option_count: usize,
    ) -> Result<McqItem, BuildError> {
        if option_count < 1 {
            return Err(BuildError::InvalidOptionCount(option_count));
        }

        let question = self.generator.generate(rng, topic, difficulty)?;

        let answer = format!("Correct answer about {topic}");
        let mut options = Vec::with_capacity(option_count);
        options.push(answer.clone());
        options.extend((1..option_count).map(|i| format!("Incorrect answer {i}")));
        options.shuffle(rng);

        Ok(McqItem {
            question,
            options,
            answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn assembler_fixture() -> (Catalog, StdRng) {
        (Catalog::new(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn answer_is_among_options_exactly_once() {
        let (catalog, mut rng) = assembler_fixture();
        let assembler = McqAssembler::new(&catalog);

        for option_count in 1..=8 {
            let item = assembler
                .assemble(&mut rng, "JavaScript", "medium", option_count)
                .unwrap();
            assert_eq!(item.options.len(), option_count);
            let hits = item.options.iter().filter(|o| **o == item.answer).count();
            assert_eq!(hits, 1, "answer must survive the shuffle exactly once");
        }
    }

    #[test]
    fn single_option_item_is_just_the_answer() {
        let (catalog, mut rng) = assembler_fixture();
        let assembler = McqAssembler::new(&catalog);

        let item = assembler.assemble(&mut rng, "Python", "hard", 1).unwrap();
        assert_eq!(item.options, vec![item.answer.clone()]);
        assert_eq!(item.answer, "Correct answer about Python");
    }

    #[test]
    fn zero_options_is_rejected() {
        let (catalog, mut rng) = assembler_fixture();
        let assembler = McqAssembler::new(&catalog);

        let err = assembler
            .assemble(&mut rng, "Python", "easy", 0)
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidOptionCount(0)));
    }

    #[test]
    fn distractors_are_index_distinct() {
        let (catalog, mut rng) = assembler_fixture();
        let assembler = McqAssembler::new(&catalog);

        let item = assembler
            .assemble(&mut rng, "Data Science", "easy", 5)
            .unwrap();
        let mut distractors: Vec<_> = item
            .options
            .iter()
            .filter(|o| **o != item.answer)
            .cloned()
            .collect();
        distractors.sort();
        assert_eq!(
            distractors,
            vec![
                "Incorrect answer 1",
                "Incorrect answer 2",
                "Incorrect answer 3",
                "Incorrect answer 4",
            ]
        );
    }

    #[test]
    fn generator_errors_pass_through() {
        let (catalog, mut rng) = assembler_fixture();
        let assembler = McqAssembler::new(&catalog);

        let err = assembler
            .assemble(&mut rng, "Unknown", "easy", 4)
            .unwrap_err();
        assert!(matches!(err, BuildError::EmptyPool { .. }));
    }
}
