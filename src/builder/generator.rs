use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::Catalog;
use super::error::{BuildError, Pool};

/// Renders question text by drawing one subtopic and one phrasing template
/// uniformly at random and filling the template's `{}` slot.
///
/// The rng is an explicit parameter so callers can pass an independent
/// source per request and tests can fix the draw.
pub struct QuestionGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        topic: &str,
        difficulty: &str,
    ) -> Result<String, BuildError> {
        let subtopic = self
            .catalog
            .subtopics(topic)
            .choose(rng)
            .ok_or_else(|| BuildError::EmptyPool {
                pool: Pool::Subtopics,
                key: topic.to_owned(),
            })?;

        let template = self
            .catalog
            .templates(difficulty)
            .choose(rng)
            .ok_or_else(|| BuildError::EmptyPool {
                pool: Pool::Templates,
                key: difficulty.to_owned(),
            })?;

        Ok(template.replacen("{}", subtopic, 1))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::super::catalog::{DIFFICULTIES, TOPICS};
    use super::*;

    #[test]
    fn recognized_keys_always_render() {
        let catalog = Catalog::new();
        let generator = QuestionGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);

        for topic in TOPICS {
            for difficulty in DIFFICULTIES {
                let question = generator
                    .generate(&mut rng, topic, difficulty)
                    .expect("recognized keys must render");
                assert!(!question.is_empty());
                assert!(!question.contains("{}"), "unfilled slot in {question:?}");
            }
        }
    }

    #[test]
    fn fixed_draw_renders_first_subtopic_into_first_template() {
        let catalog = Catalog::new();
        let generator = QuestionGenerator::new(&catalog);
        // A constant-zero rng selects index 0 from both pools.
        let mut rng = StepRng::new(0, 0);

        let question = generator.generate(&mut rng, "Python", "easy").unwrap();
        assert_eq!(question, "What is variables?");
    }

    #[test]
    fn unknown_topic_is_an_empty_subtopic_pool() {
        let catalog = Catalog::new();
        let generator = QuestionGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);

        let err = generator.generate(&mut rng, "Cobol", "easy").unwrap_err();
        match err {
            BuildError::EmptyPool { pool, key } => {
                assert_eq!(pool, Pool::Subtopics);
                assert_eq!(key, "Cobol");
            }
            other => panic!("expected EmptyPool, got {other:?}"),
        }
    }

    #[test]
    fn unknown_difficulty_is_an_empty_template_pool() {
        let catalog = Catalog::new();
        let generator = QuestionGenerator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(7);

        let err = generator
            .generate(&mut rng, "Python", "nightmare")
            .unwrap_err();
        match err {
            BuildError::EmptyPool { pool, key } => {
                assert_eq!(pool, Pool::Templates);
                assert_eq!(key, "nightmare");
            }
            other => panic!("expected EmptyPool, got {other:?}"),
        }
    }
}
