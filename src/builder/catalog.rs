use std::collections::HashMap;

/// Topics the catalog knows subtopics for. Fixed enumerated options, not
/// user-extensible at runtime.
pub const TOPICS: &[&str] = &["Python", "JavaScript", "Data Science", "Web Development"];

/// Difficulty tiers the catalog knows phrasing templates for.
pub const DIFFICULTIES: &[&str] = &["easy", "medium", "hard"];

/// Static topic -> subtopics and difficulty -> templates lookup tables.
///
/// Built once at startup and shared read-only; lookups with unknown keys
/// yield an empty pool rather than an error, the caller decides what an
/// empty pool means.
pub struct Catalog {
    subtopics: HashMap<&'static str, Vec<&'static str>>,
    templates: HashMap<&'static str, Vec<&'static str>>,
}

impl Catalog {
    pub fn new() -> Self {
        let subtopics = HashMap::from([
            ("Python", vec!["variables", "loops", "functions", "data structures"]),
            (
                "JavaScript",
                vec!["DOM manipulation", "event handling", "promises", "ES6 features"],
            ),
            (
                "Data Science",
                vec!["pandas", "numpy", "data visualization", "machine learning"],
            ),
            ("Web Development", vec!["HTML", "CSS", "React", "Bootstrap"]),
        ]);

        // Each template carries exactly one `{}` slot.
        let templates = HashMap::from([
            (
                "easy",
                vec!["What is {}?", "Explain {} in simple terms.", "Define {}."],
            ),
            (
                "medium",
                vec![
                    "How does {} work?",
                    "Give an example of {}.",
                    "What are the benefits of using {}?",
                ],
            ),
            (
                "hard",
                vec![
                    "Explain the underlying concepts of {}.",
                    "Discuss the pros and cons of {}.",
                    "How can you optimize {}?",
                ],
            ),
        ]);

        Self {
            subtopics,
            templates,
        }
    }

    /// The subtopic pool for `topic`, empty for unknown topics.
    pub fn subtopics(&self, topic: &str) -> &[&'static str] {
        self.subtopics.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The template pool for `difficulty`, empty for unknown tiers.
    pub fn templates(&self, difficulty: &str) -> &[&'static str] {
        self.templates
            .get(difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
