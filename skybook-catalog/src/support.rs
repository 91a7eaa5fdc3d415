use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqCategory {
    pub category: String,
    pub questions: Vec<FaqEntry>,
}

/// A way to reach customer support.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: String,
    pub description: String,
    pub contact: String,
    pub action: String,
}

/// Case-insensitive search across questions and answers. Categories with no
/// hits are dropped.
pub fn search_faqs(categories: &[FaqCategory], term: &str) -> Vec<FaqCategory> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return categories.to_vec();
    }

    categories
        .iter()
        .filter_map(|category| {
            let questions: Vec<FaqEntry> = category
                .questions
                .iter()
                .filter(|entry| {
                    entry.question.to_lowercase().contains(&needle)
                        || entry.answer.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();

            (!questions.is_empty()).then(|| FaqCategory {
                category: category.category.clone(),
                questions,
            })
        })
        .collect()
}
