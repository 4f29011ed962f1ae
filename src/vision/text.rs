use std::collections::HashSet;

/// Joins items for prose: `a`, `a and b`, `a, b, and c`.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head}, and {}", last.as_ref())
        }
    }
}

/// Insertion-ordered set of generated suggestion texts.
#[derive(Debug, Default, Clone)]
pub struct OpportunitySet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OpportunitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the exact text was already present.
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.items.push(text);
        true
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}
