//! State behind the "Playground & Test cases" card.

pub static BASIC_SKILLS: &[&str] = &["C#", ".NET", "React", "TypeScript", "SQL", "Testing"];

/// Items of `list` containing `query`, ignoring case, in their original
/// order. An empty query keeps everything.
pub fn filter<'a>(list: &[&'a str], query: &str) -> Vec<&'a str> {
    let query = query.to_lowercase();
    list.iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&query))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn get(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_keeps_all() {
        assert_eq!(filter(BASIC_SKILLS, ""), BASIC_SKILLS.to_vec());
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(filter(BASIC_SKILLS, "script"), vec!["TypeScript"]);
        assert_eq!(filter(BASIC_SKILLS, "NET"), vec![".NET"]);
        assert_eq!(filter(BASIC_SKILLS, "t"), vec![".NET", "React", "TypeScript", "Testing"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(BASIC_SKILLS, "haskell").is_empty());
    }

    #[test]
    fn test_known_queries() {
        let cases: &[(&str, &[&str])] = &[
            ("c", &["C#", "React", "TypeScript"]),
            ("C#", &["C#"]),
            (".", &[".NET"]),
            ("re", &["React"]),
            ("SQL", &["SQL"]),
            ("sql", &["SQL"]),
            ("ing", &["Testing"]),
            ("tEsT", &["Testing"]),
            ("x", &[]),
            (" ", &[]),
        ];
        for (q, expected) in cases {
            assert_eq!(filter(BASIC_SKILLS, q), expected.to_vec(), "query {:?}", q);
        }
    }

    #[test]
    fn test_non_ascii_query() {
        let list = ["Ångström", "Python", "Übersicht"];
        assert_eq!(filter(&list, "åNG"), vec!["Ångström"]);
        assert_eq!(filter(&list, "ÜBER"), vec!["Übersicht"]);
        assert!(filter(&list, "ang").is_empty());
    }

    #[test]
    fn test_counter_counts_up() {
        let mut counter = Counter::default();
        assert_eq!(counter.get(), 0);
        for n in 1..=25 {
            counter.increment();
            assert_eq!(counter.get(), n);
        }
    }
}
