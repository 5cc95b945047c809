//! Site navigation: the header's menus and user shortcuts.
//!
//! The content is fixed. Subject counts are site-wide figures shown in the
//! menu, not derived from the loaded catalog.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: &'static str,
    pub icon: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub brand: &'static str,
    pub subjects: Vec<Subject>,
    pub tools: Vec<Tool>,
    pub links: Vec<&'static str>,
    pub user_menu: Vec<&'static str>,
    pub notifications: u32,
}

impl Navigation {
    pub fn site() -> Self {
        Self {
            brand: "EduHub",
            subjects: vec![
                Subject {
                    name: "Mathematics",
                    icon: "📐",
                    count: 45,
                },
                Subject {
                    name: "Physics",
                    icon: "⚛️",
                    count: 32,
                },
                Subject {
                    name: "Chemistry",
                    icon: "🧪",
                    count: 28,
                },
                Subject {
                    name: "Biology",
                    icon: "🧬",
                    count: 38,
                },
                Subject {
                    name: "History",
                    icon: "📜",
                    count: 25,
                },
                Subject {
                    name: "Literature",
                    icon: "📚",
                    count: 42,
                },
            ],
            tools: vec![
                Tool {
                    name: "Study Planner",
                    description: "Organize your learning schedule",
                    icon: "📅",
                },
                Tool {
                    name: "Quiz Builder",
                    description: "Create interactive quizzes",
                    icon: "❓",
                },
                Tool {
                    name: "Note Taker",
                    description: "Digital note-taking tool",
                    icon: "📝",
                },
                Tool {
                    name: "Progress Tracker",
                    description: "Monitor learning progress",
                    icon: "📊",
                },
            ],
            links: vec!["Community", "Achievements"],
            user_menu: vec!["Profile", "Favorites", "Progress", "Settings"],
            notifications: 3,
        }
    }

    /// Top-level entries in menu order, as shown in the compact (mobile) menu.
    pub fn top_level(&self) -> Vec<&'static str> {
        let mut entries = vec!["Subjects", "Tools"];
        entries.extend(self.links.iter().copied());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_navigation_content() {
        let nav = Navigation::site();
        assert_eq!(nav.subjects.len(), 6);
        assert_eq!(nav.subjects[0].count, 45);
        assert_eq!(nav.tools[1].name, "Quiz Builder");
        assert_eq!(
            nav.top_level(),
            vec!["Subjects", "Tools", "Community", "Achievements"]
        );
    }
}
