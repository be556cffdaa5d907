//! About screen content and selection

/// App name shown in the About header
pub const APP_NAME: &str = "SampleWorkshopApp";
/// Version line under the app name
pub const APP_VERSION: &str = "Version 1.0.0 (42)";
/// Footer line
pub const FOOTER: &str = "Made with ❤️ in San Francisco";

/// One row in an About section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutRow {
    /// Icon + label row
    Link {
        icon: &'static str,
        label: &'static str,
    },
    /// Team member with their role
    Member {
        name: &'static str,
        role: &'static str,
    },
}

impl AboutRow {
    pub fn title(&self) -> &'static str {
        match self {
            AboutRow::Link { label, .. } => label,
            AboutRow::Member { name, .. } => name,
        }
    }
}

/// A titled group of rows
#[derive(Debug, Clone, Copy)]
pub struct AboutSection {
    pub title: &'static str,
    pub rows: &'static [AboutRow],
}

pub const SECTIONS: &[AboutSection] = &[
    AboutSection {
        title: "General",
        rows: &[
            AboutRow::Link {
                icon: "★",
                label: "Rate this App",
            },
            AboutRow::Link {
                icon: "⇪",
                label: "Share with Friends",
            },
            AboutRow::Link {
                icon: "?",
                label: "Help & Support",
            },
        ],
    },
    AboutSection {
        title: "Team",
        rows: &[
            AboutRow::Member {
                name: "Alice Johnson",
                role: "Engineering Lead",
            },
            AboutRow::Member {
                name: "Bob Chen",
                role: "Designer",
            },
            AboutRow::Member {
                name: "Carol Williams",
                role: "Backend Engineer",
            },
            AboutRow::Member {
                name: "David Kim",
                role: "QA Engineer",
            },
        ],
    },
    AboutSection {
        title: "Legal",
        rows: &[
            AboutRow::Link {
                icon: "≡",
                label: "Terms of Service",
            },
            AboutRow::Link {
                icon: "⚿",
                label: "Privacy Policy",
            },
            AboutRow::Link {
                icon: "</>",
                label: "Open Source Licenses",
            },
        ],
    },
];

/// Total number of selectable rows across all sections
pub fn row_count() -> usize {
    SECTIONS.iter().map(|s| s.rows.len()).sum()
}

/// Row at a flat index across sections
pub fn row_at(index: usize) -> Option<&'static AboutRow> {
    SECTIONS.iter().flat_map(|s| s.rows.iter()).nth(index)
}

/// Selection within the About list
#[derive(Debug, Clone, Default)]
pub struct AboutState {
    pub selected_index: usize,
}

impl AboutState {
    pub fn move_down(&mut self) {
        let max = row_count();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_row(&self) -> Option<&'static AboutRow> {
        row_at(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(), 10);
    }

    #[test]
    fn test_row_at_crosses_sections() {
        assert_eq!(row_at(0).map(|r| r.title()), Some("Rate this App"));
        assert_eq!(row_at(3).map(|r| r.title()), Some("Alice Johnson"));
        assert_eq!(row_at(9).map(|r| r.title()), Some("Open Source Licenses"));
        assert!(row_at(10).is_none());
    }

    #[test]
    fn test_team_roles() {
        let team = SECTIONS.iter().find(|s| s.title == "Team").unwrap();
        assert_eq!(
            team.rows[1],
            AboutRow::Member {
                name: "Bob Chen",
                role: "Designer"
            }
        );
    }

    #[test]
    fn test_selection_is_bounded() {
        let mut state = AboutState::default();
        state.move_up();
        assert_eq!(state.selected_index, 0);
        for _ in 0..20 {
            state.move_down();
        }
        assert_eq!(state.selected_index, 9);
        assert_eq!(
            state.selected_row().map(|r| r.title()),
            Some("Open Source Licenses")
        );
    }
}
