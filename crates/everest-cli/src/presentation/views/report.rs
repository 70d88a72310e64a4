use std::fmt;

use crate::presentation::view_models::{
    CreateView, PageListViewModel, PageTextViewModel, SearchResultsViewModel, ThemeViewModel,
    ViewMode,
};

// --------------------------------------------------------
// Page List View
// --------------------------------------------------------

impl CreateView for PageListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(PageListView { data: self, mode })
    }
}

struct PageListView<'a> {
    data: &'a PageListViewModel,
    mode: ViewMode,
}

impl<'a> PageListView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for page in &self.data.pages {
            writeln!(f, "{} {}", page.index, page.name)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for page in &self.data.pages {
            writeln!(
                f,
                "{} {:<16} {}",
                page.index,
                page.name,
                page.aliases.join(",")
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<3} {:<16} {:<32} TABS", "#", "PAGE", "ALIASES")?;
        writeln!(f, "{}", "-".repeat(80))?;

        for page in &self.data.pages {
            let tabs: Vec<String> = page
                .tabs
                .iter()
                .map(|tab| {
                    if tab.is_default {
                        format!("{}*", tab.value)
                    } else {
                        tab.value.clone()
                    }
                })
                .collect();
            let tabs = if tabs.is_empty() {
                "-".to_string()
            } else {
                tabs.join(" ")
            };

            writeln!(
                f,
                "{:<3} {:<16} {:<32} {}",
                page.index,
                page.name,
                page.aliases.join(", "),
                tabs
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for page in &self.data.pages {
            writeln!(f, "[{}] {}", page.index, page.name)?;
            writeln!(f, "    aliases: {}", page.aliases.join(", "))?;
            for tab in &page.tabs {
                let marker = if tab.is_default { "*" } else { " " };
                writeln!(f, "  {} {:<14} {}", marker, tab.value, tab.label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PageListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Search Results View
// --------------------------------------------------------

impl CreateView for SearchResultsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SearchResultsView { data: self, mode })
    }
}

struct SearchResultsView<'a> {
    data: &'a SearchResultsViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for SearchResultsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.results.is_empty() {
            if self.mode != ViewMode::Minimal {
                writeln!(f, "No results found for \"{}\".", self.data.query)?;
            }
            return Ok(());
        }

        for hit in &self.data.results {
            match self.mode {
                ViewMode::Minimal => writeln!(f, "{}", hit.page_index)?,
                ViewMode::Compact => {
                    writeln!(f, "{} {} / {}", hit.page_index, hit.page_name, hit.section_label)?
                }
                ViewMode::Standard => writeln!(
                    f,
                    "  {:<20} {} (page {})",
                    hit.section_label, hit.page_name, hit.page_index
                )?,
                ViewMode::Verbose => {
                    writeln!(
                        f,
                        "  {:<20} {} (page {})",
                        hit.section_label, hit.page_name, hit.page_index
                    )?;
                    writeln!(f, "      keywords: {}", hit.keywords.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Page Text View
// --------------------------------------------------------

impl CreateView for PageTextViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(PageTextView { data: self, mode })
    }
}

struct PageTextView<'a> {
    data: &'a PageTextViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for PageTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        writeln!(f, "{}", data.title)?;
        writeln!(f, "{}", "=".repeat(data.title.chars().count()))?;
        if !data.subtitle.is_empty() {
            writeln!(f, "{}", data.subtitle)?;
        }
        if !data.summary.is_empty() && self.mode != ViewMode::Minimal {
            writeln!(f)?;
            writeln!(f, "{}", data.summary)?;
        }

        if !data.highlights.is_empty() {
            writeln!(f)?;
            for highlight in &data.highlights {
                writeln!(f, "  {:>8}  {}", highlight.value, highlight.label)?;
            }
        }

        for section in &data.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.label)?;
            writeln!(f, "{}", "-".repeat(section.label.chars().count()))?;
            writeln!(f, "{}", section.body.trim_start_matches('\n'))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Theme View
// --------------------------------------------------------

impl CreateView for ThemeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ThemeView { data: self, mode })
    }
}

struct ThemeView<'a> {
    data: &'a ThemeViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ThemeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.theme);
        }
        writeln!(f, "Theme: {}", self.data.theme)?;
        if self.mode == ViewMode::Verbose {
            writeln!(f, "Stored in: {}", self.data.preferences_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{PageSummary, SearchHit, TabEntry};

    fn sample_pages() -> PageListViewModel {
        PageListViewModel {
            pages: vec![
                PageSummary {
                    index: 0,
                    name: "Landing".to_string(),
                    aliases: vec!["landing".to_string()],
                    tabs: vec![],
                },
                PageSummary {
                    index: 4,
                    name: "Analysis".to_string(),
                    aliases: vec!["analysis".to_string(), "results".to_string()],
                    tabs: vec![
                        TabEntry {
                            value: "regression".to_string(),
                            label: "Regression Results".to_string(),
                            is_default: true,
                        },
                        TabEntry {
                            value: "patterns".to_string(),
                            label: "Key Patterns".to_string(),
                            is_default: false,
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_page_list_minimal() {
        let vm = sample_pages();
        let output = vm.create_view(ViewMode::Minimal).to_string();
        assert_eq!(output, "0 Landing\n4 Analysis\n");
    }

    #[test]
    fn test_page_list_standard_marks_default_tab() {
        let vm = sample_pages();
        let output = vm.create_view(ViewMode::Standard).to_string();
        assert!(output.contains("regression* patterns"));
        assert!(output.contains("analysis, results"));
        let landing_line = output.lines().nth(2).unwrap_or_default();
        assert!(landing_line.ends_with(" -"));
    }

    #[test]
    fn test_search_results_empty_message() {
        let vm = SearchResultsViewModel {
            query: "zzz".to_string(),
            terms: vec!["zzz".to_string()],
            results: vec![],
        };
        assert_eq!(
            vm.create_view(ViewMode::Standard).to_string(),
            "No results found for \"zzz\".\n"
        );
        assert_eq!(vm.create_view(ViewMode::Minimal).to_string(), "");
    }

    #[test]
    fn test_search_results_verbose_lists_keywords() {
        let vm = SearchResultsViewModel {
            query: "spring".to_string(),
            terms: vec!["spring".to_string()],
            results: vec![SearchHit {
                page_index: 4,
                page_name: "Analysis".to_string(),
                section_label: "Key Patterns".to_string(),
                keywords: vec!["spring".to_string(), "seasonal".to_string()],
            }],
        };
        let output = vm.create_view(ViewMode::Verbose).to_string();
        assert!(output.contains("Key Patterns"));
        assert!(output.contains("keywords: spring, seasonal"));
    }
}
