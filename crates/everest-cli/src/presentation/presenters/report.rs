use everest_core::{Page, PageRegistry, ReportContent, SearchEntry, Theme};

use crate::presentation::view_models::{
    CommandResultViewModel, HighlightEntry, PageListViewModel, PageSummary,
    PageTextViewModel, SearchHit, SearchResultsViewModel, StatusBadge, TabEntry, TabText,
    ThemeViewModel, Tip,
};

pub fn tab_entries(page: &Page) -> Vec<TabEntry> {
    page.tabs
        .iter()
        .map(|tab| TabEntry {
            value: tab.value.to_string(),
            label: tab.label.to_string(),
            is_default: page.default_tab == Some(tab.value),
        })
        .collect()
}

pub fn present_pages(registry: &PageRegistry) -> CommandResultViewModel<PageListViewModel> {
    let pages = registry
        .pages()
        .iter()
        .map(|page| PageSummary {
            index: page.index,
            name: page.name.to_string(),
            aliases: registry
                .aliases_for(page.index)
                .into_iter()
                .map(str::to_string)
                .collect(),
            tabs: tab_entries(page),
        })
        .collect();

    CommandResultViewModel::new(PageListViewModel { pages }).with_suggestion(
        Tip::new("Open a page in the viewer", "everest view --page <alias> --tab <tab>"),
    )
}

pub fn present_search(
    query: &str,
    hits: &[&SearchEntry],
    registry: &PageRegistry,
) -> CommandResultViewModel<SearchResultsViewModel> {
    let results: Vec<SearchHit> = hits
        .iter()
        .map(|entry| SearchHit {
            page_index: entry.page_index,
            page_name: registry.name_of(entry.page_index).to_string(),
            section_label: entry.section_label.to_string(),
            keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect();

    let badge = if results.is_empty() {
        StatusBadge::warning("No results found")
    } else {
        StatusBadge::info(format!("{} result(s) for \"{}\"", results.len(), query))
    };

    let first_page = results.first().map(|hit| hit.page_index);

    let mut result = CommandResultViewModel::new(SearchResultsViewModel {
        query: query.to_string(),
        terms: query.split_whitespace().map(str::to_lowercase).collect(),
        results,
    })
    .with_badge(badge);

    if let Some(page_index) = first_page {
        result = result.with_suggestion(
            Tip::new("Read the first match", format!("everest show {}", page_index)),
        );
    } else {
        result = result.with_suggestion(
            Tip::new("List pages and their tabs", "everest pages"),
        );
    }

    result
}

/// Text of one page, limited to `tabs` (in registry order).
pub fn present_page_text(
    page: &Page,
    content: &ReportContent,
    tabs: &[&str],
) -> CommandResultViewModel<PageTextViewModel> {
    let page_content = content.page(page.index);

    let sections = page
        .tabs
        .iter()
        .filter(|tab| tabs.contains(&tab.value))
        .map(|tab| TabText {
            value: tab.value.to_string(),
            label: tab.label.to_string(),
            body: content
                .tab_body(page.index, tab.value)
                .unwrap_or_default()
                .trim_end()
                .to_string(),
        })
        .collect();

    let highlights = if page.tabs.is_empty() {
        content
            .highlights
            .iter()
            .map(|h| HighlightEntry {
                label: h.label.clone(),
                value: h.value.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    CommandResultViewModel::new(PageTextViewModel {
        index: page.index,
        name: page.name.to_string(),
        title: page_content
            .map(|p| p.title.clone())
            .unwrap_or_else(|| page.name.to_string()),
        subtitle: page_content.map(|p| p.subtitle.clone()).unwrap_or_default(),
        summary: page_content.map(|p| p.summary.clone()).unwrap_or_default(),
        highlights,
        sections,
    })
}

pub fn present_theme(
    theme: Theme,
    changed: bool,
    preferences_path: &std::path::Path,
) -> CommandResultViewModel<ThemeViewModel> {
    let content = ThemeViewModel {
        theme: theme.as_str().to_string(),
        is_dark: theme == Theme::Dark,
        changed,
        preferences_path: preferences_path.display().to_string(),
    };

    if changed {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success(format!("Theme set to {}", theme)))
    } else {
        CommandResultViewModel::new(content).with_suggestion(
            Tip::new("Switch theme", "everest theme toggle"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use everest_core::SearchIndex;

    #[test]
    fn test_present_pages_lists_every_page_with_aliases() {
        let registry = PageRegistry::everest();
        let result = present_pages(&registry);
        assert_eq!(result.content.pages.len(), 6);

        let analysis = &result.content.pages[4];
        assert_eq!(analysis.aliases, vec!["analysis", "results", "findings"]);
        assert!(analysis.tabs[0].is_default);
        assert!(!analysis.tabs[1].is_default);
    }

    #[test]
    fn test_present_search_empty_gets_warning_badge() {
        let registry = PageRegistry::everest();
        let result = present_search("zzz", &[], &registry);
        let badge = result.badge.expect("badge");
        assert_eq!(badge.label, "No results found");
        assert!(result.content.results.is_empty());
    }

    #[test]
    fn test_present_search_names_result_pages() {
        let registry = PageRegistry::everest();
        let hits = SearchIndex::everest().query("hillary");
        let result = present_search("hillary", &hits, &registry);
        assert_eq!(result.content.results.len(), 1);
        assert_eq!(result.content.results[0].page_name, "Introduction");
        assert_eq!(result.content.results[0].section_label, "Background");
    }

    #[test]
    fn test_present_page_text_keeps_registry_order() -> anyhow::Result<()> {
        let registry = PageRegistry::everest();
        let content = ReportContent::embedded()?;
        let page = registry.page(4).expect("analysis");

        let result = present_page_text(page, &content, &["patterns", "regression"]);
        let labels: Vec<_> = result.content.sections.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(labels, vec!["regression", "patterns"]);
        assert_eq!(result.content.title, "Analysis");
        Ok(())
    }
}
