use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageListViewModel {
    pub pages: Vec<PageSummary>,
}

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub index: usize,
    pub name: String,
    pub aliases: Vec<String>,
    pub tabs: Vec<TabEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabEntry {
    pub value: String,
    pub label: String,
    pub is_default: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResultsViewModel {
    pub query: String,
    pub terms: Vec<String>,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub page_index: usize,
    pub page_name: String,
    pub section_label: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PageTextViewModel {
    pub index: usize,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    pub highlights: Vec<HighlightEntry>,
    pub sections: Vec<TabText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct TabText {
    pub value: String,
    pub label: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeViewModel {
    pub theme: String,
    pub is_dark: bool,
    pub changed: bool,
    pub preferences_path: String,
}
