//! Keyword search over a static section table.

/// One searchable report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEntry {
    pub page_index: usize,
    pub section_label: &'static str,
    pub keywords: &'static [&'static str],
}

impl SearchEntry {
    /// True when `term` (already lowercased) is a substring of the label or
    /// of any keyword.
    fn matches_term(&self, term: &str) -> bool {
        self.section_label.to_lowercase().contains(term)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(term))
    }
}

const EVEREST_ENTRIES: &[SearchEntry] = &[
    SearchEntry {
        page_index: 1,
        section_label: "Abstract",
        keywords: &["purpose", "methods", "results", "conclusion", "abstract", "summary"],
    },
    SearchEntry {
        page_index: 1,
        section_label: "Background",
        keywords: &["history", "1953", "summit", "tenzing", "hillary", "motivation"],
    },
    SearchEntry {
        page_index: 1,
        section_label: "Literature Review",
        keywords: &[
            "huey", "gallagher", "salisbury", "year", "season", "nationality", "route", "crowding",
            "sherpa",
        ],
    },
    SearchEntry {
        page_index: 1,
        section_label: "Research Question",
        keywords: &["determinants", "success", "1990", "2025", "scope", "approach"],
    },
    SearchEntry {
        page_index: 2,
        section_label: "Nationality",
        keywords: &["citizenship", "country", "nepal", "multinational", "dummy"],
    },
    SearchEntry {
        page_index: 2,
        section_label: "Route",
        keywords: &["south col", "north ridge", "southeast ridge", "route 6", "standard route"],
    },
    SearchEntry {
        page_index: 2,
        section_label: "Crowding",
        keywords: &["congestion", "queue", "expeditions per season", "traffic"],
    },
    SearchEntry {
        page_index: 3,
        section_label: "Data Sources",
        keywords: &["himalayan database", "dataset", "expedition", "records"],
    },
    SearchEntry {
        page_index: 3,
        section_label: "Processing",
        keywords: &["scraping", "cleaning", "python", "beautiful soup", "pandas"],
    },
    SearchEntry {
        page_index: 3,
        section_label: "Methods",
        keywords: &["ols", "regression", "analysis", "methodology", "statistical"],
    },
    SearchEntry {
        page_index: 3,
        section_label: "Limitations",
        keywords: &["age", "health", "sherpa", "data quality", "covid", "avalanche"],
    },
    SearchEntry {
        page_index: 4,
        section_label: "Regression Results",
        keywords: &["coefficient", "p-value", "r-squared", "significance", "table"],
    },
    SearchEntry {
        page_index: 4,
        section_label: "Visualizations",
        keywords: &["chart", "graph", "success rate", "trend", "citizenship"],
    },
    SearchEntry {
        page_index: 4,
        section_label: "Key Patterns",
        keywords: &["temporal", "seasonal", "spring", "geographic", "2015"],
    },
    SearchEntry {
        page_index: 5,
        section_label: "Key Findings",
        keywords: &["conclusion", "findings", "interpretation", "implications"],
    },
    SearchEntry {
        page_index: 5,
        section_label: "Team",
        keywords: &["alice", "claire", "snigdha", "shayna", "becky", "rania", "linkedin"],
    },
    SearchEntry {
        page_index: 5,
        section_label: "References",
        keywords: &["bibliography", "citations", "sources", "harvard"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SearchIndex {
    entries: &'static [SearchEntry],
}

impl SearchIndex {
    pub const fn new(entries: &'static [SearchEntry]) -> Self {
        Self { entries }
    }

    pub const fn everest() -> Self {
        Self::new(EVEREST_ENTRIES)
    }

    pub fn entries(&self) -> &'static [SearchEntry] {
        self.entries
    }

    /// Multi-term OR match in declaration order, no ranking.
    ///
    /// The query is split on whitespace; an entry matches when any term is a
    /// substring of its label or of one of its keywords. A blank query
    /// returns nothing rather than everything.
    pub fn query(&self, text: &str) -> Vec<&'static SearchEntry> {
        let terms: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| terms.iter().any(|term| entry.matches_term(term)))
            .collect()
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::everest()
    }
}
