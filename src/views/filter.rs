use crate::types::Company;

/// Sector selector of the companies screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectorFilter {
    #[default]
    All,
    Only(String),
}

impl SectorFilter {
    pub fn matches(&self, sector: &str) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Only(s) => s == sector,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SectorFilter::All => "All",
            SectorFilter::Only(s) => s,
        }
    }
}

/// Companies whose name or ticker contains `query` (case-insensitive) and
/// whose sector passes `sector`. An empty query matches everything.
/// Collection order is preserved.
pub fn filter_companies<'a>(
    companies: &'a [Company],
    query: &str,
    sector: &SectorFilter,
) -> Vec<&'a Company> {
    let needle = query.to_lowercase();
    companies
        .iter()
        .filter(|c| {
            let matches_search = c.name.to_lowercase().contains(&needle)
                || c.ticker.to_lowercase().contains(&needle);
            matches_search && sector.matches(&c.sector)
        })
        .collect()
}

/// `All` followed by every distinct sector in first-seen order.
pub fn sector_options(companies: &[Company]) -> Vec<SectorFilter> {
    let mut options = vec![SectorFilter::All];
    for c in companies {
        let candidate = SectorFilter::Only(c.sector.clone());
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    options
}

/// The option after `current` in `sector_options`, wrapping around.
/// Unknown filters restart at `All`.
pub fn next_sector(companies: &[Company], current: &SectorFilter) -> SectorFilter {
    let options = sector_options(companies);
    match options.iter().position(|o| o == current) {
        Some(i) => options[(i + 1) % options.len()].clone(),
        None => SectorFilter::All,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn empty_query_and_all_returns_everything_in_order() {
        let ds = Dataset::seed();
        let result = filter_companies(&ds.companies, "", &SectorFilter::All);
        let ids: Vec<u32> = result.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn query_matches_name_or_ticker_case_insensitively() {
        let ds = Dataset::seed();
        for query in ["tech", "TVIS", "sCnT", "in", "x", "Solutions"] {
            let result = filter_companies(&ds.companies, query, &SectorFilter::All);
            let q = query.to_lowercase();
            for c in &result {
                assert!(
                    c.name.to_lowercase().contains(&q) || c.ticker.to_lowercase().contains(&q),
                    "{} does not match {query}",
                    c.name
                );
            }
            let expected = ds
                .companies
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&q) || c.ticker.to_lowercase().contains(&q))
                .count();
            assert_eq!(result.len(), expected, "query {query}");
        }
    }

    #[test]
    fn ticker_match_finds_company() {
        let ds = Dataset::seed();
        let result = filter_companies(&ds.companies, "dflw", &SectorFilter::All);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "DataFlow Systems");
    }

    #[test]
    fn sector_filter_restricts_to_sector() {
        let ds = Dataset::seed();
        let sector = SectorFilter::Only("Cybersecurity".to_string());
        let result = filter_companies(&ds.companies, "", &sector);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 4);

        let none = filter_companies(&ds.companies, "tech", &sector);
        assert!(none.is_empty());
    }

    #[test]
    fn sector_options_start_with_all_and_are_distinct() {
        let ds = Dataset::seed();
        let options = sector_options(&ds.companies);
        assert_eq!(options[0], SectorFilter::All);
        assert_eq!(options.len(), 7);
        assert_eq!(options[1].label(), "Software");
    }

    #[test]
    fn next_sector_wraps_around() {
        let ds = Dataset::seed();
        let first = next_sector(&ds.companies, &SectorFilter::All);
        assert_eq!(first, SectorFilter::Only("Software".to_string()));
        let last = SectorFilter::Only("FinTech".to_string());
        assert_eq!(next_sector(&ds.companies, &last), SectorFilter::All);
        let unknown = SectorFilter::Only("Mining".to_string());
        assert_eq!(next_sector(&ds.companies, &unknown), SectorFilter::All);
    }
}
