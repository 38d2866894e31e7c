use crate::types::{Company, DealWorkspace, Event, Party};

/// A workspace whose buyer and target both map to known companies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWorkspace<'a> {
    pub workspace: &'a DealWorkspace,
    pub buyer: &'a Company,
    pub target: &'a Company,
}

/// Matches a party by name first, then by id when the party carries one.
pub fn resolve_party<'a>(party: &Party, companies: &'a [Company]) -> Option<&'a Company> {
    companies
        .iter()
        .find(|c| c.name == party.name())
        .or_else(|| {
            let id = party.id()?;
            companies.iter().find(|c| c.id == id)
        })
}

/// `None` when either side cannot be matched; the detail view must show
/// "details not available" instead of computing anything.
pub fn resolve_workspace<'a>(
    workspace: &'a DealWorkspace,
    companies: &'a [Company],
) -> Option<ResolvedWorkspace<'a>> {
    let buyer = resolve_party(&workspace.buyer, companies)?;
    let target = resolve_party(&workspace.target, companies)?;
    Some(ResolvedWorkspace {
        workspace,
        buyer,
        target,
    })
}

/// The company an event points at, by denormalized name and then by id.
pub fn event_company<'a>(event: &Event, companies: &'a [Company]) -> Option<&'a Company> {
    companies
        .iter()
        .find(|c| c.name == event.company)
        .or_else(|| companies.iter().find(|c| c.id == event.company_id))
}

/// Companies on the watchlist, in collection order.
pub fn watchlist_companies<'a>(companies: &'a [Company], watchlist: &[u32]) -> Vec<&'a Company> {
    companies
        .iter()
        .filter(|c| watchlist.contains(&c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::types::WorkspaceStatus;

    #[test]
    fn seeded_workspace_resolves_by_name() {
        let ds = Dataset::seed();
        let resolved = resolve_workspace(&ds.workspaces[0], &ds.companies).unwrap();
        assert_eq!(resolved.buyer.id, 3);
        assert_eq!(resolved.target.id, 4);
    }

    #[test]
    fn renamed_company_still_resolves_by_id() {
        let ds = Dataset::seed();
        let mut stale = ds.company(5).unwrap().clone();
        stale.name = "AIWare (old name)".to_string();
        let party = Party::from(&stale);
        assert_eq!(resolve_party(&party, &ds.companies).unwrap().id, 5);
    }

    #[test]
    fn unknown_party_is_not_resolvable() {
        let ds = Dataset::seed();
        let ws = DealWorkspace {
            id: 9,
            buyer: Party::Name("Ghost Holdings".to_string()),
            target: Party::Name("SecureNet GmbH".to_string()),
            status: WorkspaceStatus::Active,
            fit_score: 50,
            synergies: 10,
            created_date: "Today".to_string(),
        };
        assert!(resolve_workspace(&ws, &ds.companies).is_none());
        assert!(resolve_workspace(&ds.workspaces[1], &[]).is_none());
    }

    #[test]
    fn event_company_follows_name_then_id() {
        let ds = Dataset::seed();
        assert_eq!(event_company(&ds.events[0], &ds.companies).unwrap().id, 4);

        let mut orphan = ds.events[1].clone();
        orphan.company = "Unknown".to_string();
        assert_eq!(event_company(&orphan, &ds.companies).unwrap().id, 1);

        orphan.company_id = 404;
        assert!(event_company(&orphan, &ds.companies).is_none());
    }

    #[test]
    fn watchlist_keeps_collection_order() {
        let ds = Dataset::seed();
        let ids: Vec<u32> = watchlist_companies(&ds.companies, &[4, 1])
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(watchlist_companies(&ds.companies, &[]).is_empty());
    }
}
