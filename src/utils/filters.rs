//! Repository filtering utilities

use crate::github::RepoRef;

/// Filter repositories by specific names
///
/// An empty name list means no filtering; otherwise only repositories whose
/// name appears in `names` are kept, in their original order.
pub fn filter_by_names(repositories: &[RepoRef], names: &[String]) -> Vec<RepoRef> {
    if names.is_empty() {
        return repositories.to_vec();
    }

    repositories
        .iter()
        .filter(|repo| names.contains(&repo.name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepoRef {
        RepoRef {
            name: name.to_string(),
            api_url: format!("https://api.github.com/repos/o/{name}"),
            clone_url: format!("https://github.com/o/{name}.git"),
            fork: false,
        }
    }

    #[test]
    fn test_empty_names_keeps_everything() {
        let repos = vec![repo("a"), repo("b")];
        assert_eq!(filter_by_names(&repos, &[]), repos);
    }

    #[test]
    fn test_filters_and_preserves_order() {
        let repos = vec![repo("a"), repo("b"), repo("c")];
        let names = vec!["c".to_string(), "a".to_string()];
        let filtered = filter_by_names(&repos, &names);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "a");
        assert_eq!(filtered[1].name, "c");
    }

    #[test]
    fn test_unknown_names_match_nothing() {
        let repos = vec![repo("a")];
        let names = vec!["zzz".to_string()];
        assert!(filter_by_names(&repos, &names).is_empty());
    }
}
