use crate::catalog::Player;

/// Players whose name contains `query` (ignoring case), minus any already guessed.
///
/// An empty query matches nothing, so no suggestions are offered until the
/// user starts typing. Catalog order is preserved.
pub fn filter_players<'c>(
    players: &'c [Player],
    query: &str,
    excluded_names: &[&str],
) -> Vec<&'c Player> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    players
        .iter()
        .filter(|player| player.name.to_lowercase().contains(&needle))
        .filter(|player| !excluded_names.contains(&player.name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player(name: &str) -> Player {
        Player {
            name: name.to_string(),
            position: "Outfielder".to_string(),
            age: 30,
            team: "Angels".to_string(),
            all_star: 1,
            world_series: 0,
        }
    }

    fn names<'a>(players: &[&'a Player]) -> Vec<&'a str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_substring_match() {
        let players = vec![player("Mike Trout"), player("Aaron Judge")];
        let result = filter_players(&players, "tr", &[]);
        assert_eq!(names(&result), vec!["Mike Trout"]);
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let players = vec![player("Mike Trout"), player("Aaron Judge")];
        assert!(filter_players(&players, "", &[]).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let players = vec![player("Mike Trout"), player("Ronald Acuña Jr.")];
        assert_eq!(names(&filter_players(&players, "TROUT", &[])), vec!["Mike Trout"]);
        assert_eq!(
            names(&filter_players(&players, "ACUÑA", &[])),
            vec!["Ronald Acuña Jr."]
        );
    }

    #[test]
    fn test_excludes_guessed_names() {
        let players = vec![player("Juan Soto"), player("Gerrit Cole"), player("Shohei Ohtani")];
        let result = filter_players(&players, "o", &["Juan Soto"]);
        assert_eq!(names(&result), vec!["Gerrit Cole", "Shohei Ohtani"]);
    }

    #[test]
    fn test_preserves_catalog_order() {
        let players = vec![
            player("Mookie Betts"),
            player("Freddie Freeman"),
            player("Aaron Judge"),
        ];
        let result = filter_players(&players, "e", &[]);
        assert_eq!(
            names(&result),
            vec!["Mookie Betts", "Freddie Freeman", "Aaron Judge"]
        );
    }

    #[test]
    fn test_no_match() {
        let players = vec![player("Mike Trout")];
        assert!(filter_players(&players, "xyz", &[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_results_contain_query_and_skip_excluded(
            query in "[a-e]{1,2}",
            exclude_first in any::<bool>(),
        ) {
            let players = vec![
                player("Abe Cade"),
                player("Bea Dace"),
                player("Ed Abbe"),
                player("Cab Deed"),
            ];
            let excluded: Vec<&str> = if exclude_first { vec!["Abe Cade"] } else { vec![] };
            let result = filter_players(&players, &query, &excluded);
            for p in &result {
                prop_assert!(p.name.to_lowercase().contains(&query));
                prop_assert!(!excluded.contains(&p.name.as_str()));
            }
            let expected = players
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&query))
                .filter(|p| !excluded.contains(&p.name.as_str()))
                .count();
            prop_assert_eq!(result.len(), expected);
        }
    }
}
