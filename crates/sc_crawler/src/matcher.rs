/// Picks the team an article is about: the roster name whose first
/// occurrence in `text` comes earliest. Matching is an exact, case-sensitive
/// substring search. When two names first occur at the same offset the one
/// listed first in `teams` wins.
pub fn best_match<'a, S: AsRef<str>>(text: &str, teams: &'a [S]) -> Option<&'a str> {
    teams
        .iter()
        .map(|team| team.as_ref())
        .filter_map(|team| text.find(team).map(|offset| (offset, team)))
        // min_by_key keeps the first of equal minima
        .min_by_key(|&(offset, _)| offset)
        .map(|(_, team)| team)
}
