use crate::models::Profile;

/// Whether `profile` matches an already-lowercased query.
fn matches(profile: &Profile, query: &str) -> bool {
    query.is_empty()
        || profile.name.to_lowercase().contains(query)
        || profile.year.contains(query)
        || profile.bio.to_lowercase().contains(query)
}

/// Profiles matching `query`, in their original order.
///
/// Matching is case-insensitive on name and bio; the year is compared as
/// typed. An empty query returns every profile.
pub fn filter_profiles<'a>(profiles: &'a [Profile], query: &str) -> Vec<&'a Profile> {
    let query = query.to_lowercase();
    profiles.iter().filter(|p| matches(p, &query)).collect()
}
