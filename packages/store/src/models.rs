//! # Domain models for the alumni directory
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Profile`] | One alumni card in the directory. Created on signup, never edited afterwards. |
//! | [`UserType`] | Whether the member is still on campus or has graduated. Serialised as the labels shown in the signup form (`"In Campus"`, `"Pass Out"`). |
//! | [`Section`] | A page section the header can scroll to. |
//!
//! ## Helper functions
//!
//! - [`avatar_initials`] derives the two-letter avatar shown on a card.
//! - [`random_id`] produces the short base-36 id given to new profiles.
//! - [`sample_profiles`] is the seed directory every session starts from.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single alumni profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Short opaque id: "a1", "k3x9q0z"
    pub id: String,
    /// Full name as typed at signup
    pub name: String,
    /// Graduation year, or the placeholder glyph when none was given
    pub year: String,
    #[serde(default)]
    pub bio: String,
    /// Initials rendered in the avatar circle
    pub avatar: String,
    #[serde(default)]
    pub user_type: UserType,
}

/// Membership kind selected in the signup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "In Campus")]
    InCampus,
    #[default]
    #[serde(rename = "Pass Out")]
    PassOut,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::InCampus, UserType::PassOut];

    pub fn label(self) -> &'static str {
        match self {
            UserType::InCampus => "In Campus",
            UserType::PassOut => "Pass Out",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a `<select>` value is not a known user type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user type: {0}")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownUserType(s.to_string()))
    }
}

/// Page sections reachable from the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    Network,
}

impl Section {
    /// Element id of the section root.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Network => "network",
        }
    }

    /// Text of the header button.
    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::Network => "Network",
        }
    }
}

/// First character of up to two space-separated tokens of `name`.
///
/// Empty tokens (from doubled spaces) still count towards the two but
/// contribute nothing, so `"Ada  Lovelace"` yields `"A"`.
pub fn avatar_initials(name: &str) -> String {
    name.split(' ')
        .take(2)
        .filter_map(|token| token.chars().next())
        .collect()
}

const ID_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base-36 token used as a profile id.
pub fn random_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// The directory every session starts with.
pub fn sample_profiles() -> Vec<Profile> {
    [
        ("a1", "Priya Sharma", "2016", "Software engineer"),
        ("a2", "Rohit Verma", "2018", "Product manager"),
        ("a3", "Neha Gupta", "2012", "Founder — edtech startup"),
    ]
    .into_iter()
    .map(|(id, name, year, bio)| Profile {
        id: id.to_string(),
        name: name.to_string(),
        year: year.to_string(),
        bio: bio.to_string(),
        avatar: avatar_initials(name),
        user_type: UserType::PassOut,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_initials() {
        assert_eq!(avatar_initials("Priya Sharma"), "PS");
        assert_eq!(avatar_initials("Cher"), "C");
        assert_eq!(avatar_initials("Mary Ann Evans"), "MA");
        assert_eq!(avatar_initials("Ada  Lovelace"), "A");
        assert_eq!(avatar_initials(""), "");
        assert_eq!(avatar_initials("élodie durand"), "éd");
    }

    #[test]
    fn test_random_id_is_base36() {
        let id = random_id();
        assert_eq!(id.len(), 7);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(random_id(), random_id());
    }

    #[test]
    fn test_user_type_labels_roundtrip() {
        for t in UserType::ALL {
            assert_eq!(t.label().parse::<UserType>(), Ok(t));
        }
        assert_eq!(
            "Alumni".parse::<UserType>(),
            Err(UnknownUserType("Alumni".to_string()))
        );
        assert_eq!(UserType::default(), UserType::PassOut);
    }

    #[test]
    fn test_sample_profiles() {
        let seed = sample_profiles();
        let names: Vec<_> = seed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Priya Sharma", "Rohit Verma", "Neha Gupta"]);
        let avatars: Vec<_> = seed.iter().map(|p| p.avatar.as_str()).collect();
        assert_eq!(avatars, ["PS", "RV", "NG"]);
    }
}
