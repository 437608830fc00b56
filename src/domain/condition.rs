//! Optional filters of a member search.

use serde::Deserialize;

use crate::domain::types::non_blank;

/// Request-scoped member search filters.
///
/// Every field is independently optional. String filters without visible
/// text are treated as absent rather than as an exact match against `""`;
/// age bounds are present whenever a value was supplied, zero and negative
/// values included.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    #[must_use]
    pub fn new(
        username: Option<&str>,
        team_name: Option<&str>,
        age_goe: Option<i32>,
        age_loe: Option<i32>,
    ) -> Self {
        Self {
            username: non_blank(username),
            team_name: non_blank(team_name),
            age_goe,
            age_loe,
        }
    }

    pub fn username(mut self, username: impl AsRef<str>) -> Self {
        self.username = non_blank(Some(username.as_ref()));
        self
    }

    pub fn team_name(mut self, team_name: impl AsRef<str>) -> Self {
        self.team_name = non_blank(Some(team_name.as_ref()));
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_absent() {
        let condition = MemberSearchCondition::new(Some(""), Some("   "), None, None);
        assert_eq!(condition, MemberSearchCondition::default());
    }

    #[test]
    fn zero_and_negative_bounds_are_present() {
        let condition = MemberSearchCondition::default().age_goe(0).age_loe(-5);
        assert_eq!(condition.age_goe, Some(0));
        assert_eq!(condition.age_loe, Some(-5));
        assert_ne!(condition, MemberSearchCondition::default());
    }

    #[test]
    fn builder_sets_string_filters() {
        let condition = MemberSearchCondition::default()
            .team_name("teamA")
            .username("member1");
        assert_eq!(condition.team_name.as_deref(), Some("teamA"));
        assert_eq!(condition.username.as_deref(), Some("member1"));
    }
}
