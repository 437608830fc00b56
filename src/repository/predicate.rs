//! Dynamic WHERE-clause construction for member searches.
//!
//! Each filter function maps one optional input to an optional condition.
//! `None` means "no constraint" and is dropped from the conjunction; it never
//! turns into an always-false term.

use diesel::dsl::{IntoBoxed, LeftJoin};
use diesel::helper_types::LeftJoinQuerySource;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;

use crate::domain::condition::MemberSearchCondition;
use crate::domain::types::non_blank;
use crate::schema::{members, teams};

/// `members LEFT JOIN teams` as a query source.
pub type MemberTeamSource = LeftJoinQuerySource<members::table, teams::table>;

/// Boxed boolean condition over [`MemberTeamSource`].
///
/// Team columns are nullable on the right side of the outer join, so every
/// condition is typed as `Nullable<Bool>`.
pub type MemberCondition =
    Box<dyn BoxableExpression<MemberTeamSource, Sqlite, SqlType = Nullable<Bool>>>;

/// Boxed `members LEFT JOIN teams` select statement.
pub type MemberTeamQuery<'a> = IntoBoxed<'a, LeftJoin<members::table, teams::table>, Sqlite>;

pub fn username_eq(username: Option<&str>) -> Option<MemberCondition> {
    let username = non_blank(username)?;
    Some(Box::new(members::username.eq(username)))
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<MemberCondition> {
    let team_name = non_blank(team_name)?;
    Some(Box::new(teams::name.nullable().eq(team_name)))
}

/// `age >= bound`
pub fn age_goe(bound: Option<i32>) -> Option<MemberCondition> {
    bound.map(|age| Box::new(members::age.nullable().ge(age)) as MemberCondition)
}

/// `age <= bound`
pub fn age_loe(bound: Option<i32>) -> Option<MemberCondition> {
    bound.map(|age| Box::new(members::age.nullable().le(age)) as MemberCondition)
}

/// AND together the present conditions.
///
/// Absent terms are skipped wherever they appear, so a later filter works
/// even when the first one is missing. `None` means "match everything".
pub fn all_of<I>(conditions: I) -> Option<MemberCondition>
where
    I: IntoIterator<Item = Option<MemberCondition>>,
{
    conditions
        .into_iter()
        .flatten()
        .reduce(|acc, next| Box::new(acc.and(next)) as MemberCondition)
}

pub fn member_search_predicate(condition: &MemberSearchCondition) -> Option<MemberCondition> {
    all_of([
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ])
}

/// Members joined with their teams, restricted by `condition`.
pub fn filtered_member_teams(condition: &MemberSearchCondition) -> MemberTeamQuery<'static> {
    let query = members::table.left_join(teams::table).into_boxed::<Sqlite>();
    match member_search_predicate(condition) {
        Some(predicate) => query.filter(predicate),
        None => query,
    }
}

#[cfg(test)]
mod tests {
    use diesel::debug_query;

    use super::*;

    fn sql_for(condition: &MemberSearchCondition) -> String {
        debug_query::<Sqlite, _>(&filtered_member_teams(condition)).to_string()
    }

    #[test]
    fn absent_filters_produce_no_condition() {
        assert!(username_eq(None).is_none());
        assert!(username_eq(Some("   ")).is_none());
        assert!(team_name_eq(Some("")).is_none());
        assert!(age_goe(None).is_none());
        assert!(age_loe(None).is_none());
    }

    #[test]
    fn numeric_bounds_are_present_for_any_value() {
        assert!(age_goe(Some(0)).is_some());
        assert!(age_loe(Some(-1)).is_some());
    }

    #[test]
    fn empty_condition_matches_everything() {
        let condition = MemberSearchCondition::default();
        assert!(member_search_predicate(&condition).is_none());
        assert!(!sql_for(&condition).contains("WHERE"));
    }

    #[test]
    fn later_filter_alone_is_applied() {
        let condition = MemberSearchCondition::default().age_loe(30);
        let sql = sql_for(&condition);
        assert!(sql.contains("WHERE"));
        assert!(sql.contains("<="));
        assert!(!sql.contains(">="));
    }

    #[test]
    fn all_filters_are_combined_with_and() {
        let condition = MemberSearchCondition::default()
            .username("member1")
            .team_name("teamA")
            .age_goe(10)
            .age_loe(40);
        let sql = sql_for(&condition);
        assert_eq!(sql.matches(" AND ").count(), 3);
        assert!(sql.contains(">="));
        assert!(sql.contains("<="));
        assert!(sql.contains("LEFT OUTER JOIN"));
    }

    #[test]
    fn all_of_skips_absent_terms() {
        assert!(all_of([None, None]).is_none());
        assert!(all_of([None, age_goe(Some(1)), None]).is_some());
    }
}
