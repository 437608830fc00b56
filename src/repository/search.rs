//! Diesel implementation of [`MemberSearchReader`].

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::condition::MemberSearchCondition;
use crate::domain::member::MemberTeam;
use crate::models::member::MemberTeamRow;
use crate::pagination::{Direction, Page, PageRequest, SortOrder, SortProperty, page_with_count_skip};
use crate::repository::predicate::{MemberTeamQuery, filtered_member_teams};
use crate::repository::{
    DieselRepository, MemberSearchReader,
    errors::{RepositoryError, RepositoryResult},
};
use crate::schema::{members, teams};

fn apply_sort<'a>(mut query: MemberTeamQuery<'a>, sort: &[SortOrder]) -> MemberTeamQuery<'a> {
    for order in sort {
        query = match (order.property, order.direction) {
            (SortProperty::MemberId, Direction::Asc) => query.then_order_by(members::id.asc()),
            (SortProperty::MemberId, Direction::Desc) => query.then_order_by(members::id.desc()),
            (SortProperty::Username, Direction::Asc) => {
                query.then_order_by(members::username.asc())
            }
            (SortProperty::Username, Direction::Desc) => {
                query.then_order_by(members::username.desc())
            }
            (SortProperty::Age, Direction::Asc) => query.then_order_by(members::age.asc()),
            (SortProperty::Age, Direction::Desc) => query.then_order_by(members::age.desc()),
            (SortProperty::TeamId, Direction::Asc) => query.then_order_by(teams::id.asc()),
            (SortProperty::TeamId, Direction::Desc) => query.then_order_by(teams::id.desc()),
            (SortProperty::TeamName, Direction::Asc) => query.then_order_by(teams::name.asc()),
            (SortProperty::TeamName, Direction::Desc) => query.then_order_by(teams::name.desc()),
        };
    }
    // Stable tie-breaker so pages never overlap.
    query.then_order_by(members::id.asc())
}

fn load_member_teams(
    conn: &mut DbConnection,
    condition: &MemberSearchCondition,
    request: Option<&PageRequest>,
) -> RepositoryResult<Vec<MemberTeam>> {
    let mut query = filtered_member_teams(condition);

    if let Some(request) = request {
        query = apply_sort(query, request.sort())
            .offset(request.offset() as i64)
            .limit(request.size() as i64);
    } else {
        query = query.order(members::id.asc());
    }

    let rows = query
        .select((
            members::id,
            members::username,
            members::age,
            teams::id.nullable(),
            teams::name.nullable(),
        ))
        .load::<MemberTeamRow>(conn)?;

    rows.into_iter()
        .map(|row| MemberTeam::try_from(row).map_err(RepositoryError::from))
        .collect()
}

fn count_member_teams(
    conn: &mut DbConnection,
    condition: &MemberSearchCondition,
) -> RepositoryResult<u64> {
    let total = filtered_member_teams(condition)
        .count()
        .get_result::<i64>(conn)?;
    Ok(total as u64)
}

impl MemberSearchReader for DieselRepository {
    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeam>> {
        let mut conn = self.conn()?;
        load_member_teams(&mut conn, condition, None)
    }

    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>> {
        let mut conn = self.conn()?;

        let total = count_member_teams(&mut conn, condition)?;
        let content = load_member_teams(&mut conn, condition, Some(request))?;

        Ok(Page::new(content, request, total))
    }

    fn search_members_page_complex(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>> {
        let mut conn = self.conn()?;

        let content = load_member_teams(&mut conn, condition, Some(request))?;

        page_with_count_skip(content, request, || {
            log::debug!(
                "Running count query for page {} (size {})",
                request.page(),
                request.size()
            );
            count_member_teams(&mut conn, condition)
        })
    }
}
