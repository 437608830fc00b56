use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        condition::MemberSearchCondition,
        member::{Member, MemberTeam, NewMember},
        team::{NewTeam, Team},
        types::{MemberId, TeamId},
    },
    pagination::{Page, PageRequest},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod member;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod predicate;
pub mod search;
pub mod team;

/// Diesel-backed repository shared by all request handlers.
///
/// Holds nothing but the pool handle, so clones are cheap and a single
/// instance can serve concurrent requests.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    fn list_members(&self) -> RepositoryResult<Vec<Member>>;
    fn list_members_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>>;
    fn member_exists(&self, id: MemberId) -> RepositoryResult<bool>;
    fn count_members(&self) -> RepositoryResult<usize>;
}

pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member>;
    /// Overwrite the username of every member younger than `age`.
    fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize>;
    /// Delete every member aged `age` or older.
    fn delete_members_from_age(&self, age: i32) -> RepositoryResult<usize>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    /// Load a team together with the ids of the members referencing it.
    fn get_team_with_members(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}

/// Member/team searches driven by a [`MemberSearchCondition`].
pub trait MemberSearchReader {
    /// Every matching row, in insertion order.
    fn search_members(&self, condition: &MemberSearchCondition)
    -> RepositoryResult<Vec<MemberTeam>>;

    /// One page of matching rows; always runs the count query.
    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>>;

    /// One page of matching rows; the count query runs only when the total
    /// cannot be inferred from the page itself.
    fn search_members_page_complex(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>>;
}
