//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::condition::MemberSearchCondition;
use crate::domain::member::{Member, MemberTeam, NewMember};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{MemberId, TeamId};
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberReader, MemberSearchReader, MemberWriter, TeamReader, TeamWriter};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_members(&self) -> RepositoryResult<Vec<Member>>;
        fn list_members_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>>;
        fn member_exists(&self, id: MemberId) -> RepositoryResult<bool>;
        fn count_members(&self) -> RepositoryResult<usize>;
    }

    impl MemberWriter for Repository {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
        fn change_member_team(
            &self,
            member_id: MemberId,
            team_id: Option<TeamId>,
        ) -> RepositoryResult<Member>;
        fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize>;
        fn delete_members_from_age(&self, age: i32) -> RepositoryResult<usize>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn get_team_with_members(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }

    impl MemberSearchReader for Repository {
        fn search_members(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<MemberTeam>>;
        fn search_members_page_simple(
            &self,
            condition: &MemberSearchCondition,
            request: &PageRequest,
        ) -> RepositoryResult<Page<MemberTeam>>;
        fn search_members_page_complex(
            &self,
            condition: &MemberSearchCondition,
            request: &PageRequest,
        ) -> RepositoryResult<Page<MemberTeam>>;
    }
}
