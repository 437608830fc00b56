//! Repository implementation for members.

use diesel::dsl::now;
use diesel::prelude::*;

use crate::{
    domain::{
        member::{Member, NewMember},
        types::{MemberId, TeamId},
    },
    models::member::{Member as DbMember, NewMember as DbNewMember},
    repository::{
        DieselRepository, MemberReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(db_members: Vec<DbMember>) -> RepositoryResult<Vec<Member>> {
    db_members
        .into_iter()
        .map(|m| Member::try_from(m).map_err(RepositoryError::from))
        .collect()
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        db_member
            .map(|m| Member::try_from(m).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_members(&self) -> RepositoryResult<Vec<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_members = members::table
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }

    fn list_members_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_members = members::table
            .filter(members::username.eq(username))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }

    fn member_exists(&self, id: MemberId) -> RepositoryResult<bool> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        // A single-row probe instead of counting.
        let found = members::table
            .filter(members::id.eq(id.get()))
            .select(members::id)
            .first::<i32>(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }

    fn count_members(&self) -> RepositoryResult<usize> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let total: i64 = members::table.count().get_result(&mut conn)?;

        Ok(total as usize)
    }
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let insertable: DbNewMember = new_member.into();

        let db_member = diesel::insert_into(members::table)
            .values(&insertable)
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }

    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let db_member = diesel::update(members::table.find(member_id.get()))
            .set((
                members::team_id.eq(team_id.map(TeamId::get)),
                members::updated_at.eq(now),
            ))
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }

    fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let affected = diesel::update(members::table.filter(members::age.lt(age)))
            .set((members::username.eq(username), members::updated_at.eq(now)))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_members_from_age(&self, age: i32) -> RepositoryResult<usize> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(members::table.filter(members::age.ge(age))).execute(&mut conn)?;

        Ok(affected)
    }
}
