//! Diesel models for members and the member/team search row.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::member::{
    Member as DomainMember, MemberTeam as DomainMemberTeam, NewMember as DomainNewMember,
};
use crate::domain::types::{MemberAge, MemberId, TeamId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of [`Member`].
pub struct NewMember<'a> {
    pub username: Option<&'a str>,
    pub age: i32,
    pub team_id: Option<i32>,
}

/// Flattened result of `members LEFT JOIN teams`.
///
/// Team columns are nullable because of the outer join; a member without a
/// team yields `None` for both.
#[derive(Debug, Clone, Queryable, PartialEq)]
pub struct MemberTeamRow {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        Ok(Self::new(
            MemberId::try_from(member.id)?,
            member.username,
            MemberAge::try_from(member.age)?,
            member.team_id.map(TeamId::try_from).transpose()?,
            member.created_at,
            member.updated_at,
        ))
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_deref(),
            age: member.age.get(),
            team_id: member.team_id.map(TeamId::get),
        }
    }
}

impl TryFrom<MemberTeamRow> for DomainMemberTeam {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeamRow) -> Result<Self, Self::Error> {
        Ok(Self {
            member_id: MemberId::try_from(row.member_id)?,
            username: row.username,
            age: MemberAge::try_from(row.age)?,
            team_id: row.team_id.map(TeamId::try_from).transpose()?,
            team_name: row.team_name,
        })
    }
}
