//! Domain model for teams and their member roster.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{MemberId, TeamId, TeamName};

/// A team with the ids of the members that point at it.
///
/// The roster is informational: `Member::team_id` is the owning side of the
/// relationship and the roster is only changed through
/// [`crate::domain::member::Member::change_team`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    members: Vec<MemberId>,
}

impl Team {
    #[must_use]
    pub fn new(
        id: TeamId,
        name: TeamName,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
            members: Vec::new(),
        }
    }

    /// Attach the roster loaded from storage.
    #[must_use]
    pub fn with_members(mut self, members: Vec<MemberId>) -> Self {
        self.members = members;
        self
    }

    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn has_member(&self, member_id: MemberId) -> bool {
        self.members.contains(&member_id)
    }

    pub(crate) fn attach(&mut self, member_id: MemberId) {
        if !self.has_member(member_id) {
            self.members.push(member_id);
        }
    }

    pub(crate) fn detach(&mut self, member_id: MemberId) {
        self.members.retain(|id| *id != member_id);
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeam {
    pub name: TeamName,
}

impl NewTeam {
    #[must_use]
    pub fn new(name: TeamName) -> Self {
        Self { name }
    }
}
