//! Domain model for members and the flattened member/team projection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::team::Team;
use crate::domain::types::{MemberAge, MemberId, TeamId, TypeConstraintError, non_blank};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub username: Option<String>,
    pub age: MemberAge,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    team_id: Option<TeamId>,
}

impl Member {
    #[must_use]
    pub fn new(
        id: MemberId,
        username: Option<String>,
        age: MemberAge,
        team_id: Option<TeamId>,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            username,
            age,
            created_at,
            updated_at,
            team_id,
        }
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    /// Move the member from `current` to `next`, updating both rosters.
    ///
    /// `current` must be the team the member belongs to right now (or `None`
    /// when the member has no team). Passing `None` as `next` removes the
    /// member from its team.
    pub fn change_team(
        &mut self,
        current: Option<&mut Team>,
        next: Option<&mut Team>,
    ) -> Result<(), TypeConstraintError> {
        let current_id = current.as_ref().map(|team| team.id);
        if current_id != self.team_id {
            return Err(TypeConstraintError::InvalidValue(format!(
                "member {} is not on team {}",
                self.id,
                current_id.map_or_else(|| "<none>".to_string(), |id| id.to_string())
            )));
        }

        if let Some(team) = current {
            team.detach(self.id);
        }

        self.team_id = match next {
            Some(team) => {
                team.attach(self.id);
                Some(team.id)
            }
            None => None,
        };

        Ok(())
    }
}

/// Values required to persist a new member.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: MemberAge,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    /// Blank usernames are stored as `NULL`.
    #[must_use]
    pub fn new(username: Option<&str>, age: MemberAge, team_id: Option<TeamId>) -> Self {
        Self {
            username: non_blank(username),
            age,
            team_id,
        }
    }
}

/// One row of a member search: the member joined with its (optional) team.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MemberTeam {
    pub member_id: MemberId,
    pub username: Option<String>,
    pub age: MemberAge,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::TeamName;

    fn team(id: i32, name: &str) -> Team {
        let now = Utc::now().naive_utc();
        Team::new(
            TeamId::new(id).expect("valid team id"),
            TeamName::new(name).expect("valid team name"),
            now,
            now,
        )
    }

    fn member(id: i32, team_id: Option<i32>) -> Member {
        let now = Utc::now().naive_utc();
        Member::new(
            MemberId::new(id).expect("valid member id"),
            Some(format!("member{id}")),
            MemberAge::new(20).expect("valid age"),
            team_id.map(|t| TeamId::new(t).expect("valid team id")),
            now,
            now,
        )
    }

    #[test]
    fn joining_a_team_updates_both_sides() {
        let mut team_a = team(1, "teamA");
        let mut m = member(10, None);

        m.change_team(None, Some(&mut team_a)).expect("join team");

        assert_eq!(m.team_id(), Some(team_a.id));
        assert!(team_a.has_member(m.id));
    }

    #[test]
    fn moving_between_teams_keeps_rosters_in_sync() {
        let mut team_a = team(1, "teamA");
        let mut team_b = team(2, "teamB");
        let mut m = member(10, None);
        m.change_team(None, Some(&mut team_a)).expect("join team A");

        m.change_team(Some(&mut team_a), Some(&mut team_b))
            .expect("move to team B");

        assert_eq!(m.team_id(), Some(team_b.id));
        assert!(!team_a.has_member(m.id));
        assert_eq!(team_b.members(), &[m.id]);
    }

    #[test]
    fn leaving_a_team_clears_the_reference() {
        let mut team_a = team(1, "teamA");
        let mut m = member(10, None);
        m.change_team(None, Some(&mut team_a)).expect("join team");

        m.change_team(Some(&mut team_a), None).expect("leave team");

        assert_eq!(m.team_id(), None);
        assert!(team_a.members().is_empty());
    }

    #[test]
    fn wrong_current_team_is_rejected() {
        let mut team_a = team(1, "teamA");
        let mut team_b = team(2, "teamB");
        let mut m = member(10, Some(1));

        let result = m.change_team(Some(&mut team_b), Some(&mut team_a));

        assert!(matches!(result, Err(TypeConstraintError::InvalidValue(_))));
        assert_eq!(m.team_id(), Some(team_a.id));
        assert!(team_a.members().is_empty());
    }

    #[test]
    fn blank_username_is_stored_as_none() {
        let age = MemberAge::new(30).expect("valid age");
        assert_eq!(NewMember::new(Some("  "), age, None).username, None);
        assert_eq!(
            NewMember::new(Some("member1"), age, None).username.as_deref(),
            Some("member1")
        );
    }
}
