//! JSON shapes returned by the member search endpoints.

use serde::Serialize;

use crate::domain::member::MemberTeam;

/// Flattened member/team row, serialized in camelCase.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl From<MemberTeam> for MemberTeamDto {
    fn from(row: MemberTeam) -> Self {
        Self {
            member_id: row.member_id.get(),
            username: row.username,
            age: row.age.get(),
            team_id: row.team_id.map(|id| id.get()),
            team_name: row.team_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::types::{MemberAge, MemberId, TeamId};

    #[test]
    fn serializes_camel_case_fields() {
        let dto = MemberTeamDto::from(MemberTeam {
            member_id: MemberId::new(3).unwrap(),
            username: Some("member3".to_string()),
            age: MemberAge::new(3).unwrap(),
            team_id: Some(TeamId::new(2).unwrap()),
            team_name: Some("teamB".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "memberId": 3,
                "username": "member3",
                "age": 3,
                "teamId": 2,
                "teamName": "teamB",
            })
        );
    }

    #[test]
    fn member_without_team_has_null_team_fields() {
        let dto = MemberTeamDto::from(MemberTeam {
            member_id: MemberId::new(1).unwrap(),
            username: None,
            age: MemberAge::new(0).unwrap(),
            team_id: None,
            team_name: None,
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value["teamId"].is_null());
        assert!(value["teamName"].is_null());
        assert!(value["username"].is_null());
    }
}
