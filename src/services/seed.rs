//! Sample data for local development.

use crate::domain::member::NewMember;
use crate::domain::team::NewTeam;
use crate::domain::types::{MemberAge, TeamName};
use crate::repository::{MemberReader, MemberWriter, TeamWriter};
use crate::services::ServiceResult;

pub const SAMPLE_MEMBER_COUNT: i32 = 100;

/// Create `teamA`, `teamB` and `member0..member99`, even members in `teamA`.
///
/// Returns the number of members created; zero when members already exist.
pub fn init_sample_data<R>(repo: &R) -> ServiceResult<usize>
where
    R: MemberReader + MemberWriter + TeamWriter + ?Sized,
{
    if repo.count_members()? > 0 {
        log::info!("Members already present, skipping sample data");
        return Ok(0);
    }

    let team_a = repo.create_team(&NewTeam::new(TeamName::new("teamA")?))?;
    let team_b = repo.create_team(&NewTeam::new(TeamName::new("teamB")?))?;

    for i in 0..SAMPLE_MEMBER_COUNT {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        let username = format!("member{i}");
        repo.create_member(&NewMember::new(
            Some(&username),
            MemberAge::new(i)?,
            Some(team.id),
        ))?;
    }

    log::info!("Created {SAMPLE_MEMBER_COUNT} sample members");
    Ok(SAMPLE_MEMBER_COUNT as usize)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::member::Member;
    use crate::domain::team::Team;
    use crate::domain::types::{MemberId, TeamId};
    use crate::repository::mock::MockRepository;

    #[test]
    fn skips_when_members_exist() {
        let mut repo = MockRepository::new();
        repo.expect_count_members().returning(|| Ok(3));
        repo.expect_create_team().times(0);
        repo.expect_create_member().times(0);

        assert_eq!(init_sample_data(&repo).unwrap(), 0);
    }

    #[test]
    fn seeds_alternating_teams() {
        let mut repo = MockRepository::new();
        repo.expect_count_members().returning(|| Ok(0));

        let mut next_team = 0;
        repo.expect_create_team().times(2).returning(move |new_team| {
            next_team += 1;
            let now = Utc::now().naive_utc();
            Ok(Team::new(
                TeamId::new(next_team).unwrap(),
                new_team.name.clone(),
                now,
                now,
            ))
        });

        repo.expect_create_member()
            .times(SAMPLE_MEMBER_COUNT as usize)
            .returning(|new_member| {
                let age = new_member.age.get();
                let expected_team = if age % 2 == 0 { 1 } else { 2 };
                assert_eq!(new_member.team_id.map(|t| t.get()), Some(expected_team));
                assert_eq!(new_member.username.as_deref(), Some(format!("member{age}").as_str()));

                let now = Utc::now().naive_utc();
                Ok(Member::new(
                    MemberId::new(age + 1).unwrap(),
                    new_member.username.clone(),
                    new_member.age,
                    new_member.team_id,
                    now,
                    now,
                ))
            });

        assert_eq!(
            init_sample_data(&repo).unwrap(),
            SAMPLE_MEMBER_COUNT as usize
        );
    }
}
