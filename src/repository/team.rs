//! Repository implementation for teams.

use diesel::prelude::*;

use crate::{
    domain::{
        team::{NewTeam, Team},
        types::{MemberId, TeamId},
    },
    models::team::{NewTeam as DbNewTeam, Team as DbTeam},
    repository::{
        DieselRepository, TeamReader, TeamWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl TeamWriter for DieselRepository {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team> {
        use crate::schema::teams;

        let mut conn = self.conn()?;
        let insertable: DbNewTeam = new_team.into();

        let db_team = diesel::insert_into(teams::table)
            .values(&insertable)
            .get_result::<DbTeam>(&mut conn)?;

        Team::try_from(db_team).map_err(RepositoryError::from)
    }
}

impl TeamReader for DieselRepository {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        use crate::schema::teams;

        let mut conn = self.conn()?;
        let db_team = teams::table
            .find(id.get())
            .first::<DbTeam>(&mut conn)
            .optional()?;

        db_team
            .map(|t| Team::try_from(t).map_err(RepositoryError::from))
            .transpose()
    }

    fn get_team_with_members(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        use crate::schema::{members, teams};

        let mut conn = self.conn()?;
        let Some(db_team) = teams::table
            .find(id.get())
            .first::<DbTeam>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let member_ids = members::table
            .filter(members::team_id.eq(id.get()))
            .order(members::id.asc())
            .select(members::id)
            .load::<i32>(&mut conn)?
            .into_iter()
            .map(MemberId::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        let team = Team::try_from(db_team).map_err(RepositoryError::from)?;
        Ok(Some(team.with_members(member_ids)))
    }
}
