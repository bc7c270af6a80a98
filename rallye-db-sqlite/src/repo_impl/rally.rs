use super::*;

impl<C: DerefMut<Target = SqliteConnection>> RallyRepo for Connection<C> {
    fn create_rally(&self, rally: &NewRallyRecord) -> Result<RallyId> {
        let insertable = models::NewRally {
            creator_id: rally.creator_id.into_inner(),
            title: &rally.title,
            description: &rally.description,
            start_at: rally.start_at.into_seconds(),
            end_at: rally.end_at.into_seconds(),
            reward_points: rally.reward_points as i32,
        };
        let mut conn = self.conn();
        diesel::insert_into(schema::rallies::table)
            .values(&insertable)
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        let id = resolve_last_insert_rowid(&mut **conn)?;
        Ok(RallyId::new(id))
    }

    fn active_rally_rows(&self, now: Timestamp) -> Result<Vec<RallyLocationRow>> {
        use schema::{creators::dsl as c_dsl, locations::dsl as l_dsl, rallies::dsl as r_dsl};
        let mut conn = self.conn();
        Ok(r_dsl::rallies
            .inner_join(l_dsl::locations)
            .inner_join(c_dsl::creators)
            .filter(r_dsl::end_at.gt(now.into_seconds()))
            .select((
                r_dsl::id,
                r_dsl::title,
                r_dsl::description,
                r_dsl::start_at,
                r_dsl::end_at,
                r_dsl::users_count,
                r_dsl::reward_points,
                c_dsl::username,
                l_dsl::id,
                l_dsl::name,
                l_dsl::description,
                l_dsl::lat,
                l_dsl::lng,
            ))
            .load::<models::JoinedRallyLocation>(&mut **conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(RallyLocationRow::from)
            .collect())
    }

    fn chosen_rally_rows(&self, user_id: UserId) -> Result<Vec<RallyLocationRow>> {
        use schema::{
            creators::dsl as c_dsl, locations::dsl as l_dsl, locations_to_users::dsl as v_dsl,
            rallies::dsl as r_dsl, rallies_to_users::dsl as m_dsl,
        };
        let mut conn = self.conn();
        Ok(r_dsl::rallies
            .inner_join(l_dsl::locations.inner_join(v_dsl::locations_to_users))
            .inner_join(m_dsl::rallies_to_users)
            .inner_join(c_dsl::creators)
            .filter(m_dsl::user_id.eq(user_id.into_inner()))
            .filter(v_dsl::user_id.eq(user_id.into_inner()))
            .select((
                r_dsl::id,
                r_dsl::title,
                r_dsl::description,
                r_dsl::start_at,
                r_dsl::end_at,
                r_dsl::users_count,
                r_dsl::reward_points,
                c_dsl::username,
                l_dsl::id,
                l_dsl::name,
                l_dsl::description,
                l_dsl::lat,
                l_dsl::lng,
                v_dsl::visited,
            ))
            .load::<models::JoinedRallyLocationWithVisit>(&mut **conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(RallyLocationRow::from)
            .collect())
    }

    fn created_rally_rows(&self, creator_external_id: &str) -> Result<Vec<RallyLocationRow>> {
        use schema::{creators::dsl as c_dsl, locations::dsl as l_dsl, rallies::dsl as r_dsl};
        let mut conn = self.conn();
        Ok(r_dsl::rallies
            .inner_join(l_dsl::locations)
            .inner_join(c_dsl::creators)
            .filter(c_dsl::external_id.eq(creator_external_id))
            .select((
                r_dsl::id,
                r_dsl::title,
                r_dsl::description,
                r_dsl::start_at,
                r_dsl::end_at,
                r_dsl::users_count,
                r_dsl::reward_points,
                c_dsl::username,
                l_dsl::id,
                l_dsl::name,
                l_dsl::description,
                l_dsl::lat,
                l_dsl::lng,
            ))
            .load::<models::JoinedRallyLocation>(&mut **conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(RallyLocationRow::from)
            .collect())
    }

    fn adjust_users_count(&self, rally_id: RallyId, delta: i64) -> Result<()> {
        use schema::rallies::dsl;
        let mut conn = self.conn();
        let affected = diesel::update(dsl::rallies.filter(dsl::id.eq(rally_id.into_inner())))
            .set(dsl::users_count.eq(dsl::users_count + delta))
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        if affected == 0 {
            return Err(repo::Error::NotFound);
        }
        Ok(())
    }

    fn users_count_of_rally(&self, rally_id: RallyId) -> Result<u64> {
        use schema::rallies::dsl;
        let mut conn = self.conn();
        let count = dsl::rallies
            .filter(dsl::id.eq(rally_id.into_inner()))
            .select(dsl::users_count)
            .first::<i64>(&mut **conn)
            .map_err(from_diesel_err)?;
        Ok(count.max(0) as u64)
    }
}
