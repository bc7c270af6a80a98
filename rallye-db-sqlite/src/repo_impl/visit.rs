use super::*;

impl<C: DerefMut<Target = SqliteConnection>> VisitRepo for Connection<C> {
    fn create_visits(&self, visits: &[NewVisitRecord]) -> Result<()> {
        let insertables: Vec<_> = visits
            .iter()
            .map(|visit| models::NewLocationVisit {
                location_id: visit.location_id.into_inner(),
                user_id: visit.user_id.into_inner(),
                visited: visit.visited,
            })
            .collect();
        let mut conn = self.conn();
        diesel::insert_into(schema::locations_to_users::table)
            .values(&insertables)
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        Ok(())
    }

    fn delete_visits(&self, user_id: UserId, location_ids: &[LocationId]) -> Result<()> {
        use schema::locations_to_users::dsl;
        let ids: Vec<i64> = location_ids.iter().map(|id| id.into_inner()).collect();
        let mut conn = self.conn();
        diesel::delete(
            dsl::locations_to_users
                .filter(dsl::user_id.eq(user_id.into_inner()))
                .filter(dsl::location_id.eq_any(ids)),
        )
        .execute(&mut **conn)
        .map_err(from_diesel_err)?;
        Ok(())
    }

    fn set_visited(&self, user_id: UserId, location_id: LocationId, visited: bool) -> Result<()> {
        use schema::locations_to_users::dsl;
        let mut conn = self.conn();
        // Touching a pair without a visit record affects zero rows,
        // which is intentionally not an error.
        diesel::update(
            dsl::locations_to_users
                .filter(dsl::user_id.eq(user_id.into_inner()))
                .filter(dsl::location_id.eq(location_id.into_inner())),
        )
        .set(dsl::visited.eq(visited))
        .execute(&mut **conn)
        .map_err(from_diesel_err)?;
        Ok(())
    }

    fn visits_of_user(&self, user_id: UserId) -> Result<Vec<LocationVisit>> {
        use schema::locations_to_users::dsl;
        let mut conn = self.conn();
        Ok(dsl::locations_to_users
            .filter(dsl::user_id.eq(user_id.into_inner()))
            .load::<models::LocationVisitEntity>(&mut **conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(LocationVisit::from)
            .collect())
    }
}
