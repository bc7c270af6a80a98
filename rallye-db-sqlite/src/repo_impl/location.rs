use super::*;

impl<C: DerefMut<Target = SqliteConnection>> LocationRepo for Connection<C> {
    fn create_locations(&self, locations: &[NewLocationRecord]) -> Result<()> {
        let insertables: Vec<_> = locations
            .iter()
            .map(|location| {
                let (lat, lng) = location.pos.to_lat_lng_deg();
                models::NewLocation {
                    rally_id: location.rally_id.into_inner(),
                    name: &location.name,
                    description: &location.description,
                    lat,
                    lng,
                }
            })
            .collect();
        let mut conn = self.conn();
        diesel::insert_into(schema::locations::table)
            .values(&insertables)
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        Ok(())
    }

    fn location_ids_of_rally(&self, rally_id: RallyId) -> Result<Vec<LocationId>> {
        use schema::locations::dsl;
        let mut conn = self.conn();
        Ok(dsl::locations
            .filter(dsl::rally_id.eq(rally_id.into_inner()))
            .select(dsl::id)
            .load::<i64>(&mut **conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(LocationId::new)
            .collect())
    }
}
