use super::*;

impl<C: DerefMut<Target = SqliteConnection>> CreatorRepo for Connection<C> {
    fn resolve_creator(&self, external_id: &str) -> Result<Option<CreatorId>> {
        use schema::creators::dsl;
        let mut conn = self.conn();
        Ok(dsl::creators
            .filter(dsl::external_id.eq(external_id))
            .select(dsl::id)
            .first::<i64>(&mut **conn)
            .optional()
            .map_err(from_diesel_err)?
            .map(CreatorId::new))
    }

    fn create_creator(&self, creator: &NewCreatorRecord) -> Result<CreatorId> {
        use schema::creators::dsl;
        let mut conn = self.conn();
        diesel::insert_into(dsl::creators)
            .values((
                dsl::external_id.eq(&creator.external_id),
                dsl::username.eq(&creator.username),
            ))
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        let id = resolve_last_insert_rowid(&mut **conn)?;
        Ok(CreatorId::new(id))
    }
}
