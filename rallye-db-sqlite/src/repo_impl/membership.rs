use super::*;

impl<C: DerefMut<Target = SqliteConnection>> MembershipRepo for Connection<C> {
    fn membership_exists(&self, user_id: UserId, rally_id: RallyId) -> Result<bool> {
        use schema::rallies_to_users::dsl;
        let mut conn = self.conn();
        Ok(dsl::rallies_to_users
            .filter(dsl::rally_id.eq(rally_id.into_inner()))
            .filter(dsl::user_id.eq(user_id.into_inner()))
            .select(dsl::rally_id)
            .first::<i64>(&mut **conn)
            .optional()
            .map_err(from_diesel_err)?
            .is_some())
    }

    fn create_membership(&self, user_id: UserId, rally_id: RallyId) -> Result<()> {
        let insertable = models::NewRallyMembership {
            rally_id: rally_id.into_inner(),
            user_id: user_id.into_inner(),
        };
        let mut conn = self.conn();
        diesel::insert_into(schema::rallies_to_users::table)
            .values(&insertable)
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        Ok(())
    }

    fn delete_membership(&self, user_id: UserId, rally_id: RallyId) -> Result<()> {
        use schema::rallies_to_users::dsl;
        let mut conn = self.conn();
        diesel::delete(
            dsl::rallies_to_users
                .filter(dsl::rally_id.eq(rally_id.into_inner()))
                .filter(dsl::user_id.eq(user_id.into_inner())),
        )
        .execute(&mut **conn)
        .map_err(from_diesel_err)?;
        Ok(())
    }

    fn rally_ids_of_user(&self, user_id: UserId) -> Result<Vec<RallyId>> {
        use schema::rallies_to_users::dsl;
        let mut conn = self.conn();
        Ok(dsl::rallies_to_users
            .filter(dsl::user_id.eq(user_id.into_inner()))
            .select(dsl::rally_id)
            .load::<i64>(&mut **conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(RallyId::new)
            .collect())
    }
}
