use super::*;

impl<C: DerefMut<Target = SqliteConnection>> UserRepo for Connection<C> {
    fn create_user(&self, user: &NewUserRecord) -> Result<User> {
        let insertable = models::NewUser {
            hash: &user.hash,
            username: &user.username,
            email: &user.email,
            exp: 0,
        };
        let mut conn = self.conn();
        diesel::insert_into(schema::users::table)
            .values(&insertable)
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        let id = resolve_last_insert_rowid(&mut **conn)?;
        Ok(User {
            id: UserId::new(id),
            hash: user.hash.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            exp: 0,
        })
    }

    fn try_get_user_by_hash(&self, hash: &str) -> Result<Option<User>> {
        use schema::users::dsl;
        let mut conn = self.conn();
        Ok(dsl::users
            .filter(dsl::hash.eq(hash))
            .first::<models::UserEntity>(&mut **conn)
            .optional()
            .map_err(from_diesel_err)?
            .map(User::from))
    }

    fn delete_user_by_hash(&self, hash: &str) -> Result<()> {
        use schema::users::dsl;
        let mut conn = self.conn();
        diesel::delete(dsl::users.filter(dsl::hash.eq(hash)))
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        Ok(())
    }

    fn award_points(&self, user_id: UserId, points: u32) -> Result<()> {
        use schema::users::dsl;
        let mut conn = self.conn();
        let affected = diesel::update(dsl::users.filter(dsl::id.eq(user_id.into_inner())))
            .set(dsl::exp.eq(dsl::exp + i64::from(points)))
            .execute(&mut **conn)
            .map_err(from_diesel_err)?;
        if affected == 0 {
            return Err(repo::Error::NotFound);
        }
        Ok(())
    }
}
