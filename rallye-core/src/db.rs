use crate::repositories::*;

/// The complete relational store as consumed by the use cases.
pub trait Db:
    RallyRepo + LocationRepo + MembershipRepo + VisitRepo + CreatorRepo + UserRepo
{
}

impl<T> Db for T where
    T: RallyRepo + LocationRepo + MembershipRepo + VisitRepo + CreatorRepo + UserRepo
{
}
