pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{location_builder::*, rally_builder::*};

pub mod rally_builder {

    use super::*;
    use crate::{id::*, rally::*, time::Timestamp};

    #[derive(Debug)]
    pub struct RallyBuild {
        rally: Rally,
    }

    impl RallyBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.rally.id = id.into();
            self
        }
        pub fn creator_id(mut self, id: i64) -> Self {
            self.rally.creator_id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.rally.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.rally.description = desc.into();
            self
        }
        pub fn period(mut self, start_at: Timestamp, end_at: Timestamp) -> Self {
            self.rally.start_at = start_at;
            self.rally.end_at = end_at;
            self
        }
        pub fn users_count(mut self, count: u64) -> Self {
            self.rally.users_count = count;
            self
        }
        pub fn reward_points(mut self, points: u32) -> Self {
            self.rally.reward_points = points;
            self
        }
        pub fn finish(self) -> Rally {
            self.rally
        }
    }

    impl Builder for Rally {
        type Build = RallyBuild;
        fn build() -> RallyBuild {
            RallyBuild {
                rally: Rally {
                    id: RallyId::default(),
                    creator_id: CreatorId::default(),
                    title: "".into(),
                    description: "".into(),
                    start_at: Timestamp::from_seconds(0),
                    end_at: Timestamp::from_seconds(0),
                    users_count: 0,
                    reward_points: 0,
                },
            }
        }
    }
}

pub mod location_builder {

    use super::*;
    use crate::{geo::MapPoint, id::*, location::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn rally_id(mut self, id: i64) -> Self {
            self.location.rally_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.location.description = desc.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: LocationId::default(),
                    rally_id: RallyId::default(),
                    name: "".into(),
                    description: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                },
            }
        }
    }
}
