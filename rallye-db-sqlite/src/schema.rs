///////////////////////////////////////////////////////////////////////
// Accounts
///////////////////////////////////////////////////////////////////////

table! {
    creators (id) {
        id -> BigInt,
        external_id -> Text,
        username -> Text,
    }
}

table! {
    users (id) {
        id -> BigInt,
        hash -> Text,
        username -> Text,
        email -> Text,
        exp -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Rallies
///////////////////////////////////////////////////////////////////////

table! {
    rallies (id) {
        id -> BigInt,
        creator_id -> BigInt,
        title -> Text,
        description -> Text,
        start_at -> BigInt,
        end_at -> BigInt,
        users_count -> BigInt,
        reward_points -> Integer,
    }
}

joinable!(rallies -> creators (creator_id));

table! {
    locations (id) {
        id -> BigInt,
        rally_id -> BigInt,
        name -> Text,
        description -> Text,
        lat -> Double,
        lng -> Double,
    }
}

joinable!(locations -> rallies (rally_id));

///////////////////////////////////////////////////////////////////////
// Participation
///////////////////////////////////////////////////////////////////////

table! {
    rallies_to_users (rally_id, user_id) {
        rally_id -> BigInt,
        user_id -> BigInt,
    }
}

joinable!(rallies_to_users -> rallies (rally_id));
joinable!(rallies_to_users -> users (user_id));

table! {
    locations_to_users (location_id, user_id) {
        location_id -> BigInt,
        user_id -> BigInt,
        visited -> Bool,
    }
}

joinable!(locations_to_users -> locations (location_id));
joinable!(locations_to_users -> users (user_id));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    creators,
    users,
    rallies,
    locations,
    rallies_to_users,
    locations_to_users,
);
