pub const SITE_NAME: &str = "ClubHub";
pub const SITE_DESCRIPTION: &str = "Browse student clubs, join them and follow their events";
