pub mod a001_artist_profile;
pub mod common;
