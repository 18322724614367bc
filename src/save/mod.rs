//! Gear profile persistence

pub mod profile;

pub use profile::{
    default_profile_path, load_profile, profile_exists, save_profile, GearProfile, ProfileError,
};
