pub mod actors;
pub mod countries;
pub mod crew;
pub mod genres;
pub mod languages;
pub mod movies;
pub mod oscars;
pub mod search;
pub mod studios;
pub mod themes;
