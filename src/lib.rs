//! Tooling for the recipe payload pipeline: recipes are kept on disk as
//! numbered `part<N>.json` chunk files and shipped to the site as one
//! combined `recipes_all.json`. The modules here move between the two
//! representations.

pub mod chunks;
pub mod combine;
pub mod split;
