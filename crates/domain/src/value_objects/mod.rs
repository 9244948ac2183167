//! Value objects: validated-by-construction field types

mod episode;
mod names;
mod release_date;

pub use episode::EpisodeNo;
pub use names::{MovieTitle, PersonName, SeriesName};
pub use release_date::{is_leap_year, ReleaseDate};
