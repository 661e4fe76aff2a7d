//! Group-by-mean aggregations feeding the bar and bubble scenes.
//!
//! Groups keep the order in which their key first appears in the input, and
//! every sort is stable, so ties resolve to dataset order. Rows without a
//! finite popularity are skipped before grouping; a group only exists once it
//! has at least one numeric value, so a mean never divides by zero.

use std::collections::HashMap;

use super::dataset::{GenreYearRecord, TrackRecord};

/// Genre filter value that disables filtering.
pub const ALL_GENRES: &str = "all";

/// Number of bars drawn in the artist scene.
pub const TOP_ARTIST_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistPopularity {
    pub artist: String,
    pub popularity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenrePopularity {
    pub genre: String,
    pub popularity: f64,
}

/// Mean popularity per artist, highest first, capped at [`TOP_ARTIST_LIMIT`].
pub fn top_artists_by_genre(rows: &[TrackRecord], genre: &str) -> Vec<ArtistPopularity> {
    let matching = rows
        .iter()
        .filter(|row| genre == ALL_GENRES || row.genre == genre)
        .filter_map(|row| Some((row.artist_name.as_str(), finite(row.popularity)?)));

    let mut artists: Vec<ArtistPopularity> = grouped_means(matching)
        .into_iter()
        .map(|(artist, popularity)| ArtistPopularity { artist, popularity })
        .collect();

    artists.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    artists.truncate(TOP_ARTIST_LIMIT);
    artists
}

/// Mean popularity per genre among rows tagged with exactly `year`.
pub fn genre_popularity_by_year(rows: &[GenreYearRecord], year: i32) -> Vec<GenrePopularity> {
    let matching = rows
        .iter()
        .filter(|row| row.year == Some(year))
        .filter_map(|row| Some((row.genre.as_str(), finite(row.popularity)?)));

    grouped_means(matching)
        .into_iter()
        .map(|(genre, popularity)| GenrePopularity { genre, popularity })
        .collect()
}

/// Distinct values in first-appearance order.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Options for the genre dropdown: the `all` sentinel, then every genre of the
/// track dataset.
pub fn genre_options(rows: &[TrackRecord]) -> Vec<String> {
    let mut options = vec![ALL_GENRES.to_string()];
    options.extend(
        distinct(rows.iter().map(|row| row.genre.as_str()))
            .into_iter()
            .filter(|genre| genre != ALL_GENRES),
    );
    options
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn value(self) -> f64 {
        self.sum / self.count as f64
    }
}

fn grouped_means<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<(String, f64)> {
    let mut groups: Vec<(&'a str, Mean)> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for (key, value) in pairs {
        match slots.get(key) {
            Some(&slot) => {
                let mean = &mut groups[slot].1;
                mean.sum += value;
                mean.count += 1;
            }
            None => {
                slots.insert(key, groups.len());
                groups.push((key, Mean { sum: value, count: 1 }));
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, mean)| (key.to_string(), mean.value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(artist: &str, genre: &str, popularity: Option<f64>) -> TrackRecord {
        TrackRecord {
            artist_name: artist.into(),
            genre: genre.into(),
            popularity,
        }
    }

    fn genre_year(genre: &str, year: i32, popularity: f64) -> GenreYearRecord {
        GenreYearRecord {
            genre: genre.into(),
            year: Some(year),
            popularity: Some(popularity),
        }
    }

    #[test]
    fn artists_are_averaged_and_sorted() {
        let rows = vec![
            track("A", "Pop", Some(50.0)),
            track("B", "Pop", Some(80.0)),
            track("A", "Rock", Some(70.0)),
            track("C", "Rock", Some(65.0)),
        ];

        let all = top_artists_by_genre(&rows, ALL_GENRES);
        let names: Vec<_> = all.iter().map(|a| a.artist.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
        assert_eq!(all[2].popularity, 60.0);

        let rock = top_artists_by_genre(&rows, "Rock");
        assert_eq!(rock.len(), 2);
        assert_eq!(rock[0].artist, "A");
        assert_eq!(rock[0].popularity, 70.0);
    }

    #[test]
    fn artist_list_is_capped_and_non_increasing() {
        let rows: Vec<_> = (0..25)
            .map(|i| track(&format!("artist-{i}"), "Jazz", Some((i * 7 % 13) as f64)))
            .collect();

        for genre in [ALL_GENRES, "Jazz", "Opera"] {
            let top = top_artists_by_genre(&rows, genre);
            assert!(top.len() <= TOP_ARTIST_LIMIT);
            assert!(top.windows(2).all(|w| w[0].popularity >= w[1].popularity));
        }
        assert!(top_artists_by_genre(&rows, "Opera").is_empty());
    }

    #[test]
    fn ties_keep_dataset_order() {
        let rows = vec![
            track("First", "Pop", Some(40.0)),
            track("Second", "Pop", Some(40.0)),
            track("Third", "Pop", Some(40.0)),
        ];
        let names: Vec<_> = top_artists_by_genre(&rows, "Pop")
            .into_iter()
            .map(|a| a.artist)
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn rows_without_popularity_are_skipped() {
        let rows = vec![
            track("A", "Pop", None),
            track("A", "Pop", Some(30.0)),
            track("Ghost", "Pop", None),
        ];
        let top = top_artists_by_genre(&rows, ALL_GENRES);
        assert_eq!(
            top,
            vec![ArtistPopularity {
                artist: "A".into(),
                popularity: 30.0
            }]
        );
    }

    #[test]
    fn non_finite_popularity_never_ranks() {
        let rows = vec![
            track("Real", "Pop", Some(90.0)),
            track("Ghost", "Pop", Some(f64::NAN)),
            track("Comet", "Pop", Some(f64::INFINITY)),
            track("Real", "Pop", Some(f64::NEG_INFINITY)),
        ];
        let top = top_artists_by_genre(&rows, "Pop");
        assert_eq!(
            top,
            vec![ArtistPopularity {
                artist: "Real".into(),
                popularity: 90.0
            }]
        );

        let years = vec![genre_year("pop", 2001, f64::NAN), genre_year("rock", 2001, 40.0)];
        let stats = genre_popularity_by_year(&years, 2001);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].genre, "rock");
    }

    #[test]
    fn genres_are_averaged_for_exact_year() {
        let rows = vec![
            genre_year("pop", 2001, 60.0),
            genre_year("rock", 2001, 40.0),
            genre_year("pop", 2001, 70.0),
            genre_year("pop", 2002, 10.0),
        ];
        let stats = genre_popularity_by_year(&rows, 2001);
        assert_eq!(
            stats,
            vec![
                GenrePopularity {
                    genre: "pop".into(),
                    popularity: 65.0
                },
                GenrePopularity {
                    genre: "rock".into(),
                    popularity: 40.0
                },
            ]
        );
    }

    #[test]
    fn missing_year_yields_nothing() {
        let rows = vec![genre_year("pop", 2001, 60.0)];
        assert!(genre_popularity_by_year(&rows, 1999).is_empty());
        assert!(genre_popularity_by_year(&[], 2001).is_empty());
    }

    #[test]
    fn genre_options_start_with_sentinel() {
        let rows = vec![
            track("A", "Rock", Some(1.0)),
            track("B", "Pop", Some(1.0)),
            track("C", "Rock", Some(1.0)),
        ];
        assert_eq!(genre_options(&rows), ["all", "Rock", "Pop"]);
    }
}
