use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// Full detail shape returned by the metadata provider. Same fields as a
/// stored movie plus the provider's quality rating, which has no column in
/// the local table and is dropped on save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub poster: String,
    pub rating_score: String,
}

impl MovieSummary {
    pub fn into_record(self) -> movie::Model {
        movie::Model {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            rated: self.rated,
            released: self.released,
            runtime: self.runtime,
            genre: self.genre,
            director: self.director,
            writer: self.writer,
            actors: self.actors,
            plot: self.plot,
            poster: self.poster,
        }
    }
}

/// Built-in sample set behind the seed endpoint.
pub fn sample_movies() -> Vec<movie::Model> {
    vec![
        movie::Model {
            imdb_id: "tt0111161".to_string(),
            title: "The Shawshank Redemption".to_string(),
            year: "1994".to_string(),
            rated: "R".to_string(),
            released: "14 Oct 1994".to_string(),
            runtime: "142 min".to_string(),
            genre: "Drama".to_string(),
            director: "Frank Darabont".to_string(),
            writer: "Stephen King, Frank Darabont".to_string(),
            actors: "Tim Robbins, Morgan Freeman, Bob Gunton".to_string(),
            plot: "Two imprisoned men bond over a number of years, finding solace and \
                   eventual redemption through acts of common decency."
                .to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5BMDAyY2FhYjctNDc5OS00MDNlLThiMGUtY2UxYWVkNGY2ZjljXkEyXkFqcGc@._V1_SX300.jpg".to_string(),
        },
        movie::Model {
            imdb_id: "tt2313197".to_string(),
            title: "Batman: The Dark Knight Returns, Part 1".to_string(),
            year: "2012".to_string(),
            rated: "PG-13".to_string(),
            released: "25 Sep 2012".to_string(),
            runtime: "76 min".to_string(),
            genre: "Animation, Action, Crime, Drama, Thriller".to_string(),
            director: "Jay Oliva".to_string(),
            writer: "Bob Kane (character created by: Batman), Frank Miller (comic book), \
                     Klaus Janson (comic book), Bob Goodman"
                .to_string(),
            actors: "Peter Weller, Ariel Winter, David Selby, Wade Williams".to_string(),
            plot: "Batman has not been seen for ten years. A new breed of criminal ravages \
                   Gotham City, forcing 55-year-old Bruce Wayne back into the cape and cowl."
                .to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5BMzIxMDkxNDM2M15BMl5BanBnXkFtZTcwMDA5ODY1OQ@@._V1_SX300.jpg".to_string(),
        },
        movie::Model {
            imdb_id: "tt0167260".to_string(),
            title: "The Lord of the Rings: The Return of the King".to_string(),
            year: "2003".to_string(),
            rated: "PG-13".to_string(),
            released: "17 Dec 2003".to_string(),
            runtime: "201 min".to_string(),
            genre: "Action, Adventure, Drama".to_string(),
            director: "Peter Jackson".to_string(),
            writer: "J.R.R. Tolkien, Fran Walsh, Philippa Boyens".to_string(),
            actors: "Elijah Wood, Viggo Mortensen, Ian McKellen".to_string(),
            plot: "Gandalf and Aragorn lead the World of Men against Sauron's army to draw \
                   his gaze from Frodo and Sam as they approach Mount Doom with the One Ring."
                .to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5BMTZkMjBjNWMtZGI5OC00MGU0LTk4ZTItODg2NWM3NTVmNWQ4XkEyXkFqcGc@._V1_SX300.jpg".to_string(),
        },
        movie::Model {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            rated: "PG-13".to_string(),
            released: "16 Jul 2010".to_string(),
            runtime: "148 min".to_string(),
            genre: "Action, Adventure, Sci-Fi".to_string(),
            director: "Christopher Nolan".to_string(),
            writer: "Christopher Nolan".to_string(),
            actors: "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page".to_string(),
            plot: "A thief who steals corporate secrets through the use of dream-sharing \
                   technology is given the inverse task of planting an idea into the mind \
                   of a C.E.O."
                .to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_SX300.jpg".to_string(),
        },
        movie::Model {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            rated: "R".to_string(),
            released: "31 Mar 1999".to_string(),
            runtime: "136 min".to_string(),
            genre: "Action, Sci-Fi".to_string(),
            director: "Lana Wachowski, Lilly Wachowski".to_string(),
            writer: "Lilly Wachowski, Lana Wachowski".to_string(),
            actors: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss".to_string(),
            plot: "When a beautiful stranger leads computer hacker Neo to a forbidding \
                   underworld, he discovers the shocking truth--the life he knows is the \
                   elaborate deception of an evil cyber-intelligence."
                .to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5BN2NmN2VhMTQtMDNiOS00NDlhLTliMjgtODE2ZTY0ODQyNDRhXkEyXkFqcGc@._V1_SX300.jpg".to_string(),
        },
    ]
}
