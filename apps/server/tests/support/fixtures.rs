use readcommend::models::{AuthorRecord, BookRecord, EraRecord, GenreRecord, SizeRecord};

pub fn author(id: i32, first_name: &str, last_name: &str) -> AuthorRecord {
    AuthorRecord {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

pub fn genre(id: i32, title: &str) -> GenreRecord {
    GenreRecord {
        id,
        title: title.to_string(),
    }
}

pub fn book(
    id: i32,
    title: &str,
    year_published: i16,
    rating: f32,
    pages: i16,
    author: AuthorRecord,
    genre: GenreRecord,
) -> BookRecord {
    BookRecord {
        id,
        title: title.to_string(),
        year_published,
        rating,
        pages,
        genre,
        author,
    }
}

pub fn sample_authors() -> Vec<AuthorRecord> {
    vec![
        author(1, "J.R.R.", "Tolkien"),
        author(2, "Ursula", "Le Guin"),
        author(3, "Frank", "Herbert"),
    ]
}

pub fn sample_genres() -> Vec<GenreRecord> {
    vec![
        genre(2, "Fantasy"),
        genre(6, "Science Fiction"),
        genre(3, "History"),
    ]
}

/// Mirrors the rows in `tests/fixtures/schema.sql` that the HTTP tests use.
pub fn sample_books() -> Vec<BookRecord> {
    let tolkien = author(1, "J.R.R.", "Tolkien");
    let le_guin = author(2, "Ursula", "Le Guin");
    let herbert = author(3, "Frank", "Herbert");
    let fantasy = genre(2, "Fantasy");
    let sf = genre(6, "Science Fiction");

    vec![
        book(1, "The Silmarillion", 1977, 4.2, 365, tolkien.clone(), fantasy.clone()),
        book(2, "The Dispossessed", 1974, 4.6, 387, le_guin.clone(), sf.clone()),
        book(3, "Dune", 1965, 4.4, 412, herbert, sf),
        book(4, "A Wizard of Earthsea", 1968, 4.1, 183, le_guin, fantasy.clone()),
        book(5, "The Lord of the Rings", 1954, 4.9, 1178, tolkien, fantasy),
    ]
}

pub fn sample_eras() -> Vec<EraRecord> {
    vec![
        EraRecord {
            id: 1,
            title: "Classic".to_string(),
            min_year: None,
            max_year: Some(1969),
        },
        EraRecord {
            id: 2,
            title: "Modern".to_string(),
            min_year: Some(1970),
            max_year: Some(2000),
        },
    ]
}

pub fn sample_sizes() -> Vec<SizeRecord> {
    vec![
        SizeRecord {
            id: 1,
            title: "Short story".to_string(),
            min_pages: None,
            max_pages: Some(50),
        },
        SizeRecord {
            id: 3,
            title: "Monument".to_string(),
            min_pages: Some(800),
            max_pages: None,
        },
    ]
}
