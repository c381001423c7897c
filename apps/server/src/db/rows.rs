//! Row mapping from result rows to catalog records
//!
//! Columns are read by position because the book projection repeats column
//! names (`book.id`, `author.id`, `genre.id`). Every read goes through
//! [`Nullable`], so a NULL in a required column fails the row instead of
//! being read as zero.

use sqlx::error::BoxDynError;
use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};

use super::nullable::Nullable;
use super::search::BOOK_COLUMNS;
use crate::models::{AuthorRecord, BookRecord, EraRecord, GenreRecord, SizeRecord};
use crate::{Error, Result};

pub const AUTHOR_COLUMNS: [&str; 3] = ["id", "first_name", "last_name"];
pub const GENRE_COLUMNS: [&str; 2] = ["id", "title"];
pub const ERA_COLUMNS: [&str; 4] = ["id", "title", "min_year", "max_year"];
pub const SIZE_COLUMNS: [&str; 4] = ["id", "title", "min_pages", "max_pages"];

/// Positional column access over one result row.
///
/// Implemented for PostgreSQL rows; tests implement it over plain values.
pub trait RowSource {
    fn int16(&self, index: usize) -> std::result::Result<Nullable<i16>, BoxDynError>;
    fn int32(&self, index: usize) -> std::result::Result<Nullable<i32>, BoxDynError>;
    fn float32(&self, index: usize) -> std::result::Result<Nullable<f32>, BoxDynError>;
    fn text(&self, index: usize) -> std::result::Result<Nullable<String>, BoxDynError>;
}

impl RowSource for PgRow {
    fn int16(&self, index: usize) -> std::result::Result<Nullable<i16>, BoxDynError> {
        decode(self, index)
    }

    fn int32(&self, index: usize) -> std::result::Result<Nullable<i32>, BoxDynError> {
        decode(self, index)
    }

    fn float32(&self, index: usize) -> std::result::Result<Nullable<f32>, BoxDynError> {
        decode(self, index)
    }

    fn text(&self, index: usize) -> std::result::Result<Nullable<String>, BoxDynError> {
        decode(self, index)
    }
}

fn decode<T>(row: &PgRow, index: usize) -> std::result::Result<Nullable<T>, BoxDynError>
where
    T: for<'r> Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get::<Nullable<T>, _>(index).map_err(Into::into)
}

/// Reads typed columns and labels failures with the projected column name.
struct ColumnReader<'a, R: ?Sized> {
    row: &'a R,
    columns: &'static [&'static str],
}

impl<'a, R: RowSource + ?Sized> ColumnReader<'a, R> {
    fn new(row: &'a R, columns: &'static [&'static str]) -> Self {
        Self { row, columns }
    }

    fn name(&self, index: usize) -> &'static str {
        self.columns.get(index).copied().unwrap_or("<unknown>")
    }

    fn required<T>(
        &self,
        index: usize,
        read: impl FnOnce(&R, usize) -> std::result::Result<Nullable<T>, BoxDynError>,
    ) -> Result<T> {
        let column = self.name(index);
        match read(self.row, index).map_err(|e| Error::scan(column, e))? {
            Nullable::Value(v) => Ok(v),
            Nullable::Null => Err(Error::scan(column, "unexpected NULL in non-nullable column")),
        }
    }

    fn optional<T>(
        &self,
        index: usize,
        read: impl FnOnce(&R, usize) -> std::result::Result<Nullable<T>, BoxDynError>,
    ) -> Result<Option<T>> {
        let column = self.name(index);
        read(self.row, index)
            .map(Nullable::into_option)
            .map_err(|e| Error::scan(column, e))
    }

    fn int16(&self, index: usize) -> Result<i16> {
        self.required(index, R::int16)
    }

    fn int32(&self, index: usize) -> Result<i32> {
        self.required(index, R::int32)
    }

    fn float32(&self, index: usize) -> Result<f32> {
        self.required(index, R::float32)
    }

    fn text(&self, index: usize) -> Result<String> {
        self.required(index, R::text)
    }

    fn nullable_int16(&self, index: usize) -> Result<Option<i16>> {
        self.optional(index, R::int16)
    }
}

/// Map one row of the book search projection.
pub fn map_book_row<R: RowSource + ?Sized>(row: &R) -> Result<BookRecord> {
    let r = ColumnReader::new(row, &BOOK_COLUMNS);
    Ok(BookRecord {
        id: r.int32(0)?,
        title: r.text(1)?,
        year_published: r.int16(2)?,
        rating: r.float32(3)?,
        pages: r.int16(4)?,
        author: AuthorRecord {
            id: r.int32(5)?,
            first_name: r.text(6)?,
            last_name: r.text(7)?,
        },
        genre: GenreRecord {
            id: r.int32(8)?,
            title: r.text(9)?,
        },
    })
}

pub fn map_author_row<R: RowSource + ?Sized>(row: &R) -> Result<AuthorRecord> {
    let r = ColumnReader::new(row, &AUTHOR_COLUMNS);
    Ok(AuthorRecord {
        id: r.int32(0)?,
        first_name: r.text(1)?,
        last_name: r.text(2)?,
    })
}

pub fn map_genre_row<R: RowSource + ?Sized>(row: &R) -> Result<GenreRecord> {
    let r = ColumnReader::new(row, &GENRE_COLUMNS);
    Ok(GenreRecord {
        id: r.int32(0)?,
        title: r.text(1)?,
    })
}

pub fn map_era_row<R: RowSource + ?Sized>(row: &R) -> Result<EraRecord> {
    let r = ColumnReader::new(row, &ERA_COLUMNS);
    Ok(EraRecord {
        id: r.int32(0)?,
        title: r.text(1)?,
        min_year: r.nullable_int16(2)?,
        max_year: r.nullable_int16(3)?,
    })
}

pub fn map_size_row<R: RowSource + ?Sized>(row: &R) -> Result<SizeRecord> {
    let r = ColumnReader::new(row, &SIZE_COLUMNS);
    Ok(SizeRecord {
        id: r.int32(0)?,
        title: r.text(1)?,
        min_pages: r.nullable_int16(2)?,
        max_pages: r.nullable_int16(3)?,
    })
}
