use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use readcommend::{
    db::BookRepository,
    models::{BookRecord, SearchSpecification},
    Error, Result,
};

/// Records every specification it is asked to search for.
#[derive(Default)]
pub struct RecordingBookRepository {
    specs: Mutex<Vec<SearchSpecification>>,
}

impl RecordingBookRepository {
    pub fn recorded(&self) -> Vec<SearchSpecification> {
        self.specs.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookRepository for RecordingBookRepository {
    async fn search(&self, spec: &SearchSpecification) -> Result<Vec<BookRecord>> {
        self.specs.lock().unwrap().push(spec.clone());
        Ok(Vec::new())
    }
}

/// Fails every search the way a NULL rating column would.
pub struct FailingBookRepository;

#[async_trait]
impl BookRepository for FailingBookRepository {
    async fn search(&self, _spec: &SearchSpecification) -> Result<Vec<BookRecord>> {
        Err(Error::Scan {
            column: "rating",
            source: "unexpected NULL in non-nullable column".into(),
        })
    }
}

/// Never answers within any reasonable request timeout.
pub struct StalledBookRepository;

#[async_trait]
impl BookRepository for StalledBookRepository {
    async fn search(&self, _spec: &SearchSpecification) -> Result<Vec<BookRecord>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}
