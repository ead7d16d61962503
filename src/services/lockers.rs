//! Storage locker service

use validator::Validate;

use crate::{
    error::AppResult,
    models::locker::{CreateLocker, Locker, UpdateLocker},
    repository::Repository,
};

#[derive(Clone)]
pub struct LockersService {
    repository: Repository,
}

impl LockersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Locker>> {
        self.repository.lockers.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Locker> {
        self.repository.lockers.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateLocker) -> AppResult<Locker> {
        data.validate()?;
        self.repository.lockers.create(&data).await
    }

    pub async fn update(&self, id: i64, data: UpdateLocker) -> AppResult<Locker> {
        data.validate()?;
        self.repository.lockers.update(id, &data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.lockers.delete(id).await
    }
}
