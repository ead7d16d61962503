//! Expense ledger service

use validator::Validate;

use crate::{
    error::AppResult,
    models::expense::{CreateExpense, Expense, UpdateExpense},
    repository::Repository,
};

#[derive(Clone)]
pub struct ExpensesService {
    repository: Repository,
}

impl ExpensesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, year: Option<i32>, month: Option<u32>) -> AppResult<Vec<Expense>> {
        self.repository.expenses.list(year, month).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Expense> {
        self.repository.expenses.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateExpense) -> AppResult<Expense> {
        data.validate()?;
        self.repository.expenses.create(&data).await
    }

    pub async fn update(&self, id: i64, data: UpdateExpense) -> AppResult<Expense> {
        data.validate()?;
        self.repository.expenses.update(id, &data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.expenses.delete(id).await
    }
}
