use super::{DeleteResult, IUserRepo};
use registro_domain::{Entity, User, UserId};
use std::sync::Mutex;

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(vec![]),
        }
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.lock().unwrap();
        let mut user = user.clone();
        if !user.id.is_assigned() {
            // Same allocation rule as the sqlite rowid: one past the largest
            let max = users.iter().map(|u| u.id().inner()).max().unwrap_or(0);
            user.id = UserId::new(max + 1);
        }
        match users.iter().position(|u| u.id() == user.id()) {
            // Replacing in place keeps the row's listing position
            Some(index) => users[index] = user,
            None => users.push(user),
        }
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, user_id: UserId) -> anyhow::Result<DeleteResult> {
        let mut users = self.users.lock().unwrap();
        let count_before = users.len();
        users.retain(|u| u.id() != user_id);
        Ok(DeleteResult {
            deleted_count: (count_before - users.len()) as i64,
        })
    }

    async fn delete(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.lock().unwrap();
        users.retain(|u| u != user);
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(index) = users.iter().position(|u| u.id() == user.id()) {
            users[index] = user.clone();
        }
        Ok(())
    }
}
